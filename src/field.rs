//! Single-field escaping and unescaping.
//!
//! A field is wrapped in the item delimiter when it contains the item separator or
//! the delimiter itself. How the content is escaped depends on the delimiter:
//!
//! - **Default `"`**: every embedded `"` is doubled, then the field is wrapped
//!   (`3"` becomes `"3"""`)
//! - **Any other delimiter**: the field is wrapped verbatim with no doubling
//!   (`5"five,six"` with delimiter `|` becomes `|5"five,six"|`)
//!
//! [`decode`] reverses this: it strips one delimiter from each end and, for the
//! default delimiter only, collapses `""` back to `"`. Text that is not wrapped is
//! returned unchanged, so `decode(encode(v)) == v` for every `v`.
//!
//! ## Examples
//!
//! ```rust
//! use csv_codec::{field, CsvConfig};
//!
//! let config = CsvConfig::new();
//! assert_eq!(field::encode("7,7.1", &config), "\"7,7.1\"");
//! assert_eq!(field::decode("\"3\"\"\"", &config), "3\"");
//!
//! let tilde = CsvConfig::new().with_item_delimiter("~^~");
//! assert_eq!(field::encode("with, comma", &tilde), "~^~with, comma~^~");
//! assert_eq!(field::decode("~^~with, comma~^~", &tilde), "with, comma");
//! ```

use crate::CsvConfig;
use log::trace;
use std::borrow::Cow;

/// Returns `true` if `value` must be wrapped in the delimiter to survive a round trip.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{field, CsvConfig};
///
/// let config = CsvConfig::new();
/// assert!(field::needs_escaping("a,b", &config));
/// assert!(field::needs_escaping("say \"hi\"", &config));
/// assert!(!field::needs_escaping("plain", &config));
///
/// // `"` only triggers quoting while it is the delimiter
/// let pipe = CsvConfig::new().with_item_delimiter("|");
/// assert!(!field::needs_escaping("3\"", &pipe));
/// ```
#[inline]
#[must_use]
pub fn needs_escaping(value: &str, config: &CsvConfig) -> bool {
    let separator = config.item_separator.as_str();
    let delimiter = config.item_delimiter.as_str();
    (!separator.is_empty() && value.contains(separator))
        || (!delimiter.is_empty() && value.contains(delimiter))
        || straddles_separator(value, separator)
}

// A multi-character separator can also match across a field boundary: the field's
// tail plus the separator's head, or the separator's tail plus the field's head.
fn straddles_separator(value: &str, separator: &str) -> bool {
    separator
        .char_indices()
        .skip(1)
        .any(|(i, _)| value.ends_with(&separator[..i]) || value.starts_with(&separator[i..]))
}

/// Encodes `value` as a CSV field, borrowing it unchanged when no escaping is needed.
#[must_use]
pub fn encode<'a>(value: &'a str, config: &CsvConfig) -> Cow<'a, str> {
    if value.is_empty() || !needs_escaping(value, config) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(wrap(value, config))
}

/// Encodes `value` wrapped in the delimiter whether or not it needs escaping.
///
/// Date/time fields are always written this way.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{field, CsvConfig};
///
/// assert_eq!(field::encode_wrapped("10:30:00", &CsvConfig::new()), "\"10:30:00\"");
/// ```
#[must_use]
pub fn encode_wrapped(value: &str, config: &CsvConfig) -> String {
    wrap(value, config)
}

fn wrap(value: &str, config: &CsvConfig) -> String {
    let delimiter = config.item_delimiter.as_str();
    let mut output = String::with_capacity(value.len() + 2 * delimiter.len() + 2);
    output.push_str(delimiter);
    if config.uses_default_delimiter() {
        for ch in value.chars() {
            if ch == '"' {
                output.push_str("\"\"");
            } else {
                output.push(ch);
            }
        }
    } else {
        output.push_str(value);
    }
    output.push_str(delimiter);
    output
}

/// Decodes one field's raw text back into its value.
///
/// Never fails: text that is not wrapped in the delimiter, or is too short to hold
/// both an opening and a closing delimiter, comes back unchanged.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{field, CsvConfig};
///
/// let config = CsvConfig::new();
/// assert_eq!(field::decode("\"\"\"7,7.1\"\"\"", &config), "\"7,7.1\"");
/// assert_eq!(field::decode("7,7.1", &config), "7,7.1");
/// assert_eq!(field::decode("\"", &config), "\"");
/// ```
#[must_use]
pub fn decode<'a>(text: &'a str, config: &CsvConfig) -> Cow<'a, str> {
    let delimiter = config.item_delimiter.as_str();
    if delimiter.is_empty() || !text.starts_with(delimiter) {
        return Cow::Borrowed(text);
    }
    if text.len() < 2 * delimiter.len() || !text.ends_with(delimiter) {
        trace!("Field {:?} is not closed by {:?}, leaving it as-is", text, delimiter);
        return Cow::Borrowed(text);
    }

    let inner = &text[delimiter.len()..text.len() - delimiter.len()];
    if config.uses_default_delimiter() && inner.contains("\"\"") {
        Cow::Owned(inner.replace("\"\"", "\""))
    } else {
        Cow::Borrowed(inner)
    }
}
