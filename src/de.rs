//! CSV parsing.
//!
//! This module splits rows into fields and tables into rows, decoding each field
//! with [`field::decode`].
//!
//! ## Splitting Rules
//!
//! A row is split on the item separator. A field that opens with the item
//! delimiter runs to its closing delimiter, so separators inside it do not split:
//!
//! - **Default `"`**: a doubled `""` inside the field is an escaped quote; the first
//!   single `"` closes the field
//! - **Custom delimiter**: the first delimiter that is followed by the separator
//!   (or the end of the line) closes the field
//!
//! On a line with no delimiters this is a plain split. Parsing never fails: an
//! unterminated wrapped field runs to the end of the line and is returned as-is.
//!
//! Tables are split on the row separator. Fields cannot span rows.
//!
//! ## Examples
//!
//! ```rust
//! use csv_codec::{parse_row_with_config, CsvConfig};
//!
//! let config = CsvConfig::new();
//! assert_eq!(
//!     parse_row_with_config("1,\"between \"\"quotes\"\" here\",\"with, comma\",", &config),
//!     vec!["1", "between \"quotes\" here", "with, comma", ""]
//! );
//!
//! let tilde = CsvConfig::new().with_item_delimiter("~^~");
//! assert_eq!(
//!     parse_row_with_config("1,~^~with, comma~^~,", &tilde),
//!     vec!["1", "with, comma", ""]
//! );
//! ```

use crate::{field, CsvConfig};
use log::trace;

/// Decodes a single field's raw text. Unwrapped text comes back unchanged.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{from_csv_field_with_config, CsvConfig};
///
/// let pipe = CsvConfig::new().with_item_delimiter("|");
/// assert_eq!(from_csv_field_with_config("|5\"five,six\"|", &pipe), "5\"five,six\"");
/// ```
#[must_use]
pub fn from_csv_field_with_config(text: &str, config: &CsvConfig) -> String {
    field::decode(text, config).into_owned()
}

/// Splits one row into raw, still-encoded field texts.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{de::split_row, CsvConfig};
///
/// let config = CsvConfig::new();
/// assert_eq!(split_row("a,\"b,c\",", &config), vec!["a", "\"b,c\"", ""]);
/// ```
#[must_use]
pub fn split_row<'a>(line: &'a str, config: &CsvConfig) -> Vec<&'a str> {
    let separator = config.item_separator.as_str();
    let delimiter = config.item_delimiter.as_str();
    if separator.is_empty() {
        return vec![line];
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    loop {
        let rest = &line[start..];
        let scan_from = if !delimiter.is_empty() && rest.starts_with(delimiter) {
            match closing_delimiter_end(rest, config) {
                Some(end) => end,
                None => {
                    trace!("Unterminated field {:?}, taking the rest of the line", rest);
                    pieces.push(rest);
                    return pieces;
                }
            }
        } else {
            0
        };

        match rest[scan_from..].find(separator) {
            Some(offset) => {
                let end = start + scan_from + offset;
                pieces.push(&line[start..end]);
                start = end + separator.len();
            }
            None => {
                pieces.push(rest);
                return pieces;
            }
        }
    }
}

/// Byte offset just past the delimiter closing the wrapped field at the start of `rest`.
fn closing_delimiter_end(rest: &str, config: &CsvConfig) -> Option<usize> {
    let delimiter = config.item_delimiter.as_str();

    if config.uses_default_delimiter() {
        let bytes = rest.as_bytes();
        let mut i = 1;
        while i < bytes.len() {
            if bytes[i] == b'"' {
                if bytes.get(i + 1) == Some(&b'"') {
                    i += 2;
                    continue;
                }
                return Some(i + 1);
            }
            i += 1;
        }
        return None;
    }

    let separator = config.item_separator.as_str();
    let step = delimiter.chars().next().map_or(1, char::len_utf8);
    let mut from = delimiter.len();
    while let Some(offset) = rest[from..].find(delimiter) {
        let end = from + offset + delimiter.len();
        let after = &rest[end..];
        if after.is_empty() || after.starts_with(separator) {
            return Some(end);
        }
        from += offset + step;
    }
    None
}

/// Parses one row (without its row separator) into decoded field values.
#[must_use]
pub fn parse_row_with_config(line: &str, config: &CsvConfig) -> Vec<String> {
    split_row(line, config)
        .into_iter()
        .map(|piece| field::decode(piece, config).into_owned())
        .collect()
}

/// Parses a table into rows of decoded field values.
///
/// The segment after a final row separator is not a row; empty text has no rows.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{parse_table_with_config, CsvConfig};
///
/// let config = CsvConfig::new().with_row_separator("\r\n");
/// assert_eq!(
///     parse_table_with_config("Id,Name\r\n1,\"Smith, J\"\r\n", &config),
///     vec![vec!["Id", "Name"], vec!["1", "Smith, J"]]
/// );
/// assert!(parse_table_with_config("", &config).is_empty());
/// ```
#[must_use]
pub fn parse_table_with_config(text: &str, config: &CsvConfig) -> Vec<Vec<String>> {
    if text.is_empty() {
        return Vec::new();
    }
    let row_separator = config.row_separator.as_str();
    if row_separator.is_empty() {
        return vec![parse_row_with_config(text, config)];
    }

    let body = text.strip_suffix(row_separator).unwrap_or(text);
    body.split(row_separator)
        .map(|line| parse_row_with_config(line, config))
        .collect()
}
