//! Formatting settings for the CSV codec.
//!
//! This module provides:
//!
//! - [`CsvConfig`]: an immutable value holding the item separator, item delimiter,
//!   row separator and optional date/time format
//! - a process-wide current configuration read by the crate's convenience entry
//!   points ([`to_csv_field`](crate::to_csv_field), [`serialize_row`](crate::serialize_row), ...)
//!
//! Every entry point also has a `*_with_config` twin taking `&CsvConfig`. Those never
//! touch the process-wide state and are safe to use from concurrent requests with
//! different settings.
//!
//! ## Examples
//!
//! ```rust
//! use csv_codec::{config, serialize_row_with_config, CsvConfig};
//!
//! let pipes = CsvConfig::new().with_item_separator("|").with_row_separator("\n");
//! assert_eq!(serialize_row_with_config(["a", "b,c"], &pipes), "a|b,c\n");
//!
//! // Process-wide settings stay in effect until changed or reset
//! config::set_item_delimiter("~^~");
//! assert_eq!(config::item_delimiter(), "~^~");
//! config::reset();
//! assert_eq!(config::item_delimiter(), "\"");
//! ```

use crate::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};

/// Default string placed between fields.
pub const DEFAULT_ITEM_SEPARATOR: &str = ",";

/// Default string wrapped around fields that need escaping.
pub const DEFAULT_ITEM_DELIMITER: &str = "\"";

/// Default string placed after each row: the platform line ending.
pub const DEFAULT_ROW_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Formatting settings for encoding and decoding CSV.
///
/// Settings given as empty strings fall back to their built-in defaults, so a
/// `CsvConfig` built through the `with_*` methods never carries an empty separator
/// or delimiter.
///
/// # Examples
///
/// ```rust
/// use csv_codec::CsvConfig;
///
/// let config = CsvConfig::new()
///     .with_item_separator("|")
///     .with_item_delimiter("~^~")
///     .with_date_time_format("%Y-%m-%d");
///
/// assert_eq!(config.item_separator, "|");
/// assert!(!config.uses_default_delimiter());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    pub item_separator: String,
    pub item_delimiter: String,
    pub row_separator: String,
    pub date_time_format: Option<String>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        CsvConfig {
            item_separator: DEFAULT_ITEM_SEPARATOR.to_string(),
            item_delimiter: DEFAULT_ITEM_DELIMITER.to_string(),
            row_separator: DEFAULT_ROW_SEPARATOR.to_string(),
            date_time_format: None,
        }
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Returns `true` if chrono can apply `format` without hitting an unknown specifier.
pub(crate) fn is_valid_date_time_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

impl CsvConfig {
    /// Creates the default configuration: `,` separator, `"` delimiter, platform
    /// line ending, no date/time format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_codec::CsvConfig;
    ///
    /// let config = CsvConfig::new();
    /// assert_eq!(config.item_separator, ",");
    /// assert_eq!(config.item_delimiter, "\"");
    /// assert!(config.date_time_format.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the string placed between fields.
    #[must_use]
    pub fn with_item_separator(mut self, separator: impl Into<String>) -> Self {
        self.item_separator = or_default(separator.into(), DEFAULT_ITEM_SEPARATOR);
        self
    }

    /// Sets the string wrapped around fields that need escaping.
    ///
    /// Only the default `"` doubles embedded occurrences; any other delimiter is
    /// wrapped around the field verbatim.
    #[must_use]
    pub fn with_item_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.item_delimiter = or_default(delimiter.into(), DEFAULT_ITEM_DELIMITER);
        self
    }

    /// Sets the string placed after each row.
    #[must_use]
    pub fn with_row_separator(mut self, separator: impl Into<String>) -> Self {
        self.row_separator = or_default(separator.into(), DEFAULT_ROW_SEPARATOR);
        self
    }

    /// Sets the strftime-style format applied to date/time fields.
    ///
    /// An empty format clears it, leaving date/time values in their natural form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_codec::CsvConfig;
    ///
    /// let config = CsvConfig::new().with_date_time_format("%d/%m/%Y");
    /// assert_eq!(config.date_time_format.as_deref(), Some("%d/%m/%Y"));
    ///
    /// let config = config.with_date_time_format("");
    /// assert!(config.date_time_format.is_none());
    /// ```
    #[must_use]
    pub fn with_date_time_format(mut self, format: impl Into<String>) -> Self {
        self.date_time_format = non_empty(format.into());
        self
    }

    /// Returns `true` when the delimiter is the conventional single `"`, the only
    /// delimiter whose embedded occurrences are escaped by doubling.
    #[inline]
    #[must_use]
    pub fn uses_default_delimiter(&self) -> bool {
        self.item_delimiter == DEFAULT_ITEM_DELIMITER
    }

    /// Checks the preconditions under which parsing is unambiguous.
    ///
    /// The codec never calls this itself; callers that want strict settings opt in.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySetting`] if a separator or the delimiter is empty
    /// - [`Error::AmbiguousDelimiter`] if the delimiter and item separator contain
    ///   one another
    /// - [`Error::AmbiguousRowSeparator`] if the row and item separators contain
    ///   one another
    /// - [`Error::InvalidDateTimeFormat`] if the date/time format has an unknown
    ///   specifier
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_codec::CsvConfig;
    ///
    /// assert!(CsvConfig::new().validate().is_ok());
    /// assert!(CsvConfig::new().with_item_delimiter("|,|").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.item_separator.is_empty() {
            return Err(Error::empty_setting("item_separator"));
        }
        if self.item_delimiter.is_empty() {
            return Err(Error::empty_setting("item_delimiter"));
        }
        if self.row_separator.is_empty() {
            return Err(Error::empty_setting("row_separator"));
        }
        if self.item_delimiter.contains(self.item_separator.as_str())
            || self.item_separator.contains(self.item_delimiter.as_str())
        {
            return Err(Error::ambiguous_delimiter(
                &self.item_delimiter,
                &self.item_separator,
            ));
        }
        if self.row_separator.contains(self.item_separator.as_str())
            || self.item_separator.contains(self.row_separator.as_str())
        {
            return Err(Error::ambiguous_row_separator(
                &self.row_separator,
                &self.item_separator,
            ));
        }
        if let Some(format) = &self.date_time_format {
            if !is_valid_date_time_format(format) {
                return Err(Error::invalid_date_time_format(format));
            }
        }
        Ok(())
    }
}

// `None` means "built-in defaults"; lets the static be const-initialized.
static GLOBAL: RwLock<Option<CsvConfig>> = RwLock::new(None);

fn with_global<R>(f: impl FnOnce(&CsvConfig) -> R) -> R {
    let guard = GLOBAL.read().unwrap_or_else(PoisonError::into_inner);
    match guard.as_ref() {
        Some(config) => f(config),
        None => f(&CsvConfig::default()),
    }
}

/// Returns a snapshot of the process-wide configuration.
#[must_use]
pub fn current() -> CsvConfig {
    with_global(CsvConfig::clone)
}

/// Replaces the process-wide configuration.
///
/// The change is visible to every later call of the global entry points until it
/// is changed again or [`reset`].
pub fn set(config: CsvConfig) {
    debug!("Setting process-wide CSV configuration: {:?}", config);
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = Some(config);
}

/// Applies `f` to the process-wide configuration in place.
///
/// # Examples
///
/// ```rust
/// use csv_codec::config;
///
/// config::update(|c| c.row_separator = "\r\n".to_string());
/// assert_eq!(config::row_separator(), "\r\n");
/// config::reset();
/// ```
pub fn update(f: impl FnOnce(&mut CsvConfig)) {
    let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    let config = guard.get_or_insert_with(CsvConfig::default);
    f(&mut *config);
    debug!("Updated process-wide CSV configuration: {:?}", config);
}

/// Restores all four process-wide settings to their built-in defaults.
pub fn reset() {
    debug!("Resetting process-wide CSV configuration to defaults");
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Returns the process-wide item separator.
#[must_use]
pub fn item_separator() -> String {
    with_global(|c| c.item_separator.clone())
}

/// Sets the process-wide item separator; empty restores the default.
pub fn set_item_separator(separator: impl Into<String>) {
    let separator = or_default(separator.into(), DEFAULT_ITEM_SEPARATOR);
    update(|c| c.item_separator = separator);
}

/// Restores the default process-wide item separator.
pub fn reset_item_separator() {
    update(|c| c.item_separator = DEFAULT_ITEM_SEPARATOR.to_string());
}

/// Returns the process-wide item delimiter.
#[must_use]
pub fn item_delimiter() -> String {
    with_global(|c| c.item_delimiter.clone())
}

/// Sets the process-wide item delimiter; empty restores the default.
pub fn set_item_delimiter(delimiter: impl Into<String>) {
    let delimiter = or_default(delimiter.into(), DEFAULT_ITEM_DELIMITER);
    update(|c| c.item_delimiter = delimiter);
}

/// Restores the default process-wide item delimiter.
pub fn reset_item_delimiter() {
    update(|c| c.item_delimiter = DEFAULT_ITEM_DELIMITER.to_string());
}

/// Returns the process-wide row separator.
#[must_use]
pub fn row_separator() -> String {
    with_global(|c| c.row_separator.clone())
}

/// Sets the process-wide row separator; empty restores the default.
pub fn set_row_separator(separator: impl Into<String>) {
    let separator = or_default(separator.into(), DEFAULT_ROW_SEPARATOR);
    update(|c| c.row_separator = separator);
}

/// Restores the platform default process-wide row separator.
pub fn reset_row_separator() {
    update(|c| c.row_separator = DEFAULT_ROW_SEPARATOR.to_string());
}

/// Returns the process-wide date/time format, if any.
#[must_use]
pub fn date_time_format() -> Option<String> {
    with_global(|c| c.date_time_format.clone())
}

/// Sets the process-wide date/time format; empty clears it.
pub fn set_date_time_format(format: impl Into<String>) {
    let format = non_empty(format.into());
    update(|c| c.date_time_format = format);
}

/// Clears the process-wide date/time format.
pub fn reset_date_time_format() {
    update(|c| c.date_time_format = None);
}
