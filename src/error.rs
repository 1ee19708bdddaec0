//! Error types for CSV configuration checks, value conversion and record parsing.
//!
//! The field and row codecs themselves never fail: encoding always succeeds and
//! decoding falls back to returning its input unchanged. Errors come from the
//! opt-in checks layered on top:
//!
//! - **Configuration**: [`CsvConfig::validate`](crate::CsvConfig::validate) reports
//!   empty settings, ambiguous separator/delimiter pairs and bad date/time formats
//! - **Conversion**: [`to_value`](crate::to_value) rejects non-scalar types
//! - **Records**: [`parse_records`](crate::parse_records) rejects rows whose width
//!   differs from the header
//!
//! ## Examples
//!
//! ```rust
//! use csv_codec::{CsvConfig, Error};
//!
//! let config = CsvConfig::new().with_item_delimiter(",,");
//! match config.validate() {
//!     Err(Error::AmbiguousDelimiter { .. }) => {}
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the checked parts of the codec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A configuration setting was empty where a value is required
    #[error("Invalid configuration: {setting} must not be empty")]
    EmptySetting { setting: &'static str },

    /// The item delimiter and item separator overlap, so splits are ambiguous
    #[error("Ambiguous configuration: item delimiter {delimiter:?} overlaps item separator {separator:?}")]
    AmbiguousDelimiter {
        delimiter: String,
        separator: String,
    },

    /// The row separator and item separator overlap
    #[error("Ambiguous configuration: row separator {row_separator:?} overlaps item separator {separator:?}")]
    AmbiguousRowSeparator {
        row_separator: String,
        separator: String,
    },

    /// The configured date/time format contains an unknown specifier
    #[error("Invalid date/time format: {0:?}")]
    InvalidDateTimeFormat(String),

    /// A parsed row does not have as many fields as the header
    #[error("Row {row} has {found} fields, expected {expected} to match the header")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Unsupported type for conversion into a CSV scalar
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an error for a setting that must not be empty.
    pub fn empty_setting(setting: &'static str) -> Self {
        Error::EmptySetting { setting }
    }

    /// Creates an error for a delimiter that overlaps the item separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_codec::Error;
    ///
    /// let err = Error::ambiguous_delimiter(",", ",");
    /// assert!(err.to_string().contains("overlaps"));
    /// ```
    pub fn ambiguous_delimiter(delimiter: &str, separator: &str) -> Self {
        Error::AmbiguousDelimiter {
            delimiter: delimiter.to_string(),
            separator: separator.to_string(),
        }
    }

    /// Creates an error for a row separator that overlaps the item separator.
    pub fn ambiguous_row_separator(row_separator: &str, separator: &str) -> Self {
        Error::AmbiguousRowSeparator {
            row_separator: row_separator.to_string(),
            separator: separator.to_string(),
        }
    }

    /// Creates an error for a date/time format chrono cannot apply.
    pub fn invalid_date_time_format(format: &str) -> Self {
        Error::InvalidDateTimeFormat(format.to_string())
    }

    /// Creates a row width mismatch error. `row` is zero-based and counts the header.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_codec::Error;
    ///
    /// let err = Error::row_length(2, 3, 4);
    /// assert_eq!(err.to_string(), "Row 2 has 4 fields, expected 3 to match the header");
    /// ```
    pub fn row_length(row: usize, expected: usize, found: usize) -> Self {
        Error::RowLength {
            row,
            expected,
            found,
        }
    }

    /// Creates an unsupported type error for values that are not CSV scalars.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
