//! # csv_codec
//!
//! A CSV field and row codec with configurable separators and quote delimiters.
//!
//! ## What does it do?
//!
//! It turns scalar values and rows of them into CSV text, and parses CSV text back
//! into field values, under four settings: the item separator, the item delimiter
//! (the "quote", which may be any string such as `|` or `~^~`), the row separator
//! and an optional date/time format.
//!
//! ## Key Features
//!
//! - **Minimal quoting**: fields are wrapped only when they contain the separator or
//!   the delimiter
//! - **Custom delimiters**: any single- or multi-character delimiter, wrapped verbatim;
//!   the conventional `"` is escaped by doubling
//! - **Lossless fields**: decoding a field returns exactly the value that was encoded
//! - **Typed fields**: numbers, booleans, big integers and chrono date/times, with
//!   `None` rendered as an empty field
//! - **Never fails**: encoding and decoding are total; malformed input is returned
//!   as-is
//!
//! ## Quick Start
//!
//! ```rust
//! use csv_codec::{parse_row_with_config, serialize_row_with_config, CsvConfig};
//!
//! let config = CsvConfig::new().with_row_separator("\r\n");
//!
//! let row = serialize_row_with_config(["1", "between \"quotes\" here", "with, comma"], &config);
//! assert_eq!(row, "1,\"between \"\"quotes\"\" here\",\"with, comma\"\r\n");
//!
//! let fields = parse_row_with_config(row.trim_end_matches("\r\n"), &config);
//! assert_eq!(fields, vec!["1", "between \"quotes\" here", "with, comma"]);
//! ```
//!
//! ### Custom Delimiters
//!
//! ```rust
//! use csv_codec::{to_csv_field_with_config, CsvConfig};
//!
//! let config = CsvConfig::new().with_item_delimiter("~^~");
//! assert_eq!(
//!     to_csv_field_with_config("with, comma", &config).as_deref(),
//!     Some("~^~with, comma~^~")
//! );
//! ```
//!
//! ### Process-wide Configuration
//!
//! The functions without a `_with_config` suffix read the process-wide settings in
//! [`config`]. Changes stay in effect for every later call until reset, so prefer
//! passing a [`CsvConfig`] explicitly wherever settings differ between callers.
//!
//! ```rust
//! use csv_codec::{config, to_csv_field};
//!
//! config::set_item_delimiter("|");
//! assert_eq!(to_csv_field("7,7.1").as_deref(), Some("|7,7.1|"));
//! config::reset();
//! assert_eq!(to_csv_field("7,7.1").as_deref(), Some("\"7,7.1\""));
//! ```
//!
//! ## Format Specification
//!
//! See the [`format`] module for the exact quoting rules and known limitations.

pub mod config;
pub mod de;
pub mod error;
pub mod field;
pub mod format;
pub mod macros;
pub mod record;
pub mod ser;
pub mod value;

pub use config::CsvConfig;
pub use de::{from_csv_field_with_config, parse_row_with_config, parse_table_with_config};
pub use error::{Error, Result};
pub use record::{parse_records_with_config, serialize_records_with_config, CsvRecord};
pub use ser::{
    serialize_row_with_config, serialize_table_with_config, to_csv_field_with_config, ToCsvField,
};
pub use value::{to_value, CsvValue};

use indexmap::IndexMap;

/// Encodes a scalar as a CSV field using the process-wide configuration.
///
/// Returns `None` for absent values, which rows render as an empty field.
///
/// # Examples
///
/// ```rust
/// use csv_codec::to_csv_field;
///
/// assert_eq!(to_csv_field("3\"").as_deref(), Some("\"3\"\"\""));
/// assert_eq!(to_csv_field(&None::<&str>), None);
/// ```
#[must_use]
pub fn to_csv_field<T>(value: &T) -> Option<String>
where
    T: ?Sized + ToCsvField,
{
    to_csv_field_with_config(value, &config::current())
}

/// Decodes a single CSV field using the process-wide configuration.
///
/// # Examples
///
/// ```rust
/// use csv_codec::from_csv_field;
///
/// assert_eq!(from_csv_field("\"5\"\"five,six\"\"\""), "5\"five,six\"");
/// ```
#[must_use]
pub fn from_csv_field(text: &str) -> String {
    from_csv_field_with_config(text, &config::current())
}

/// Serializes one row using the process-wide configuration.
#[must_use]
pub fn serialize_row<I>(fields: I) -> String
where
    I: IntoIterator,
    I::Item: ToCsvField,
{
    serialize_row_with_config(fields, &config::current())
}

/// Serializes rows using the process-wide configuration.
#[must_use]
pub fn serialize_table<R, I>(rows: R) -> String
where
    R: IntoIterator<Item = I>,
    I: IntoIterator,
    I::Item: ToCsvField,
{
    serialize_table_with_config(rows, &config::current())
}

/// Parses one row (without its row separator) using the process-wide configuration.
#[must_use]
pub fn parse_row(line: &str) -> Vec<String> {
    parse_row_with_config(line, &config::current())
}

/// Parses a table using the process-wide configuration.
#[must_use]
pub fn parse_table(text: &str) -> Vec<Vec<String>> {
    parse_table_with_config(text, &config::current())
}

/// Serializes records under a header row using the process-wide configuration.
#[must_use]
pub fn serialize_records<I>(records: I) -> String
where
    I: IntoIterator,
    I::Item: CsvRecord,
{
    serialize_records_with_config(records, &config::current())
}

/// Parses a headed table into one map per row using the process-wide configuration.
///
/// # Errors
///
/// Returns [`Error::RowLength`] if a row's width differs from the header's.
pub fn parse_records(text: &str) -> Result<Vec<IndexMap<String, String>>> {
    parse_records_with_config(text, &config::current())
}
