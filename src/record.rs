//! Header-plus-rows tables built from record types.
//!
//! The codec does not inspect types. A record type describes itself through
//! [`CsvRecord`]: its column names and its values in the same order. [`IndexMap`]
//! implements it out of the box, keeping insertion order as column order.
//!
//! ## Examples
//!
//! ```rust
//! use csv_codec::{serialize_records_with_config, CsvConfig, CsvRecord, CsvValue};
//!
//! struct Category {
//!     id: i32,
//!     name: String,
//!     picture: Option<String>,
//! }
//!
//! impl CsvRecord for Category {
//!     fn field_names(&self) -> Vec<String> {
//!         vec!["Id".into(), "CategoryName".into(), "Picture".into()]
//!     }
//!
//!     fn field_values(&self) -> Vec<CsvValue> {
//!         vec![self.id.into(), self.name.clone().into(), self.picture.clone().into()]
//!     }
//! }
//!
//! let config = CsvConfig::new().with_row_separator("\n");
//! let categories = [Category { id: 1, name: "Dairy, Eggs".into(), picture: None }];
//! assert_eq!(
//!     serialize_records_with_config(&categories, &config),
//!     "Id,CategoryName,Picture\n1,\"Dairy, Eggs\",\n"
//! );
//! ```

use crate::de::parse_table_with_config;
use crate::ser::write_row;
use crate::{CsvConfig, CsvValue, Error, Result};
use indexmap::IndexMap;

/// A record that can be written as one CSV row under a header.
///
/// `field_values` must yield values in the same order as `field_names`.
pub trait CsvRecord {
    fn field_names(&self) -> Vec<String>;

    fn field_values(&self) -> Vec<CsvValue>;
}

impl<R: CsvRecord + ?Sized> CsvRecord for &R {
    fn field_names(&self) -> Vec<String> {
        (**self).field_names()
    }

    fn field_values(&self) -> Vec<CsvValue> {
        (**self).field_values()
    }
}

impl<V> CsvRecord for IndexMap<String, V>
where
    V: Clone + Into<CsvValue>,
{
    fn field_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn field_values(&self) -> Vec<CsvValue> {
        self.values().cloned().map(Into::into).collect()
    }
}

/// Serializes records as a header row (taken from the first record) followed by one
/// row per record. No records serialize to an empty string.
#[must_use]
pub fn serialize_records_with_config<I>(records: I, config: &CsvConfig) -> String
where
    I: IntoIterator,
    I::Item: CsvRecord,
{
    let mut records = records.into_iter().peekable();
    let mut output = String::with_capacity(256);
    let Some(first) = records.peek() else {
        return output;
    };

    write_row(&mut output, first.field_names(), config);
    for record in records {
        write_row(&mut output, record.field_values(), config);
    }
    output
}

/// Parses a table whose first row is the header into one map per data row, keyed by
/// column name in header order.
///
/// Duplicate column names keep the last value.
///
/// # Errors
///
/// Returns [`Error::RowLength`] for the first data row whose field count differs
/// from the header's. Rows are numbered from zero, the header being row 0.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{parse_records_with_config, CsvConfig};
///
/// let config = CsvConfig::new().with_row_separator("\n");
/// let records = parse_records_with_config("Id,Name\n1,\"Smith, J\"\n", &config).unwrap();
/// assert_eq!(records[0]["Name"], "Smith, J");
///
/// assert!(parse_records_with_config("Id,Name\n1\n", &config).is_err());
/// ```
pub fn parse_records_with_config(
    text: &str,
    config: &CsvConfig,
) -> Result<Vec<IndexMap<String, String>>> {
    let mut rows = parse_table_with_config(text, config).into_iter();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };

    rows.enumerate()
        .map(|(index, row)| {
            if row.len() != header.len() {
                return Err(Error::row_length(index + 1, header.len(), row.len()));
            }
            Ok(header.iter().cloned().zip(row).collect())
        })
        .collect()
}
