//! CSV serialization.
//!
//! This module provides the [`ToCsvField`] trait, which turns any scalar into an
//! escaped CSV field, and the row and table writers built on it.
//!
//! ## Overview
//!
//! - **Fields**: strings and numbers go through [`field::encode`]; date/time values
//!   are formatted with the configured format and always delimiter-wrapped
//! - **Nulls**: `None` and [`CsvValue::Null`] produce no field text, so they render
//!   as an empty, unquoted span between separators
//! - **Rows**: fields joined with the item separator, followed by the row separator
//! - **Tables**: rows concatenated in order
//!
//! ## Usage
//!
//! ```rust
//! use csv_codec::{serialize_table_with_config, CsvConfig, ToCsvField};
//!
//! let config = CsvConfig::new().with_row_separator("\r\n");
//! assert_eq!("a,b".to_csv_field(&config).as_deref(), Some("\"a,b\""));
//! assert_eq!(None::<&str>.to_csv_field(&config), None);
//!
//! let rows = vec![vec!["Id", "Name"], vec!["1", "Smith, J"]];
//! assert_eq!(
//!     serialize_table_with_config(&rows, &config),
//!     "Id,Name\r\n1,\"Smith, J\"\r\n"
//! );
//! ```

use crate::config::is_valid_date_time_format;
use crate::{field, CsvConfig, CsvValue, Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use log::warn;
use num_bigint::BigInt;
use serde::ser::{self, Impossible, Serialize};
use std::fmt::{self, Write};

/// Conversion of a scalar into a CSV field.
///
/// Returns `None` for absent values (the null marker). Row serialization renders it
/// as an empty span with no delimiter wrapping.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{CsvConfig, ToCsvField};
///
/// let pipe = CsvConfig::new().with_item_delimiter("|");
/// assert_eq!("7,7.1".to_csv_field(&pipe).as_deref(), Some("|7,7.1|"));
/// assert_eq!(42i32.to_csv_field(&pipe).as_deref(), Some("42"));
/// ```
pub trait ToCsvField {
    fn to_csv_field(&self, config: &CsvConfig) -> Option<String>;
}

impl ToCsvField for str {
    fn to_csv_field(&self, config: &CsvConfig) -> Option<String> {
        Some(field::encode(self, config).into_owned())
    }
}

impl ToCsvField for String {
    fn to_csv_field(&self, config: &CsvConfig) -> Option<String> {
        self.as_str().to_csv_field(config)
    }
}

macro_rules! impl_to_csv_field_display {
    ($($ty:ty),*) => {
        $(
            impl ToCsvField for $ty {
                fn to_csv_field(&self, config: &CsvConfig) -> Option<String> {
                    self.to_string().as_str().to_csv_field(config)
                }
            }
        )*
    };
}

impl_to_csv_field_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, BigInt
);

impl<Tz> ToCsvField for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn to_csv_field(&self, config: &CsvConfig) -> Option<String> {
        let text = configured_format(config)
            .and_then(|format| render(self.format(format)))
            .unwrap_or_else(|| self.to_rfc3339());
        Some(field::encode_wrapped(&text, config))
    }
}

impl ToCsvField for NaiveDateTime {
    fn to_csv_field(&self, config: &CsvConfig) -> Option<String> {
        let text = configured_format(config)
            .and_then(|format| render(self.format(format)))
            .unwrap_or_else(|| self.to_string());
        Some(field::encode_wrapped(&text, config))
    }
}

impl ToCsvField for NaiveDate {
    fn to_csv_field(&self, config: &CsvConfig) -> Option<String> {
        let text = configured_format(config)
            .and_then(|format| render(self.format(format)))
            .unwrap_or_else(|| self.to_string());
        Some(field::encode_wrapped(&text, config))
    }
}

impl ToCsvField for CsvValue {
    fn to_csv_field(&self, config: &CsvConfig) -> Option<String> {
        match self {
            CsvValue::Null => None,
            CsvValue::String(s) => s.to_csv_field(config),
            CsvValue::DateTime(dt) => dt.to_csv_field(config),
            CsvValue::NaiveDateTime(dt) => dt.to_csv_field(config),
            other => other.to_string().to_csv_field(config),
        }
    }
}

impl<T: ToCsvField> ToCsvField for Option<T> {
    fn to_csv_field(&self, config: &CsvConfig) -> Option<String> {
        self.as_ref().and_then(|value| value.to_csv_field(config))
    }
}

impl<T: ToCsvField + ?Sized> ToCsvField for &T {
    #[inline]
    fn to_csv_field(&self, config: &CsvConfig) -> Option<String> {
        (**self).to_csv_field(config)
    }
}

/// The configured date/time format, if one is set and chrono can apply it.
fn configured_format(config: &CsvConfig) -> Option<&str> {
    let format = config.date_time_format.as_deref().filter(|f| !f.is_empty())?;
    if is_valid_date_time_format(format) {
        Some(format)
    } else {
        warn!(
            "Ignoring unparseable date/time format {:?}, writing the natural form",
            format
        );
        None
    }
}

// chrono reports specifiers the value cannot satisfy (e.g. `%z` on a naive
// timestamp) as a formatting error rather than at parse time.
fn render(formatted: impl fmt::Display) -> Option<String> {
    let mut output = String::new();
    write!(output, "{}", formatted).ok().map(|()| output)
}

/// Encodes a scalar as a CSV field using `config`. `None` is the null marker.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{to_csv_field_with_config, CsvConfig};
///
/// let config = CsvConfig::new();
/// assert_eq!(to_csv_field_with_config("3\"", &config).as_deref(), Some("\"3\"\"\""));
/// assert_eq!(to_csv_field_with_config(&None::<i32>, &config), None);
/// ```
#[must_use]
pub fn to_csv_field_with_config<T>(value: &T, config: &CsvConfig) -> Option<String>
where
    T: ?Sized + ToCsvField,
{
    value.to_csv_field(config)
}

/// Serializes one row: encoded fields joined by the item separator, then the row
/// separator.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{csv_row, serialize_row_with_config, CsvConfig};
///
/// let config = CsvConfig::new().with_row_separator("\n");
/// assert_eq!(
///     serialize_row_with_config(csv_row![1, "with, comma", null], &config),
///     "1,\"with, comma\",\n"
/// );
/// ```
#[must_use]
pub fn serialize_row_with_config<I>(fields: I, config: &CsvConfig) -> String
where
    I: IntoIterator,
    I::Item: ToCsvField,
{
    let mut output = String::with_capacity(64);
    write_row(&mut output, fields, config);
    output
}

/// Serializes rows in order. Each row carries its own trailing row separator.
#[must_use]
pub fn serialize_table_with_config<R, I>(rows: R, config: &CsvConfig) -> String
where
    R: IntoIterator<Item = I>,
    I: IntoIterator,
    I::Item: ToCsvField,
{
    let mut output = String::with_capacity(256);
    for row in rows {
        write_row(&mut output, row, config);
    }
    output
}

pub(crate) fn write_row<I>(output: &mut String, fields: I, config: &CsvConfig)
where
    I: IntoIterator,
    I::Item: ToCsvField,
{
    for (index, value) in fields.into_iter().enumerate() {
        if index > 0 {
            output.push_str(&config.item_separator);
        }
        if let Some(encoded) = value.to_csv_field(config) {
            output.push_str(&encoded);
        }
    }
    output.push_str(&config.row_separator);
}

/// Serde serializer producing a single [`CsvValue`] from a scalar.
///
/// Used by [`to_value`](crate::to_value). Anything with inner structure is rejected
/// because a CSV field has none.
pub struct ValueSerializer;

fn unsupported<T>(kind: &str) -> Result<T> {
    Err(Error::unsupported_type(&format!(
        "{} cannot be written as a single CSV field",
        kind
    )))
}

impl ser::Serializer for ValueSerializer {
    type Ok = CsvValue;
    type Error = Error;

    type SerializeSeq = Impossible<CsvValue, Error>;
    type SerializeTuple = Impossible<CsvValue, Error>;
    type SerializeTupleStruct = Impossible<CsvValue, Error>;
    type SerializeTupleVariant = Impossible<CsvValue, Error>;
    type SerializeMap = Impossible<CsvValue, Error>;
    type SerializeStruct = Impossible<CsvValue, Error>;
    type SerializeStructVariant = Impossible<CsvValue, Error>;

    fn serialize_bool(self, v: bool) -> Result<CsvValue> {
        Ok(CsvValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<CsvValue> {
        Ok(CsvValue::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<CsvValue> {
        Ok(CsvValue::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<CsvValue> {
        Ok(CsvValue::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<CsvValue> {
        Ok(CsvValue::Integer(v))
    }

    fn serialize_i128(self, v: i128) -> Result<CsvValue> {
        Ok(match i64::try_from(v) {
            Ok(i) => CsvValue::Integer(i),
            Err(_) => CsvValue::BigInt(BigInt::from(v)),
        })
    }

    fn serialize_u8(self, v: u8) -> Result<CsvValue> {
        Ok(CsvValue::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<CsvValue> {
        Ok(CsvValue::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<CsvValue> {
        Ok(CsvValue::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<CsvValue> {
        Ok(CsvValue::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<CsvValue> {
        Ok(match i64::try_from(v) {
            Ok(i) => CsvValue::Integer(i),
            Err(_) => CsvValue::BigInt(BigInt::from(v)),
        })
    }

    fn serialize_f32(self, v: f32) -> Result<CsvValue> {
        Ok(CsvValue::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<CsvValue> {
        Ok(CsvValue::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<CsvValue> {
        Ok(CsvValue::from(v))
    }

    fn serialize_str(self, v: &str) -> Result<CsvValue> {
        Ok(CsvValue::from(v))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<CsvValue> {
        unsupported("byte array")
    }

    fn serialize_none(self) -> Result<CsvValue> {
        Ok(CsvValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<CsvValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<CsvValue> {
        Ok(CsvValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<CsvValue> {
        Ok(CsvValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<CsvValue> {
        Ok(CsvValue::from(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<CsvValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<CsvValue>
    where
        T: ?Sized + Serialize,
    {
        unsupported(&format!("newtype variant {}", variant))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        unsupported("sequence")
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        unsupported("tuple")
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        unsupported(&format!("tuple struct {}", name))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        unsupported(&format!("tuple variant {}", variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        unsupported("map")
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        unsupported(&format!("struct {}", name))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        unsupported(&format!("struct variant {}", variant))
    }
}
