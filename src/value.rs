//! Dynamic scalar values for heterogeneous CSV rows.
//!
//! This module provides the [`CsvValue`] enum. A row mixing ids, text, timestamps
//! and missing values can be held as a `Vec<CsvValue>` and handed to
//! [`serialize_row`](crate::serialize_row).
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use csv_codec::{csv_row, CsvValue};
//!
//! let id = CsvValue::from(1);
//! let name = CsvValue::from("Beverages");
//! let missing = CsvValue::from(None::<i32>);
//! assert!(missing.is_null());
//!
//! // Using the csv_row! macro
//! let row = csv_row![1, "Beverages", null];
//! assert_eq!(row, vec![id, name, CsvValue::Null]);
//! ```
//!
//! ### Converting from Serde Types
//!
//! ```rust
//! use csv_codec::{to_value, CsvValue};
//!
//! assert_eq!(to_value(&Some(3u8)).unwrap(), CsvValue::Integer(3));
//! assert!(to_value(&vec![1, 2]).is_err());
//! ```

use crate::ser::ValueSerializer;
use crate::Result;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use num_bigint::BigInt;
use serde::Serialize;
use std::fmt;

/// A dynamically-typed CSV scalar.
///
/// `Null` is the absent value: it serializes to an empty, unquoted span. Date/time
/// variants are always delimiter-wrapped when encoded and honour the configured
/// date/time format.
///
/// # Examples
///
/// ```rust
/// use csv_codec::CsvValue;
///
/// let text = CsvValue::String("hello".to_string());
/// assert!(text.is_string());
/// assert_eq!(text.as_str(), Some("hello"));
/// assert_eq!(CsvValue::from(42).as_i64(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum CsvValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    BigInt(BigInt),
    String(String),
    DateTime(DateTime<FixedOffset>),
    NaiveDateTime(NaiveDateTime),
}

impl CsvValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, CsvValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, CsvValue::Bool(_))
    }

    /// Returns `true` if the value is an integer, float or big integer.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(
            self,
            CsvValue::Integer(_) | CsvValue::Float(_) | CsvValue::BigInt(_)
        )
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, CsvValue::String(_))
    }

    /// Returns `true` if the value is a zoned or naive date/time.
    #[inline]
    #[must_use]
    pub const fn is_date_time(&self) -> bool {
        matches!(self, CsvValue::DateTime(_) | CsvValue::NaiveDateTime(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CsvValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CsvValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_codec::CsvValue;
    ///
    /// assert_eq!(CsvValue::from("hello").as_str(), Some("hello"));
    /// assert_eq!(CsvValue::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CsvValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Natural string form, as written when no date/time format applies. `Null` is empty.
impl fmt::Display for CsvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvValue::Null => Ok(()),
            CsvValue::Bool(b) => write!(f, "{}", b),
            CsvValue::Integer(i) => write!(f, "{}", i),
            CsvValue::Float(fl) => write!(f, "{}", fl),
            CsvValue::BigInt(bi) => write!(f, "{}", bi),
            CsvValue::String(s) => f.write_str(s),
            CsvValue::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
            CsvValue::NaiveDateTime(dt) => write!(f, "{}", dt),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CsvValue {
                fn from(value: $ty) -> Self {
                    CsvValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for CsvValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => CsvValue::Integer(i),
            Err(_) => CsvValue::BigInt(BigInt::from(value)),
        }
    }
}

impl From<bool> for CsvValue {
    fn from(value: bool) -> Self {
        CsvValue::Bool(value)
    }
}

impl From<f32> for CsvValue {
    fn from(value: f32) -> Self {
        CsvValue::Float(f64::from(value))
    }
}

impl From<f64> for CsvValue {
    fn from(value: f64) -> Self {
        CsvValue::Float(value)
    }
}

impl From<char> for CsvValue {
    fn from(value: char) -> Self {
        CsvValue::String(value.to_string())
    }
}

impl From<&str> for CsvValue {
    fn from(value: &str) -> Self {
        CsvValue::String(value.to_string())
    }
}

impl From<String> for CsvValue {
    fn from(value: String) -> Self {
        CsvValue::String(value)
    }
}

impl From<BigInt> for CsvValue {
    fn from(value: BigInt) -> Self {
        CsvValue::BigInt(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CsvValue {
    fn from(value: DateTime<Tz>) -> Self {
        CsvValue::DateTime(value.fixed_offset())
    }
}

impl From<NaiveDateTime> for CsvValue {
    fn from(value: NaiveDateTime) -> Self {
        CsvValue::NaiveDateTime(value)
    }
}

impl From<NaiveDate> for CsvValue {
    fn from(value: NaiveDate) -> Self {
        CsvValue::NaiveDateTime(value.and_time(NaiveTime::default()))
    }
}

impl<T: Into<CsvValue>> From<Option<T>> for CsvValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CsvValue::Null, Into::into)
    }
}

/// Converts any serde scalar into a [`CsvValue`].
///
/// `None` and `()` become [`CsvValue::Null`]; newtype wrappers are unwrapped and unit
/// enum variants become their variant name.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`](crate::Error::UnsupportedType) for sequences,
/// maps, structs, byte arrays and non-unit enum variants.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{to_value, CsvValue};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// enum Status { Active }
///
/// assert_eq!(to_value(&Status::Active).unwrap(), CsvValue::from("Active"));
/// assert_eq!(to_value(&None::<String>).unwrap(), CsvValue::Null);
/// ```
pub fn to_value<T>(value: &T) -> Result<CsvValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}
