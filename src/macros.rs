/// Builds a `Vec<CsvValue>` row from literals, with `null` for absent fields.
///
/// Each element must be a single token tree; wrap longer expressions in
/// parentheses, e.g. `csv_row![(-1), (name.clone()), null]`.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{csv_row, CsvValue};
///
/// let row = csv_row![1, "Beverages", null];
/// assert_eq!(row[2], CsvValue::Null);
/// ```
#[macro_export]
macro_rules! csv_row {
    // Handle null
    (@field null) => {
        $crate::CsvValue::Null
    };

    (@field $value:expr) => {
        $crate::CsvValue::from($value)
    };

    // Handle empty row
    () => {
        ::std::vec::Vec::<$crate::CsvValue>::new()
    };

    ($($field:tt),+ $(,)?) => {
        ::std::vec![$($crate::csv_row!(@field $field)),+]
    };
}
