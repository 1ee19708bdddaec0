//! CSV Text Format
//!
//! This module documents the text format produced and accepted by this library.
//!
//! # Settings
//!
//! | Setting | Default | Role |
//! |---------|---------|------|
//! | Item separator | `,` | Placed between fields in a row |
//! | Item delimiter | `"` | Wrapped around fields that need escaping; any non-empty string |
//! | Row separator | `\r\n` on Windows, `\n` elsewhere | Placed after every row, including the last |
//! | Date/time format | none | strftime format applied to date/time fields |
//!
//! # Fields
//!
//! A field is written verbatim unless it contains the item separator or the item
//! delimiter. A multi-character separator also forces wrapping when the field ends
//! with the start of the separator or begins with its end (`a:` under `::`), since
//! the separator would otherwise match across the field boundary. In these cases the
//! field is wrapped:
//!
//! | Value | Default (`,` `"`) | Separator `\|` | Delimiter `\|` | Delimiter `~^~` |
//! |-------|-------------------|----------------|----------------|-----------------|
//! | `1` | `1` | `1` | `1` | `1` |
//! | `3"` | `"3"""` | `"3"""` | `3"` | `3"` |
//! | `7,7.1` | `"7,7.1"` | `7,7.1` | `\|7,7.1\|` | `~^~7,7.1~^~` |
//! | `"7,7.1"` | `"""7,7.1"""` | `"""7,7.1"""` | `\|"7,7.1"\|` | `~^~"7,7.1"~^~` |
//!
//! **Escaping**: only the default `"` delimiter doubles its embedded occurrences.
//! Every other delimiter, single- or multi-character, is wrapped around the content
//! verbatim. This asymmetry is part of the format.
//!
//! **Unescaping**: text that starts and ends with the delimiter, and is at least
//! twice the delimiter's length, loses one delimiter from each end; under `"` each
//! `""` then collapses to `"`. Anything else is taken literally, including a lone
//! delimiter.
//!
//! # Typed Fields
//!
//! | Value | Field text |
//! |-------|------------|
//! | Absent (`None`, null) | nothing, never wrapped |
//! | Empty string | nothing, never wrapped |
//! | Integer, float, bool | natural form (`42`, `9.99`, `true`), wrapped only if it needs escaping |
//! | Zoned date/time | configured format, else RFC 3339; always wrapped |
//! | Naive date/time | configured format, else `2024-01-15 10:30:00`; always wrapped |
//!
//! A date/time format chrono cannot apply is ignored in favour of the natural form.
//!
//! # Rows and Tables
//!
//! ```text
//! Id,CategoryName,Description,Picture
//! 1,"between ""quotes"" here","with, comma",
//! 1,"between ""quotes"" here","with, comma",
//! ```
//!
//! The same rows with delimiter `|`:
//!
//! ```text
//! Id,CategoryName,Description,Picture
//! 1,between "quotes" here,|with, comma|,
//! 1,between "quotes" here,|with, comma|,
//! ```
//!
//! When parsing, a field that opens with the delimiter extends to its closing
//! delimiter. Under `"` that is the first undoubled `"`. Under any other delimiter
//! it is the first delimiter followed by the separator or the end of the line.
//!
//! # Limitations
//!
//! - **Row separators in values** are not escaped and split the row when parsed
//! - **Overlapping settings**: a delimiter containing the separator (or the reverse)
//!   makes splits ambiguous; [`CsvConfig::validate`](crate::CsvConfig::validate)
//!   reports it
//! - **Custom delimiters** cannot represent a value holding the delimiter directly
//!   followed by the separator; parsing closes the field there
//! - **Null and empty** both produce an empty field and parse back as `""`

// This module contains only documentation; no implementation code
