use chrono::{DateTime, FixedOffset, Local, TimeZone};
use csv_codec::{
    from_csv_field_with_config, parse_records_with_config, parse_row_with_config,
    parse_table_with_config, serialize_records_with_config, serialize_row_with_config,
    serialize_table_with_config, to_csv_field_with_config, CsvConfig, CsvRecord, CsvValue,
};

const INVALID_CHARS: [&str; 8] = ["1", "2", "3\"", "4", "5\"five,six\"", "7,7.1", "\"7,7.1\"", "8"];

#[derive(Clone, Debug)]
struct Category {
    id: i32,
    category_name: String,
    description: String,
    picture: Option<String>,
}

impl Category {
    fn new(id: i32, category_name: &str, description: &str) -> Self {
        Category {
            id,
            category_name: category_name.to_string(),
            description: description.to_string(),
            picture: None,
        }
    }
}

impl CsvRecord for Category {
    fn field_names(&self) -> Vec<String> {
        ["Id", "CategoryName", "Description", "Picture"]
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn field_values(&self) -> Vec<CsvValue> {
        vec![
            self.id.into(),
            self.category_name.clone().into(),
            self.description.clone().into(),
            self.picture.clone().into(),
        ]
    }
}

fn categories() -> Vec<Category> {
    let category = Category::new(1, "between \"quotes\" here", "with, comma");
    vec![category.clone(), category]
}

fn crlf() -> CsvConfig {
    CsvConfig::new().with_row_separator("\r\n")
}

#[test]
fn test_categories_default() {
    let csv = serialize_records_with_config(&categories(), &crlf());
    assert_eq!(
        csv,
        "Id,CategoryName,Description,Picture\r\n\
         1,\"between \"\"quotes\"\" here\",\"with, comma\",\r\n\
         1,\"between \"\"quotes\"\" here\",\"with, comma\",\r\n"
    );
}

#[test]
fn test_categories_pipe_separator() {
    let csv = serialize_records_with_config(&categories(), &crlf().with_item_separator("|"));
    assert_eq!(
        csv,
        "Id|CategoryName|Description|Picture\r\n\
         1|\"between \"\"quotes\"\" here\"|with, comma|\r\n\
         1|\"between \"\"quotes\"\" here\"|with, comma|\r\n"
    );
}

#[test]
fn test_categories_pipe_delimiter() {
    let csv = serialize_records_with_config(&categories(), &crlf().with_item_delimiter("|"));
    assert_eq!(
        csv,
        "Id,CategoryName,Description,Picture\r\n\
         1,between \"quotes\" here,|with, comma|,\r\n\
         1,between \"quotes\" here,|with, comma|,\r\n"
    );
}

#[test]
fn test_categories_long_delimiter() {
    let csv = serialize_records_with_config(&categories(), &crlf().with_item_delimiter("~^~"));
    assert_eq!(
        csv,
        "Id,CategoryName,Description,Picture\r\n\
         1,between \"quotes\" here,~^~with, comma~^~,\r\n\
         1,between \"quotes\" here,~^~with, comma~^~,\r\n"
    );
}

#[test]
fn test_categories_pipe_row_separator() {
    let csv = serialize_records_with_config(&categories(), &CsvConfig::new().with_row_separator("|"));
    assert_eq!(
        csv,
        "Id,CategoryName,Description,Picture|\
         1,\"between \"\"quotes\"\" here\",\"with, comma\",|\
         1,\"between \"\"quotes\"\" here\",\"with, comma\",|"
    );
}

#[test]
fn test_categories_parse_back() {
    for config in [
        crlf(),
        crlf().with_item_separator("|"),
        crlf().with_item_delimiter("|"),
        crlf().with_item_delimiter("~^~"),
    ] {
        let csv = serialize_records_with_config(&categories(), &config);
        let records = parse_records_with_config(&csv, &config).unwrap();
        assert_eq!(records.len(), 2, "{:?}", config);
        for record in &records {
            assert_eq!(record["Id"], "1");
            assert_eq!(record["CategoryName"], "between \"quotes\" here");
            assert_eq!(record["Description"], "with, comma");
            assert_eq!(record["Picture"], "");
        }
    }
}

#[test]
fn test_invalid_chars_default() {
    assert_eq!(
        serialize_row_with_config(INVALID_CHARS, &crlf()),
        "1,2,\"3\"\"\",4,\"5\"\"five,six\"\"\",\"7,7.1\",\"\"\"7,7.1\"\"\",8\r\n"
    );
}

#[test]
fn test_invalid_chars_pipe_delimiter() {
    assert_eq!(
        serialize_row_with_config(INVALID_CHARS, &crlf().with_item_delimiter("|")),
        "1,2,3\",4,|5\"five,six\"|,|7,7.1|,|\"7,7.1\"|,8\r\n"
    );
}

#[test]
fn test_invalid_chars_pipe_separator() {
    assert_eq!(
        serialize_row_with_config(INVALID_CHARS, &crlf().with_item_separator("|")),
        "1|2|\"3\"\"\"|4|\"5\"\"five,six\"\"\"|7,7.1|\"\"\"7,7.1\"\"\"|8\r\n"
    );
}

#[test]
fn test_invalid_chars_round_trip() {
    for config in [
        crlf(),
        crlf().with_item_separator("|"),
        crlf().with_item_delimiter("|"),
        crlf().with_item_delimiter("~^~"),
    ] {
        let csv = serialize_row_with_config(INVALID_CHARS, &config);
        let line = csv.strip_suffix("\r\n").unwrap();
        assert_eq!(parse_row_with_config(line, &config), INVALID_CHARS, "{:?}", config);
    }
}

#[test]
fn test_to_csv_field_default() {
    let config = CsvConfig::new();
    let field = |value: &str| to_csv_field_with_config(value, &config).unwrap();
    assert_eq!(field("1"), "1");
    assert_eq!(field("3\""), "\"3\"\"\"");
    assert_eq!(field("5\"five,six\""), "\"5\"\"five,six\"\"\"");
    assert_eq!(field("7,7.1"), "\"7,7.1\"");
    assert_eq!(field("\"7,7.1\""), "\"\"\"7,7.1\"\"\"");
}

#[test]
fn test_to_csv_field_pipe_separator() {
    let config = CsvConfig::new().with_item_separator("|");
    let field = |value: &str| to_csv_field_with_config(value, &config).unwrap();
    assert_eq!(field("1"), "1");
    assert_eq!(field("3\""), "\"3\"\"\"");
    assert_eq!(field("5\"five,six\""), "\"5\"\"five,six\"\"\"");
    assert_eq!(field("7,7.1"), "7,7.1");
    assert_eq!(field("\"7,7.1\""), "\"\"\"7,7.1\"\"\"");
}

#[test]
fn test_to_csv_field_pipe_delimiter() {
    let config = CsvConfig::new().with_item_delimiter("|");
    let field = |value: &str| to_csv_field_with_config(value, &config).unwrap();
    assert_eq!(field("1"), "1");
    assert_eq!(field("3\""), "3\"");
    assert_eq!(field("5\"five,six\""), "|5\"five,six\"|");
    assert_eq!(field("7,7.1"), "|7,7.1|");
    assert_eq!(field("\"7,7.1\""), "|\"7,7.1\"|");
}

#[test]
fn test_from_csv_field_default() {
    let config = CsvConfig::new();
    assert_eq!(from_csv_field_with_config("1", &config), "1");
    assert_eq!(from_csv_field_with_config("\"3\"\"\"", &config), "3\"");
    assert_eq!(from_csv_field_with_config("\"5\"\"five,six\"\"\"", &config), "5\"five,six\"");
    assert_eq!(from_csv_field_with_config("\"7,7.1\"", &config), "7,7.1");
    assert_eq!(from_csv_field_with_config("\"\"\"7,7.1\"\"\"", &config), "\"7,7.1\"");
}

#[test]
fn test_from_csv_field_pipe_delimiter() {
    let config = CsvConfig::new().with_item_delimiter("|");
    assert_eq!(from_csv_field_with_config("1", &config), "1");
    assert_eq!(from_csv_field_with_config("3\"", &config), "3\"");
    assert_eq!(from_csv_field_with_config("|5\"five,six\"|", &config), "5\"five,six\"");
    assert_eq!(from_csv_field_with_config("|7,7.1|", &config), "7,7.1");
    assert_eq!(from_csv_field_with_config("|\"7,7.1\"|", &config), "\"7,7.1\"");
}

#[test]
fn test_date_time_respects_configured_format() {
    let now = Local::now();
    for format in ["%Y-%m-%dT%H:%M:%S%.3f %z", "%m/%d/%Y", "%d/%m/%Y", "%H:%M:%S", "arbitrary string"] {
        let config = CsvConfig::new().with_date_time_format(format);
        assert_eq!(
            to_csv_field_with_config(&now, &config),
            Some(format!("\"{}\"", now.format(format)))
        );
    }
}

#[test]
fn test_optional_date_time_respects_configured_format() {
    let now: Option<DateTime<Local>> = Some(Local::now());
    let config = CsvConfig::new().with_date_time_format("%d/%m/%Y");
    assert_eq!(
        to_csv_field_with_config(&now, &config),
        now.map(|dt| format!("\"{}\"", dt.format("%d/%m/%Y")))
    );

    let missing: Option<DateTime<Local>> = None;
    assert_eq!(to_csv_field_with_config(&missing, &config), None);
}

#[test]
fn test_date_time_without_format() {
    let dt = FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2023, 11, 2, 8, 0, 0)
        .unwrap();
    assert_eq!(
        to_csv_field_with_config(&dt, &CsvConfig::new()).as_deref(),
        Some("\"2023-11-02T08:00:00-05:00\"")
    );
}

#[test]
fn test_date_time_field_containing_delimiter() {
    let dt = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2023, 11, 2, 8, 0, 0)
        .unwrap();
    let config = CsvConfig::new().with_date_time_format("%H\"%M");
    let encoded = to_csv_field_with_config(&dt, &config).unwrap();
    assert_eq!(encoded, "\"08\"\"00\"");
    assert_eq!(from_csv_field_with_config(&encoded, &config), "08\"00");
}

#[test]
fn test_table_round_trip_with_mixed_values() {
    let config = CsvConfig::new().with_row_separator("\n");
    let rows = vec![
        vec![CsvValue::from("name"), CsvValue::from("qty"), CsvValue::from("note")],
        vec![CsvValue::from("Widget"), CsvValue::from(2), CsvValue::Null],
        vec![CsvValue::from("Gadget, \"XL\""), CsvValue::from(1.5), CsvValue::from("")],
    ];
    let csv = serialize_table_with_config(&rows, &config);
    assert_eq!(
        csv,
        "name,qty,note\nWidget,2,\n\"Gadget, \"\"XL\"\"\",1.5,\n"
    );
    assert_eq!(
        parse_table_with_config(&csv, &config),
        vec![
            vec!["name", "qty", "note"],
            vec!["Widget", "2", ""],
            vec!["Gadget, \"XL\"", "1.5", ""],
        ]
    );
}

#[test]
fn test_explicit_configs_are_independent() {
    let default = CsvConfig::new();
    let tilde = CsvConfig::new().with_item_delimiter("~^~");
    assert_eq!(to_csv_field_with_config("a,b", &tilde).as_deref(), Some("~^~a,b~^~"));
    assert_eq!(to_csv_field_with_config("a,b", &default).as_deref(), Some("\"a,b\""));
}
