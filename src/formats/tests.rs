use super::*;

const SHIMADZU_EXPORT: &str = "\"sa281-02 - RawData\"\n\"Wavelength nm.\"\t\"Abs.\"\n300,00\t0,322\n301,00\t0,310\n";

#[test]
fn test_parse_table_normalizes_decimal_commas() {
    let (axis_values, data_values) = parse_table(SHIMADZU_EXPORT, 2).unwrap();
    assert_eq!(axis_values, vec![300.0, 301.0]);
    assert_eq!(data_values, vec![0.322, 0.310]);
}

#[test]
fn test_parse_table_skips_blank_lines() {
    let text = "header\nheader\n300,00\t0,322\n\n301,00\t0,310\n\n\n";
    let (axis_values, data_values) = parse_table(text, 2).unwrap();
    assert_eq!(axis_values.len(), 2);
    assert_eq!(data_values.len(), 2);
}

#[test]
fn test_parse_table_accepts_space_delimited_columns() {
    let (axis_values, data_values) = parse_table("300,00   0,322\n301,00 0,310\n", 0).unwrap();
    assert_eq!(axis_values, vec![300.0, 301.0]);
    assert_eq!(data_values, vec![0.322, 0.310]);
}

#[test]
fn test_parse_table_rejects_extra_column() {
    let error = parse_table("300,00\t0,322\t17\n", 0).unwrap_err();
    match error {
        TableError::ColumnCount { found, line } => {
            assert_eq!(found, 3);
            assert_eq!(line, "300,00\t0,322\t17");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_table_rejects_non_numeric_field() {
    let error = parse_table("300,00\tsaturated\n", 0).unwrap_err();
    match error {
        TableError::NonNumeric { token, line } => {
            assert_eq!(token, "saturated");
            assert_eq!(line, "300,00\tsaturated");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_table_with_excess_skip_yields_empty_series() {
    let (axis_values, data_values) = parse_table("only one line\n", 5).unwrap();
    assert!(axis_values.is_empty());
    assert!(data_values.is_empty());
}

#[test]
fn test_source_format_recognizes_shimadzu_extension() {
    assert_eq!(
        SourceFormat::from_source("sa281-02-280K.txt"),
        SourceFormat::ShimadzuAscii
    );
    assert_eq!(SourceFormat::from_source("x.dat"), SourceFormat::Generic);
    assert_eq!(SourceFormat::from_source("x.TXT"), SourceFormat::Generic);
    assert_eq!(SourceFormat::from_source("no-extension"), SourceFormat::Generic);
}
