use super::*;

use chrono::NaiveDate;
use serde_yaml::Value;

fn yaml(text: &str) -> Value {
    serde_yaml::from_str(text).unwrap()
}

fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = document;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

// -------------------------------------------------------------------------
// Version mapper
// -------------------------------------------------------------------------

const LEGACY_DOCUMENT: &str = r#"
format:
  version: 0.1.3
general:
  operator: John Doe
  labbook: loi:42.1001/lb/tb/uvvis/yyyy-mm-dd_id
"#;

#[test]
fn test_current_version_document_passes_through_unchanged() {
    let document = yaml(
        r#"
format:
  version: 0.1.4
experiment:
  type: spectrum
measurement:
  operator: John Doe
"#,
    );
    let before = serde_yaml::to_string(&document).unwrap();
    let mapped = map_document(document);
    let after = serde_yaml::to_string(&mapped).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_legacy_fields_relocated() {
    let mapped = map_document(yaml(LEGACY_DOCUMENT));

    assert_eq!(
        lookup(&mapped, "measurement.operator").and_then(Value::as_str),
        Some("John Doe")
    );
    assert_eq!(
        lookup(&mapped, "measurement.labbook_entry").and_then(Value::as_str),
        Some("loi:42.1001/lb/tb/uvvis/yyyy-mm-dd_id")
    );
    assert!(lookup(&mapped, "general").is_none());
}

#[test]
fn test_mapping_is_idempotent() {
    let once = map_document(yaml(LEGACY_DOCUMENT));
    let twice = map_document(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_labbook_rename_applies_at_current_version() {
    let mapped = map_document(yaml(
        r#"
format:
  version: 0.1.4
measurement:
  labbook: loi:42.1001/lb/tb/uvvis/yyyy-mm-dd_id
"#,
    ));
    assert_eq!(
        lookup(&mapped, "measurement.labbook_entry").and_then(Value::as_str),
        Some("loi:42.1001/lb/tb/uvvis/yyyy-mm-dd_id")
    );
    assert!(lookup(&mapped, "measurement.labbook").is_none());
}

#[test]
fn test_populated_new_path_wins_over_stale_old_field() {
    let mapped = map_document(yaml(
        r#"
format:
  version: 0.1.3
general:
  operator: Old Name
measurement:
  operator: New Name
"#,
    ));
    assert_eq!(
        lookup(&mapped, "measurement.operator").and_then(Value::as_str),
        Some("New Name")
    );
    assert!(lookup(&mapped, "general").is_none());
}

#[test]
fn test_unknown_version_is_a_no_op() {
    let document = yaml(
        r#"
format:
  version: not-a-version
general:
  operator: John Doe
"#,
    );
    let mapped = map_document(document.clone());
    assert_eq!(document, mapped);
}

#[test]
fn test_missing_version_is_a_no_op() {
    let document = yaml("general:\n  operator: John Doe\n");
    let mapped = map_document(document.clone());
    assert_eq!(document, mapped);
}

#[test]
fn test_non_mapping_document_passes_through() {
    let document = Value::String("not a mapping".to_string());
    assert_eq!(map_document(document.clone()), document);
}

#[test]
fn test_partially_emptied_parent_survives() {
    let mapped = map_document(yaml(
        r#"
format:
  version: 0.1.3
general:
  operator: John Doe
  room: "0.13"
"#,
    ));
    assert_eq!(
        lookup(&mapped, "general.room").and_then(Value::as_str),
        Some("0.13")
    );
    assert!(lookup(&mapped, "general.operator").is_none());
}

#[test]
fn test_blocked_target_path_leaves_old_field_in_place() {
    let mapped = map_document(yaml(
        r#"
format:
  version: 0.1.3
general:
  operator: John Doe
measurement: not a mapping
"#,
    ));
    assert_eq!(
        lookup(&mapped, "general.operator").and_then(Value::as_str),
        Some("John Doe")
    );
    assert_eq!(
        lookup(&mapped, "measurement").and_then(Value::as_str),
        Some("not a mapping")
    );
}

#[test]
fn test_custom_rule_table() {
    const RULES: &[RemappingRule] = &[RemappingRule::always("old", "nested.new")];
    let mapped = map_document_with(yaml("format:\n  version: 9.9.9\nold: 42\n"), RULES);
    assert_eq!(
        lookup(&mapped, "nested.new").and_then(Value::as_i64),
        Some(42)
    );
    assert!(lookup(&mapped, "old").is_none());
}

// -------------------------------------------------------------------------
// Physical quantities
// -------------------------------------------------------------------------

#[test]
fn test_quantity_string_roundtrip() {
    let quantity: PhysicalQuantity = "1 cm".parse().unwrap();
    assert_eq!(quantity.value, Some(1.0));
    assert_eq!(quantity.unit, "cm");
    assert_eq!(quantity.to_string(), "1 cm");
}

#[test]
fn test_empty_quantity_is_default() {
    let quantity: PhysicalQuantity = "".parse().unwrap();
    assert_eq!(quantity, PhysicalQuantity::default());
    assert!(quantity.is_empty());
    assert_eq!(quantity.to_string(), "");
}

#[test]
fn test_quantity_without_unit() {
    let quantity: PhysicalQuantity = "5".parse().unwrap();
    assert_eq!(quantity.value, Some(5.0));
    assert_eq!(quantity.unit, "");
    assert_eq!(quantity.to_string(), "5");
}

#[test]
fn test_quantity_with_multi_token_unit() {
    let quantity: PhysicalQuantity = "3.5 mAU / s".parse().unwrap();
    assert_eq!(quantity.value, Some(3.5));
    assert_eq!(quantity.unit, "mAU / s");
}

#[test]
fn test_malformed_quantity_is_an_error() {
    let result = "cm".parse::<PhysicalQuantity>();
    assert!(matches!(result, Err(MetadataError::Quantity(_))));
}

#[test]
fn test_quantity_deserializes_from_mapping_form() {
    let quantity: PhysicalQuantity = serde_yaml::from_str("value: 1.0\nunit: cm\n").unwrap();
    assert_eq!(quantity, PhysicalQuantity::new(1.0, "cm"));
}

#[test]
fn test_quantity_deserializes_from_bare_number() {
    let quantity: PhysicalQuantity = serde_yaml::from_str("280.0").unwrap();
    assert_eq!(quantity.value, Some(280.0));
    assert_eq!(quantity.unit, "");
}

// -------------------------------------------------------------------------
// Schema versions
// -------------------------------------------------------------------------

#[test]
fn test_version_parse_and_display() {
    let version: SchemaVersion = "0.1.4".parse().unwrap();
    assert_eq!(version, SchemaVersion::new(0, 1, 4));
    assert_eq!(version.to_string(), "0.1.4");
    assert_eq!(version, CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_version_ordering() {
    let old: SchemaVersion = "0.1.3".parse().unwrap();
    assert!(old < CURRENT_SCHEMA_VERSION);
    assert!(SchemaVersion::new(0, 2, 0) > SchemaVersion::new(0, 1, 9));
    assert!(SchemaVersion::new(1, 0, 0) > SchemaVersion::new(0, 9, 9));
}

#[test]
fn test_malformed_versions_are_errors() {
    for input in ["", "0.1", "0.1.4.2", "v0.1.4", "0.1.x"] {
        assert!(
            matches!(input.parse::<SchemaVersion>(), Err(MetadataError::Version(_))),
            "{input:?} should not parse"
        );
    }
}

// -------------------------------------------------------------------------
// Document fold
// -------------------------------------------------------------------------

#[test]
fn test_fold_populates_typed_fields() {
    let metadata = MeasurementMetadata::from_document(yaml(
        r#"
format:
  version: 0.1.4
experiment:
  type: spectrum
  measurement_mode: absorption
sample:
  name: sa281-02
  solvent: toluene
  concentration: 0.1 mM
cell:
  pathlength: 1 cm
"#,
    ))
    .unwrap();

    assert_eq!(metadata.experiment.kind, "spectrum");
    assert_eq!(metadata.experiment.measurement_mode, "absorption");
    assert_eq!(metadata.sample.solvent, "toluene");
    assert_eq!(metadata.sample.concentration, PhysicalQuantity::new(0.1, "mM"));
    assert_eq!(metadata.cell.pathlength, PhysicalQuantity::new(1.0, "cm"));
    // Sections absent from the document keep their defaults.
    assert_eq!(metadata.spectrometer, Spectrometer::default());
    assert_eq!(metadata.measurement.operator, "");
}

#[test]
fn test_fold_ignores_unknown_keys() {
    let metadata = MeasurementMetadata::from_document(yaml(
        "format:\n  version: 0.1.4\ncomment: a free-text note\nunknown_section:\n  field: 1\n",
    ))
    .unwrap();
    assert_eq!(metadata, MeasurementMetadata::default());
}

#[test]
fn test_fold_reads_start_stamp() {
    let metadata = MeasurementMetadata::from_document(yaml(
        r#"
measurement:
  operator: John Doe
  start:
    date: "2018-05-13"
    time: "11:05:00"
"#,
    ))
    .unwrap();
    let expected = NaiveDate::from_ymd_opt(2018, 5, 13)
        .unwrap()
        .and_hms_opt(11, 5, 0)
        .unwrap();
    assert_eq!(metadata.measurement.start, Some(expected));
}

#[test]
fn test_blank_start_stamp_stays_unset() {
    let metadata = MeasurementMetadata::from_document(yaml(
        "measurement:\n  start:\n    date: \"2018-05-13\"\n    time: \"\"\n",
    ))
    .unwrap();
    assert_eq!(metadata.measurement.start, None);
}

#[test]
fn test_malformed_start_stamp_is_an_error() {
    let result = MeasurementMetadata::from_document(yaml(
        "measurement:\n  start:\n    date: \"13.05.2018\"\n    time: \"11:05:00\"\n",
    ));
    assert!(matches!(result, Err(MetadataError::Document(_))));
}

#[test]
fn test_parse_start_stamp_reports_offending_component() {
    let error = parse_start_stamp("2018-05-13", "25:99:00").unwrap_err();
    match error {
        MetadataError::Timestamp { stamp, .. } => assert_eq!(stamp, "25:99:00"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_metadata_json_roundtrip() {
    let mut metadata = MeasurementMetadata::new();
    metadata.sample.name = "sa281-02".to_string();
    metadata.sample.concentration = PhysicalQuantity::new(0.1, "mM");
    metadata.measurement.operator = "John Doe".to_string();
    metadata.measurement.start = NaiveDate::from_ymd_opt(2018, 5, 13)
        .unwrap()
        .and_hms_opt(11, 5, 0);

    let json = metadata.to_json().unwrap();
    let restored = MeasurementMetadata::from_json(&json).unwrap();

    assert_eq!(restored, metadata);
}
