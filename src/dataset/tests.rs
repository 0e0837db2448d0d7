use super::*;

#[test]
fn test_data_array_construction() {
    let array = DataArray::new(vec![300.0, 301.0], vec![0.322, 0.310]).unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array.axes[0].values, vec![300.0, 301.0]);
    assert_eq!(array.data, vec![0.322, 0.310]);
    assert!(array.axes[1].values.is_empty());
}

#[test]
fn test_data_array_rejects_unequal_lengths() {
    let result = DataArray::new(vec![300.0, 301.0, 302.0], vec![0.322, 0.310]);
    assert!(matches!(
        result,
        Err(DatasetError::LengthMismatch { axis: 3, data: 2 })
    ));
}

#[test]
fn test_empty_dataset_defaults() {
    let dataset = Dataset::new();
    assert_eq!(dataset.source, "");
    assert!(dataset.data.is_empty());
    assert!(dataset.annotations().is_empty());
    assert_eq!(dataset.metadata, crate::metadata::MeasurementMetadata::default());
}

#[test]
fn test_annotations_are_append_only() {
    let mut dataset = Dataset::new();
    dataset.annotate(Comment::new("measured at 280 K"));
    dataset.annotate(Comment::new("lamp freshly calibrated"));

    let annotations = dataset.annotations();
    assert_eq!(annotations.len(), 2);
    assert_eq!(annotations[0].text(), "measured at 280 K");
    assert_eq!(annotations[1].text(), "lamp freshly calibrated");
}
