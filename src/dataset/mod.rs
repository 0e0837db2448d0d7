//! # Dataset Module
//!
//! The [`Dataset`] is the unit of currency of this crate: numeric data,
//! axis descriptors, the typed [`MeasurementMetadata`] record, and free-text
//! annotations, bundled so that no piece of a measurement travels alone.
//!
//! Importers (see [`crate::import`]) are the sole writers during an import;
//! afterwards the dataset is handed to the caller wholesale.
//!
//! ## Axes
//!
//! A one-dimensional measurement carries two axis descriptors: axis 0
//! describes the independent variable and owns its values (e.g. wavelengths
//! in nm), axis 1 describes the measured quantity itself. The values of
//! axis 1 are the data and are not duplicated in the descriptor.

mod error;

#[cfg(test)]
mod tests;

pub use error::DatasetError;

use serde::{Deserialize, Serialize};

use crate::metadata::MeasurementMetadata;

/// One dimension of a dataset: values plus semantic labeling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// Axis values, one per data point (empty for the data axis)
    pub values: Vec<f64>,

    /// Semantic name of the quantity, e.g. "wavelength"
    pub quantity: String,

    /// Unit string, empty for dimensionless quantities
    pub unit: String,
}

impl Axis {
    /// Create an unlabeled axis carrying the given values
    pub fn with_values(values: Vec<f64>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }
}

/// Numeric payload of a dataset: data points plus two axis descriptors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataArray {
    /// Measured values, aligned one-to-one with axis 0
    pub data: Vec<f64>,

    /// Axis descriptors; axis 0 holds the independent variable values
    pub axes: [Axis; 2],
}

impl DataArray {
    /// Create a data array from aligned axis values and data points.
    ///
    /// The two sequences must have equal length; axis values are expected to
    /// be monotonic but this is not enforced.
    pub fn new(axis_values: Vec<f64>, data: Vec<f64>) -> Result<Self, DatasetError> {
        if axis_values.len() != data.len() {
            return Err(DatasetError::LengthMismatch {
                axis: axis_values.len(),
                data: data.len(),
            });
        }
        Ok(Self {
            data,
            axes: [Axis::with_values(axis_values), Axis::default()],
        })
    }

    /// Number of data points
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no data points
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Free-text provenance note attached to a dataset.
///
/// Comments are lifted from the `comment` field of sidecar metadata files
/// and never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    text: String,
}

impl Comment {
    /// Create a comment from its text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The comment text
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One imported measurement: numeric data, metadata, and annotations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Path or identifier the dataset was imported from
    pub source: String,

    /// Numeric data and axis descriptors
    pub data: DataArray,

    /// Typed measurement metadata, blank defaults when no sidecar was found
    pub metadata: MeasurementMetadata,

    annotations: Vec<Comment>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a provenance annotation.
    ///
    /// Annotations are append-only; existing ones are never replaced.
    pub fn annotate(&mut self, comment: Comment) {
        self.annotations.push(comment);
    }

    /// Annotations attached so far, in attachment order
    pub fn annotations(&self) -> &[Comment] {
        &self.annotations
    }
}
