//! # Metadata Module for UV-Vis Measurements
//!
//! This module defines the typed schema describing one UV-visible absorption
//! measurement and handles folding sidecar metadata documents into it.
//!
//! ## Design Goals
//!
//! Reproducible spectroscopy depends on recording the full provenance of a
//! measurement alongside its numeric data: sample and preparation, optical
//! cell, spectrometer, temperature control, experiment type, operator and
//! labbook reference. The schema here is the unified structure every part of
//! the crate reads that information from.
//!
//! The schema is always fully populated: fields absent from a sidecar file
//! keep empty-string or unset defaults rather than disappearing, so callers
//! never have to probe for missing keys.
//!
//! ## Schema Versions
//!
//! Sidecar documents carry a `format.version` tag. Documents written against
//! older layouts are migrated field by field via [`map_document`] before
//! they are folded into [`MeasurementMetadata`]; see the rules in
//! [`DEFAULT_RULES`].

mod cell;
mod error;
mod experiment;
mod mapper;
mod measurement;
mod quantity;
mod sample;
mod spectrometer;
mod temperature;
mod version;

#[cfg(test)]
mod tests;

pub use cell::Cell;
pub use error::MetadataError;
pub use experiment::Experiment;
pub use mapper::{map_document, map_document_with, RemappingRule, DEFAULT_RULES};
pub use measurement::{parse_start_stamp, Measurement};
pub use quantity::PhysicalQuantity;
pub use sample::Sample;
pub use spectrometer::Spectrometer;
pub use temperature::TemperatureControl;
pub use version::{SchemaVersion, CURRENT_SCHEMA_VERSION};

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Complete metadata record for one UV-Vis measurement.
///
/// Every sub-record is present with blank defaults even when a sidecar file
/// carries no corresponding section. Folding a document via
/// [`MeasurementMetadata::from_document`] keeps defaults for absent fields
/// and silently ignores keys unknown to the schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementMetadata {
    /// Metadata corresponding to the sample measured
    pub sample: Sample,

    /// Metadata corresponding to the temperature control
    pub temperature_control: TemperatureControl,

    /// Metadata corresponding to the optical cell used
    pub cell: Cell,

    /// Metadata corresponding to the actual experiment
    pub experiment: Experiment,

    /// Metadata corresponding to the spectrometer used
    pub spectrometer: Spectrometer,

    /// Bookkeeping metadata: operator, labbook reference, start stamp
    pub measurement: Measurement,
}

impl MeasurementMetadata {
    /// Create a new metadata record with blank defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a sidecar metadata document into the typed schema.
    ///
    /// The document is expected to already be version-mapped (see
    /// [`map_document`]). Fields absent from the document keep their
    /// defaults; keys unknown to the schema are ignored.
    pub fn from_document(document: Value) -> Result<Self, MetadataError> {
        Ok(serde_yaml::from_value(document)?)
    }

    /// Serialize to JSON, e.g. for embedding in downstream reports
    pub fn to_json(&self) -> Result<String, MetadataError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(json)?)
    }
}
