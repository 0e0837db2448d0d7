//! # uvvis - Structured Import of UV-Visible Absorption Data
//!
//! `uvvis` imports UV-visible absorption spectroscopy measurements into a
//! structured in-memory dataset: numeric data, semantically labeled axes,
//! a typed metadata record, and provenance annotations.
//!
//! ## Key Features
//!
//! - **Typed Measurement Metadata**: Sample, optical cell, spectrometer,
//!   temperature control, experiment type, and measurement bookkeeping in
//!   one always-fully-populated record.
//!
//! - **Schema-Version Migration**: Sidecar metadata files written against
//!   older field layouts are migrated rule by rule into the current schema
//!   before they touch the typed record.
//!
//! - **Locale-Aware Parsing**: Vendor ASCII exports with comma decimal
//!   separators parse correctly regardless of the locale the instrument
//!   software ran under.
//!
//! - **Format Dispatch**: A factory picks the right importer from the
//!   source filename, with a metadata-only generic fallback for
//!   unrecognized formats.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use uvvis::import::importer_for;
//!
//! let importer = importer_for("sa281-02-280K.txt")?;
//! let dataset = importer.import()?;
//!
//! println!(
//!     "{} ({} points), operator: {}",
//!     dataset.source,
//!     dataset.data.len(),
//!     dataset.metadata.measurement.operator,
//! );
//! assert_eq!(dataset.data.axes[0].quantity, "wavelength");
//! assert_eq!(dataset.data.axes[0].unit, "nm");
//! # Ok::<(), uvvis::import::ImportError>(())
//! ```
//!
//! ## Sidecar Metadata
//!
//! A data file `sa281-02-280K.txt` may be accompanied by
//! `sa281-02-280K.yaml` describing the measurement:
//!
//! ```yaml
//! format:
//!   version: 0.1.4
//! experiment:
//!   type: spectrum
//! sample:
//!   name: sa281-02
//!   solvent: toluene
//!   concentration: 0.1 mM
//! measurement:
//!   operator: John Doe
//!   start:
//!     date: "2018-05-13"
//!     time: "11:05:00"
//! comment: shoulder at 340 nm worth a second look
//! ```
//!
//! The sidecar is optional; without one the dataset keeps blank default
//! metadata. Documents written against older schema versions (e.g. with
//! operator and labbook under a `general` section) are migrated
//! transparently; see [`metadata::map_document`].
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`dataset`]: dataset, axis descriptors, and annotations
//! - [`metadata`]: typed measurement metadata and schema-version migration
//! - [`formats`]: format-specific parsers and the Shimadzu ASCII importer
//! - [`import`]: the [`Importer`](import::Importer) trait and factory
//! - [`processing`]: UV-Vis parameter defaults for processing steps

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod dataset;
pub mod formats;
pub mod import;
pub mod metadata;
pub mod processing;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::dataset::{Axis, Comment, DataArray, Dataset, DatasetError};
    pub use crate::formats::{parse_table, ShimadzuAsciiImporter, SourceFormat, TableError};
    pub use crate::import::{importer_for, GenericImporter, ImportError, Importer};
    pub use crate::metadata::{
        map_document, Cell, Experiment, Measurement, MeasurementMetadata, MetadataError,
        PhysicalQuantity, Sample, SchemaVersion, Spectrometer, TemperatureControl,
        CURRENT_SCHEMA_VERSION,
    };
    pub use crate::processing::{BaselineCorrection, BaselineKind};
}
