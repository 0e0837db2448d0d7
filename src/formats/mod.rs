//! Format-specific parsers and importers.
//!
//! This module contains the pieces tied to concrete on-disk file formats:
//!
//! - [`table`] - locale-aware numeric table parser shared by ASCII formats
//! - [`shimadzu`] - Shimadzu UVProbe ASCII export importer
//!
//! Dispatch from a source path to the right importer happens in
//! [`crate::import::importer_for`]; [`SourceFormat`] names the outcome.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

/// Locale-aware numeric table parser.
pub mod table;

/// Shimadzu UVProbe ASCII export importer.
pub mod shimadzu;

#[cfg(test)]
mod tests;

pub use shimadzu::ShimadzuAsciiImporter;
pub use table::{parse_table, TableError};

/// File format recognized from a source path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Shimadzu UVProbe ASCII export (`.txt`)
    ShimadzuAscii,
    /// Unrecognized source; imported with sidecar metadata only
    Generic,
}

impl SourceFormat {
    /// Recognize the format of `source` from its extension.
    ///
    /// Only the exact lowercase `txt` extension selects the Shimadzu ASCII
    /// format; everything else, including sources without an extension,
    /// falls back to [`SourceFormat::Generic`].
    pub fn from_source<P: AsRef<Path>>(source: P) -> Self {
        match source.as_ref().extension().and_then(OsStr::to_str) {
            Some("txt") => Self::ShimadzuAscii,
            _ => Self::Generic,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShimadzuAscii => write!(f, "Shimadzu UVProbe ASCII"),
            Self::Generic => write!(f, "generic"),
        }
    }
}
