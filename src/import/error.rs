use std::path::PathBuf;

use crate::dataset::DatasetError;
use crate::formats::TableError;
use crate::metadata::MetadataError;

/// Errors that can occur during dataset import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The primary data file does not exist
    #[error("source file not found: {0}")]
    SourceNotFound(PathBuf),

    /// The importer factory was invoked without a source
    #[error("a source is required to select an importer")]
    SourceRequired,

    /// I/O error reading the data or sidecar file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sidecar metadata file is not valid YAML
    #[error("sidecar metadata error: {0}")]
    Sidecar(#[source] serde_yaml::Error),

    /// The metadata document could not be folded into the typed schema
    #[error("metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// The numeric payload is malformed
    #[error("malformed data table: {0}")]
    Table(#[from] TableError),

    /// The parsed payload violated a dataset invariant
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
}
