//! # Dataset Import
//!
//! Importers turn a source file into a [`Dataset`]: they read the optional
//! sidecar metadata file, migrate it across schema versions, lift a comment
//! annotation if one is present, fold the document into the typed metadata
//! record, and (for formats carrying numeric data) parse the payload and
//! label the axes.
//!
//! The [`Importer`] trait is the single seam between formats: concrete
//! importers are standalone types sharing the metadata stages as free
//! functions rather than inheriting from one another. [`importer_for`]
//! selects the right importer from the source's extension.
//!
//! ## Sidecar metadata
//!
//! Every importer looks for a YAML file next to the source, same base name,
//! `.yaml` extension. The file is optional: without one the dataset keeps
//! blank default metadata. With one, the import runs the schema-version
//! mapper when the document carries a `format.version` tag, then attaches
//! the document's `comment` (if any) as an annotation and folds the rest
//! into [`MeasurementMetadata`](crate::metadata::MeasurementMetadata).
//!
//! ```rust,no_run
//! use uvvis::import::importer_for;
//!
//! let importer = importer_for("sa281-02-280K.txt")?;
//! let dataset = importer.import()?;
//! println!("{} points from {}", dataset.data.len(), dataset.source);
//! # Ok::<(), uvvis::import::ImportError>(())
//! ```

mod error;


pub use error::ImportError;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_yaml::Value;

use crate::dataset::{Comment, Dataset};
use crate::formats::{ShimadzuAsciiImporter, SourceFormat};
use crate::metadata::{map_document, MeasurementMetadata};

/// A dataset importer for one source file.
///
/// Implementations are constructed with their source up front (usually via
/// [`importer_for`]) and perform the whole import in a single synchronous
/// [`Importer::import`] call. Importers only ever write into the dataset
/// they return; they hold no shared state across calls.
pub trait Importer {
    /// The source file this importer was created for
    fn source(&self) -> &Path;

    /// The file format this importer handles
    fn format(&self) -> SourceFormat;

    /// Import the source into a fresh dataset
    fn import(&self) -> Result<Dataset, ImportError>;
}

/// Fallback importer for sources without a recognized data format.
///
/// Reads only the sidecar metadata; the dataset's numeric data stays empty.
#[derive(Debug, Clone)]
pub struct GenericImporter {
    source: PathBuf,
}

impl GenericImporter {
    /// Create an importer for the given source file
    pub fn new<P: Into<PathBuf>>(source: P) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl Importer for GenericImporter {
    fn source(&self) -> &Path {
        &self.source
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Generic
    }

    fn import(&self) -> Result<Dataset, ImportError> {
        debug!("importing {} with metadata only", self.source.display());
        import_metadata(&self.source)
    }
}

/// Select the importer matching a source file.
///
/// Sources with the Shimadzu ASCII extension get the
/// [`ShimadzuAsciiImporter`]; everything else falls back to the
/// [`GenericImporter`]. The selection is pure: no file is touched until
/// [`Importer::import`] runs.
///
/// # Errors
///
/// [`ImportError::SourceRequired`] when `source` is empty, since there is
/// nothing to dispatch on.
pub fn importer_for<P: AsRef<Path>>(source: P) -> Result<Box<dyn Importer>, ImportError> {
    let source = source.as_ref();
    if source.as_os_str().is_empty() {
        return Err(ImportError::SourceRequired);
    }
    let format = SourceFormat::from_source(source);
    debug!("dispatching {} to the {format} importer", source.display());
    match format {
        SourceFormat::ShimadzuAscii => Ok(Box::new(ShimadzuAsciiImporter::new(source))),
        SourceFormat::Generic => Ok(Box::new(GenericImporter::new(source))),
    }
}

/// Shared metadata stages of every import.
///
/// Checks that the source exists, reads and version-maps the optional
/// sidecar document, attaches its `comment` as an annotation, and folds it
/// into the typed metadata record. Returns a dataset whose numeric data is
/// still empty; format-specific importers fill that in afterwards.
pub(crate) fn import_metadata(source: &Path) -> Result<Dataset, ImportError> {
    if !source.exists() {
        return Err(ImportError::SourceNotFound(source.to_path_buf()));
    }

    let mut dataset = Dataset::new();
    dataset.source = source.display().to_string();

    let Some(document) = read_sidecar(source)? else {
        return Ok(dataset);
    };

    // Only versioned documents go through the mapper; annotation extraction
    // runs after mapping so relocated comment fields would be honored.
    let document = if has_format_version(&document) {
        map_document(document)
    } else {
        document
    };

    if let Some(text) = document.get("comment").and_then(Value::as_str) {
        if !text.is_empty() {
            dataset.annotate(Comment::new(text));
        }
    }

    dataset.metadata = MeasurementMetadata::from_document(document)?;
    Ok(dataset)
}

/// Read the sidecar metadata document next to `source`, if one exists.
///
/// The sidecar shares the source's base name with a `.yaml` extension. A
/// missing sidecar is not an error; an unreadable or syntactically invalid
/// one is.
fn read_sidecar(source: &Path) -> Result<Option<Value>, ImportError> {
    let path = source.with_extension("yaml");
    if !path.exists() {
        debug!("no sidecar metadata next to {}", source.display());
        return Ok(None);
    }
    debug!("reading sidecar metadata from {}", path.display());
    let text = fs::read_to_string(&path)?;
    let document = serde_yaml::from_str(&text).map_err(ImportError::Sidecar)?;
    Ok(Some(document))
}

fn has_format_version(document: &Value) -> bool {
    document
        .get("format")
        .and_then(|format| format.get("version"))
        .is_some()
}
