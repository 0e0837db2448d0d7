//! Importer for the Shimadzu UVProbe ASCII export file format.
//!
//! UVProbe natively writes a proprietary binary format without a public
//! specification; the ASCII export is the reliable interchange path. An
//! export starts with two header lines (dataset name, column captions) and
//! continues with one `wavelength<TAB>absorbance` pair per line, decimal
//! commas throughout:
//!
//! ```text
//! "sa281-02 - RawData"
//! "Wavelength nm."	"Abs."
//! 300,00	0,322
//! 301,00	0,310
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::dataset::{DataArray, Dataset};
use crate::import::{import_metadata, ImportError, Importer};

use super::table::parse_table;
use super::SourceFormat;

/// Number of header lines preceding the numeric block in UVProbe exports
const HEADER_ROWS: usize = 2;

/// Importer for Shimadzu UVProbe ASCII exports.
///
/// Reads the numeric payload with comma-decimal normalization, merges the
/// optional sidecar metadata file, and labels the axes: axis 0 carries
/// wavelengths in nm, axis 1 the dimensionless absorbance.
#[derive(Debug, Clone)]
pub struct ShimadzuAsciiImporter {
    source: PathBuf,
}

impl ShimadzuAsciiImporter {
    /// Create an importer for the given export file
    pub fn new<P: Into<PathBuf>>(source: P) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl Importer for ShimadzuAsciiImporter {
    fn source(&self) -> &Path {
        &self.source
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::ShimadzuAscii
    }

    fn import(&self) -> Result<Dataset, ImportError> {
        debug!(
            "importing {} as Shimadzu UVProbe ASCII export",
            self.source.display()
        );
        let mut dataset = import_metadata(&self.source)?;

        let text = fs::read_to_string(&self.source)?;
        let (wavelengths, absorbances) = parse_table(&text, HEADER_ROWS)?;
        debug!("read {} wavelength/absorbance pairs", wavelengths.len());

        dataset.data = DataArray::new(wavelengths, absorbances)?;
        dataset.data.axes[0].quantity = "wavelength".to_string();
        dataset.data.axes[0].unit = "nm".to_string();
        dataset.data.axes[1].quantity = "absorbance".to_string();
        dataset.data.axes[1].unit = String::new();

        Ok(dataset)
    }
}
