use std::fmt;
use std::str::FromStr;

use super::MetadataError;

/// Version of the sidecar metadata schema currently written by this crate
pub const CURRENT_SCHEMA_VERSION: SchemaVersion = SchemaVersion::new(0, 1, 4);

/// Three-component version tag of a sidecar metadata document.
///
/// The tag lives under the document's `format.version` key and identifies
/// which field layout the document was written against. Ordering is plain
/// numeric comparison of major, then minor, then patch, so remapping rules
/// can test "written before layout X" with `<`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion {
    /// Major version component
    pub major: u16,
    /// Minor version component
    pub minor: u16,
    /// Patch version component
    pub patch: u16,
}

impl SchemaVersion {
    /// Create a version from its three components
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SchemaVersion {
    type Err = MetadataError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut components = input.trim().split('.');
        let mut next = || {
            components
                .next()
                .and_then(|component| component.parse::<u16>().ok())
                .ok_or_else(|| MetadataError::Version(input.to_string()))
        };
        let version = Self::new(next()?, next()?, next()?);
        if components.next().is_some() {
            return Err(MetadataError::Version(input.to_string()));
        }
        Ok(version)
    }
}
