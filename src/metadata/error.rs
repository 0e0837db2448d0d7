/// Errors that can occur during metadata processing
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// Malformed physical quantity string (expected `"<value> <unit>"`)
    #[error("invalid physical quantity: {0:?}")]
    Quantity(String),

    /// Malformed measurement start date or time
    #[error("invalid start stamp {stamp:?}: {source}")]
    Timestamp {
        /// The offending date or time string
        stamp: String,
        /// The underlying chrono parse failure
        source: chrono::ParseError,
    },

    /// Malformed schema version string (expected `"MAJOR.MINOR.PATCH"`)
    #[error("invalid schema version: {0:?}")]
    Version(String),

    /// Metadata document could not be folded into the typed schema
    #[error("metadata document error: {0}")]
    Document(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
