/// Errors that can occur during dataset operations
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Axis values and data points do not line up one-to-one
    #[error("axis/data length mismatch: {axis} axis values vs {data} data points")]
    LengthMismatch {
        /// Number of axis values supplied
        axis: usize,
        /// Number of data points supplied
        data: usize,
    },
}
