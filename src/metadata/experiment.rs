use serde::{Deserialize, Serialize};

/// Metadata describing the kind of experiment performed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experiment {
    /// Type of experiment, such as "spectrum" or "kinetics"
    #[serde(rename = "type")]
    pub kind: String,

    /// Measurement mode, typically "absorption" or "transmission"
    pub measurement_mode: String,
}
