use serde::{Deserialize, Serialize};

/// Metadata describing the spectrometer used for the experiment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spectrometer {
    /// Name of the manufacturer
    pub manufacturer: String,

    /// Model as provided by the manufacturer, usually a short string
    pub model: String,

    /// Name and version of the software used to record the data
    pub software: String,
}
