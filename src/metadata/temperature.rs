use serde::{Deserialize, Serialize};

use super::PhysicalQuantity;

/// Metadata describing the temperature control during the measurement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureControl {
    /// Whether the temperature was actively controlled
    pub controlled: bool,

    /// Temperature the measurement was performed at
    pub temperature: PhysicalQuantity,

    /// Temperature controller used
    pub controller: String,

    /// Type of the cryostat used (as given by the manufacturer)
    pub cryostat: String,

    /// Type of cryogen, typically "LN2" or "LHe"
    pub cryogen: String,
}
