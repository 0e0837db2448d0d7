use serde::{Deserialize, Serialize};

use super::PhysicalQuantity;

/// Metadata describing the sample measured
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sample {
    /// Sample name or identifier
    pub name: String,

    /// Solvent used
    pub solvent: String,

    /// Concentration of the sample in the solvent
    pub concentration: PhysicalQuantity,

    /// Details on the preparation of the sample
    pub preparation: String,
}
