use serde::{Deserialize, Serialize};

use super::PhysicalQuantity;

/// Metadata describing the optical cell used for the experiment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell {
    /// Manufacturer of the optical cell
    pub manufacturer: String,

    /// Type of the cell as given by the manufacturer
    #[serde(rename = "type")]
    pub kind: String,

    /// Optical pathlength of the cell, usually 1 cm
    pub pathlength: PhysicalQuantity,
}
