use std::fmt;
use std::str::FromStr;

use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::MetadataError;

/// A numeric value together with its unit, e.g. a cell pathlength of "1 cm".
///
/// Quantities are recorded in sidecar metadata files either as plain strings
/// (`"1 cm"`, `"0.1 mM"`, `"5"`, `""`) or, in older files, as a mapping with
/// explicit `value` and `unit` keys. Both forms deserialize into this type;
/// serialization always emits the string form.
///
/// An unset quantity has no value and an empty unit and renders as the empty
/// string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicalQuantity {
    /// Numeric value, absent when the quantity was never recorded
    pub value: Option<f64>,

    /// Unit string, empty for dimensionless or unset quantities
    pub unit: String,
}

impl PhysicalQuantity {
    /// Create a quantity from a value and a unit string
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            value: Some(value),
            unit: unit.to_string(),
        }
    }

    /// Whether no value has been recorded
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) if self.unit.is_empty() => write!(f, "{}", value),
            Some(value) => write!(f, "{} {}", value, self.unit),
            None => Ok(()),
        }
    }
}

impl FromStr for PhysicalQuantity {
    type Err = MetadataError;

    /// Parse `"<value> <unit>"`, `"<value>"`, or the empty string.
    ///
    /// Multi-token units such as `"mAU / s"` are preserved verbatim after the
    /// leading numeric token.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let mut tokens = trimmed.splitn(2, char::is_whitespace);
        let value = tokens
            .next()
            .and_then(|token| token.parse::<f64>().ok())
            .ok_or_else(|| MetadataError::Quantity(input.to_string()))?;
        let unit = tokens.next().unwrap_or("").trim().to_string();
        Ok(Self {
            value: Some(value),
            unit,
        })
    }
}

impl Serialize for PhysicalQuantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PhysicalQuantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum QuantityRepr {
            Number(f64),
            Text(String),
            Fields {
                #[serde(default)]
                value: Option<f64>,
                #[serde(default)]
                unit: String,
            },
        }

        match QuantityRepr::deserialize(deserializer)? {
            QuantityRepr::Number(value) => Ok(Self {
                value: Some(value),
                unit: String::new(),
            }),
            QuantityRepr::Text(text) => text.parse().map_err(D::Error::custom),
            QuantityRepr::Fields { value, unit } => Ok(Self { value, unit }),
        }
    }
}
