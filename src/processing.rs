//! Processing-step parameter defaults for UV-Vis data.
//!
//! The numerical processing itself (baseline fitting, normalisation,
//! interpolation, filtering) lives outside this crate; what belongs here is
//! the one domain-specific deviation from the generic defaults. Optical
//! absorption spectra tend to carry their features towards the high-energy,
//! short-wavelength end, so the baseline is fitted against the right side
//! of the spectrum only instead of both ends.

use serde::{Deserialize, Serialize};

/// Baseline model fitted during correction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineKind {
    /// Polynomial of the configured order
    #[default]
    Polynomial,
}

/// Parameter set for baseline correction of UV-Vis spectra.
///
/// `fit_area` gives the percentage of points taken from the left and right
/// end of the spectrum for fitting the baseline. The default of `[0, 10]`
/// uses only the ten percent at the right, long-wavelength side: in
/// absorption spectra that region is the most likely to be feature-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineCorrection {
    /// Baseline model to fit
    pub kind: BaselineKind,

    /// Polynomial order, zero for a constant offset
    pub order: u32,

    /// Percentage of points from the left and right end used for fitting
    pub fit_area: [f64; 2],
}

impl Default for BaselineCorrection {
    fn default() -> Self {
        Self {
            kind: BaselineKind::Polynomial,
            order: 0,
            fit_area: [0.0, 10.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fit_area_is_right_ten_percent() {
        let correction = BaselineCorrection::default();
        assert_eq!(correction.fit_area, [0.0, 10.0]);
        assert_eq!(correction.order, 0);
        assert_eq!(correction.kind, BaselineKind::Polynomial);
    }
}
