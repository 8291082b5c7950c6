//! Saturation vapor pressure over water (Magnus formula)
//!
//! Two empirically fitted formulations circulate in the monitoring domain.
//! The exponential Magnus form is canonical for the humidity and energy
//! pipeline; the piecewise power-law fit exists for exploratory charting
//! comparisons and agrees with the exponential form to within a few percent
//! over the practical [-20, 40] °C range. Both are strictly increasing in
//! temperature and defined for all finite inputs (no guard at -273.15 °C).
//!
//! # References
//! - Magnus (1844), coefficients per Sonntag (1990): 6.112 hPa, 17.62, 243.12 K

use crate::core_types::units::{Celsius, HectoPascals};
use serde::{Deserialize, Serialize};

/// Which Magnus fit to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MagnusFormulation {
    /// `6.112 · exp(17.62·T / (T + 243.12))` — production form
    #[default]
    Exponential,
    /// Power-law fit, split at 0 °C (over water / over ice) — exploratory form
    PiecewisePowerLaw,
}

/// Saturation vapor pressure in hPa for the canonical exponential fit.
///
/// # Arguments
/// * `temperature` - Air temperature (°C)
pub fn saturation_vapor_pressure(temperature: Celsius) -> HectoPascals {
    saturation_vapor_pressure_with(MagnusFormulation::Exponential, temperature)
}

/// Saturation vapor pressure in hPa for a selectable formulation.
pub fn saturation_vapor_pressure_with(
    formulation: MagnusFormulation,
    temperature: Celsius,
) -> HectoPascals {
    let t = *temperature;
    let hpa = match formulation {
        MagnusFormulation::Exponential => 6.112 * ((17.62 * t) / (t + 243.12)).exp(),
        MagnusFormulation::PiecewisePowerLaw => {
            if t > 0.0 {
                288.68 * (1.098 + t / 100.0).powf(8.02) / 100.0
            } else {
                4.689 * (1.486 + t / 100.0).powf(12.3) / 100.0
            }
        }
    };
    HectoPascals::new(hpa)
}
