//! Absolute ↔ relative humidity conversion on the Magnus model
//!
//! Absolute humidity is the water vapor mass per air volume (g/m³); relative
//! humidity is the ratio of actual to saturation vapor pressure. Both
//! directions go through the ideal gas law with the constants below.
//!
//! The conversions are pure and idempotent: identical inputs produce
//! bit-identical outputs.

use crate::core_types::units::{Celsius, GramsPerCubicMeter, HectoPascals, Percent};
use crate::physics::vapor_pressure::saturation_vapor_pressure;
use std::fmt;

/// Molecular weight of water vapor (kg/kmol)
pub const MOLECULAR_WEIGHT_WATER: f64 = 18.016;

/// Universal gas constant (J/(kmol·K))
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8314.3;

/// Conversion error for humidity inputs outside their physical range
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HumidityError {
    /// Relative humidity outside [0, 100] %
    RelativeHumidityOutOfRange { value: f64 },
}

impl fmt::Display for HumidityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HumidityError::RelativeHumidityOutOfRange { value } => {
                write!(f, "relative humidity {value} % is outside [0, 100]")
            }
        }
    }
}

impl std::error::Error for HumidityError {}

/// Actual vapor pressure from temperature and relative humidity.
///
/// `Ea = (RH / 100) · Es(T)`
pub fn actual_vapor_pressure(temperature: Celsius, relative_humidity: Percent) -> HectoPascals {
    let es = saturation_vapor_pressure(temperature);
    HectoPascals::new(relative_humidity.as_fraction() * *es)
}

/// Absolute humidity (g/m³) from temperature and relative humidity.
///
/// `AH = 1e5 · Mw / R · Ea / (T + 273.15)`
///
/// Undefined at T = −273.15 °C (division by zero Kelvin); that singularity
/// is documented rather than guarded. Relative humidity outside [0, 100]
/// is rejected rather than silently propagated.
pub fn absolute_humidity(
    temperature: Celsius,
    relative_humidity: Percent,
) -> Result<GramsPerCubicMeter, HumidityError> {
    let rh = *relative_humidity;
    if !(0.0..=100.0).contains(&rh) {
        return Err(HumidityError::RelativeHumidityOutOfRange { value: rh });
    }
    let ea = actual_vapor_pressure(temperature, relative_humidity);
    let ah = 1e5 * MOLECULAR_WEIGHT_WATER / UNIVERSAL_GAS_CONSTANT * *ea
        / temperature.to_kelvin();
    Ok(GramsPerCubicMeter::new(ah))
}

/// Relative humidity (%) from temperature and absolute humidity.
///
/// `Ea = AH · (T + 273.15) · R / Mw / 1e5`, `RH = 100 · Ea / Es(T)`
///
/// Inverse of [`absolute_humidity`]. Not range-clamped: this relation is the
/// Newton target function for the 60 %-RH temperature inversion and must be
/// evaluable above 100 %.
pub fn relative_humidity(
    temperature: Celsius,
    absolute_humidity: GramsPerCubicMeter,
) -> Percent {
    let ea = *absolute_humidity * temperature.to_kelvin() * UNIVERSAL_GAS_CONSTANT
        / MOLECULAR_WEIGHT_WATER
        / 1e5;
    let es = saturation_vapor_pressure(temperature);
    Percent::new(100.0 * ea / *es)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_value_room_conditions() {
        // 20 °C, 50 % RH ≈ 8.6 g/m³ (psychrometric table value)
        let ah = absolute_humidity(Celsius::new(20.0), Percent::new(50.0)).unwrap();
        assert!((*ah - 8.65).abs() < 0.1, "AH was {}", *ah);
    }

    #[test]
    fn test_linear_in_relative_humidity() {
        let t = Celsius::new(15.0);
        let half = absolute_humidity(t, Percent::new(40.0)).unwrap();
        let full = absolute_humidity(t, Percent::new(80.0)).unwrap();
        assert_relative_eq!(*full, 2.0 * *half, max_relative = 1e-12);
    }

    #[test]
    fn test_monotonically_increasing_in_temperature() {
        let rh = Percent::new(50.0);
        let mut prev = absolute_humidity(Celsius::new(-20.0), rh).unwrap();
        let mut t = -19.0;
        while t <= 40.0 {
            let ah = absolute_humidity(Celsius::new(t), rh).unwrap();
            assert!(ah > prev, "AH not increasing at {t} °C");
            prev = ah;
            t += 1.0;
        }
    }

    #[test]
    fn test_round_trip() {
        let mut t = -20.0;
        while t <= 40.0 {
            let mut rh = 1.0;
            while rh <= 99.0 {
                let ah = absolute_humidity(Celsius::new(t), Percent::new(rh)).unwrap();
                let back = relative_humidity(Celsius::new(t), ah);
                assert_relative_eq!(*back, rh, max_relative = 1e-6);
                rh += 7.0;
            }
            t += 5.0;
        }
    }

    #[test]
    fn test_rejects_out_of_range_humidity() {
        let t = Celsius::new(20.0);
        assert_eq!(
            absolute_humidity(t, Percent::new(-0.5)),
            Err(HumidityError::RelativeHumidityOutOfRange { value: -0.5 })
        );
        assert!(absolute_humidity(t, Percent::new(100.5)).is_err());
        assert!(absolute_humidity(t, Percent::new(0.0)).is_ok());
        assert!(absolute_humidity(t, Percent::new(100.0)).is_ok());
    }

    #[test]
    fn test_zero_humidity_is_zero_mass() {
        let ah = absolute_humidity(Celsius::new(30.0), Percent::new(0.0)).unwrap();
        assert_eq!(*ah, 0.0);
    }

    #[test]
    fn test_idempotent() {
        let a = absolute_humidity(Celsius::new(17.3), Percent::new(63.2)).unwrap();
        let b = absolute_humidity(Celsius::new(17.3), Percent::new(63.2)).unwrap();
        assert_eq!(a, b, "pure function must be bit-identical across calls");
    }
}
