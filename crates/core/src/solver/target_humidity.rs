//! Target-humidity temperature inversion
//!
//! For a sample whose relative humidity sits above the configured target
//! (60 % by default, the conservation limit for organ wood), find the
//! temperature at which the *same absolute humidity* would read exactly the
//! target RH. In practice: how far the enclosure must be heated so the air
//! it already holds stops being too damp.

use crate::core_types::units::{Celsius, GramsPerCubicMeter, Percent};
use crate::physics::humidity::relative_humidity;
use crate::solver::newton::{find_root, SolveError};
use serde::{Deserialize, Serialize};

/// Parameters of the inversion; former literals of the monitoring scripts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InversionConfig {
    /// Relative humidity the inversion drives toward
    pub target_rh: Percent,
    /// Newton convergence tolerance (residual or step, whichever first)
    pub tolerance: f64,
    /// Newton iteration cap
    pub max_iterations: usize,
}

impl Default for InversionConfig {
    fn default() -> Self {
        InversionConfig {
            target_rh: Percent::new(60.0),
            tolerance: 1e-4,
            max_iterations: 100,
        }
    }
}

/// Temperature at which `fixed_ah` corresponds to the configured target RH.
///
/// Threshold gate: a sample already at or below the target needs no
/// correction and gets `initial_guess` back verbatim. Above the target,
/// Newton–Raphson runs on `f(T) = RH(T, AH)/100 − target/100`, seeded at
/// the observed temperature; failure to converge surfaces as [`SolveError`]
/// rather than a numerically meaningless last iterate.
pub fn invert_to_target_rh(
    current_rh: Percent,
    fixed_ah: GramsPerCubicMeter,
    initial_guess: Celsius,
    config: &InversionConfig,
) -> Result<Celsius, SolveError> {
    if current_rh <= config.target_rh {
        return Ok(initial_guess);
    }

    let target_fraction = config.target_rh.as_fraction();
    let f = |temp: f64| {
        relative_humidity(Celsius::new(temp), fixed_ah).as_fraction() - target_fraction
    };
    find_root(f, *initial_guess, config.tolerance, config.max_iterations).map(Celsius::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::humidity::absolute_humidity;

    #[test]
    fn test_gate_returns_guess_below_target() {
        let config = InversionConfig::default();
        let guess = Celsius::new(13.7);
        let t = invert_to_target_rh(
            Percent::new(50.0),
            GramsPerCubicMeter::new(123.0),
            guess,
            &config,
        )
        .unwrap();
        assert_eq!(t, guess, "below-target sample must pass through untouched");
    }

    #[test]
    fn test_gate_includes_exact_target() {
        let config = InversionConfig::default();
        let guess = Celsius::new(20.0);
        let t = invert_to_target_rh(
            Percent::new(60.0),
            GramsPerCubicMeter::new(5.0),
            guess,
            &config,
        )
        .unwrap();
        assert_eq!(t, guess);
    }

    #[test]
    fn test_inversion_reaches_target_humidity() {
        let config = InversionConfig::default();
        let ah = absolute_humidity(Celsius::new(20.0), Percent::new(80.0)).unwrap();
        let t = invert_to_target_rh(Percent::new(80.0), ah, Celsius::new(20.0), &config).unwrap();

        let rh_at_solution = relative_humidity(t, ah);
        assert!(
            (*rh_at_solution - 60.0).abs() < 0.1,
            "RH at solution was {rh_at_solution}"
        );
        // More vapor capacity is needed, so the target temperature is warmer
        assert!(t > Celsius::new(20.0));
    }

    #[test]
    fn test_inversion_fails_loudly_with_hostile_cap() {
        let config = InversionConfig {
            tolerance: 1e-14,
            max_iterations: 1,
            ..InversionConfig::default()
        };
        let ah = absolute_humidity(Celsius::new(5.0), Percent::new(95.0)).unwrap();
        let result = invert_to_target_rh(Percent::new(95.0), ah, Celsius::new(40.0), &config);
        assert!(result.is_err(), "starved solver must report, not guess");
    }

    #[test]
    fn test_custom_target_rh() {
        let config = InversionConfig {
            target_rh: Percent::new(50.0),
            ..InversionConfig::default()
        };
        let ah = absolute_humidity(Celsius::new(18.0), Percent::new(70.0)).unwrap();
        let t = invert_to_target_rh(Percent::new(70.0), ah, Celsius::new(18.0), &config).unwrap();
        let rh = relative_humidity(t, ah);
        assert!((*rh - 50.0).abs() < 0.1);
    }
}
