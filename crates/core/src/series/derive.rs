//! Batch derivation pipeline over a raw sample series
//!
//! Replaces the legacy row-wise spreadsheet pass with one batch transform:
//! absolute humidity and the optional target-temperature inversion are
//! independent per sample and run as a rayon parallel map; the slope columns
//! carry a strict left-to-right dependency and run as a sequential scan
//! afterwards.

use crate::core_types::sample::{DerivedSample, Sample};
use crate::core_types::units::{Celsius, GramsPerCubicMeter};
use crate::physics::humidity::{absolute_humidity, HumidityError};
use crate::series::slope::slope_per_hour;
use crate::solver::newton::SolveError;
use crate::solver::target_humidity::{invert_to_target_rh, InversionConfig};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Configuration of the derivation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeriveConfig {
    /// Also solve for the target-RH temperature on each damp sample
    pub compute_target_temp: bool,
    /// Parameters of that inversion
    pub inversion: InversionConfig,
}

/// A pipeline failure, tagged with the offending sample's timestamp
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeriveError {
    Humidity {
        timestamp: DateTime<Utc>,
        source: HumidityError,
    },
    Inversion {
        timestamp: DateTime<Utc>,
        source: SolveError,
    },
}

impl fmt::Display for DeriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeriveError::Humidity { timestamp, source } => {
                write!(f, "humidity conversion failed at {timestamp}: {source}")
            }
            DeriveError::Inversion { timestamp, source } => {
                write!(f, "target-RH inversion failed at {timestamp}: {source}")
            }
        }
    }
}

impl std::error::Error for DeriveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeriveError::Humidity { source, .. } => Some(source),
            DeriveError::Inversion { source, .. } => Some(source),
        }
    }
}

/// Derive the psychrometric columns for a time-ordered series.
///
/// Returns a new series; the input is never mutated. The first failing
/// sample aborts the batch with its timestamp attached — a half-derived
/// series is worse than a reported error.
pub fn derive_series(
    samples: &[Sample],
    config: &DeriveConfig,
) -> Result<Vec<DerivedSample>, DeriveError> {
    let per_sample: Vec<(GramsPerCubicMeter, Option<Celsius>)> = samples
        .par_iter()
        .map(|sample| derive_one(sample, config))
        .collect::<Result<_, _>>()?;

    // slope scans need the whole derived column materialized first
    let ah_points: Vec<(DateTime<Utc>, f64)> = samples
        .iter()
        .zip(&per_sample)
        .map(|(s, (ah, _))| (s.timestamp, **ah))
        .collect();
    let temp_points: Vec<(DateTime<Utc>, f64)> = samples
        .iter()
        .map(|s| (s.timestamp, *s.temperature))
        .collect();
    let ah_slopes = slope_per_hour(&ah_points);
    let temp_slopes = slope_per_hour(&temp_points);

    debug!(
        samples = samples.len(),
        targets = config.compute_target_temp,
        "derived psychrometric columns"
    );

    Ok(samples
        .iter()
        .zip(per_sample)
        .zip(ah_slopes.into_iter().zip(temp_slopes))
        .map(|((sample, (ah, target)), (ah_slope, temp_slope))| DerivedSample {
            timestamp: sample.timestamp,
            temperature: sample.temperature,
            relative_humidity: sample.relative_humidity,
            absolute_humidity: ah,
            target_temp_60rh: target,
            absolute_humidity_slope: ah_slope,
            temperature_slope: temp_slope,
        })
        .collect())
}

fn derive_one(
    sample: &Sample,
    config: &DeriveConfig,
) -> Result<(GramsPerCubicMeter, Option<Celsius>), DeriveError> {
    let ah = absolute_humidity(sample.temperature, sample.relative_humidity).map_err(|source| {
        DeriveError::Humidity {
            timestamp: sample.timestamp,
            source,
        }
    })?;

    let target = if config.compute_target_temp {
        Some(
            invert_to_target_rh(
                sample.relative_humidity,
                ah,
                sample.temperature,
                &config.inversion,
            )
            .map_err(|source| DeriveError::Inversion {
                timestamp: sample.timestamp,
                source,
            })?,
        )
    } else {
        None
    };

    Ok((ah, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::Percent;
    use chrono::TimeZone;

    fn at_minutes(m: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 6, 0, 0).unwrap() + chrono::Duration::minutes(m)
    }

    fn sample(m: i64, temp: f64, rh: f64) -> Sample {
        Sample::new(at_minutes(m), Celsius::new(temp), Percent::new(rh))
    }

    #[test]
    fn test_basic_columns() {
        let series = [sample(0, 15.0, 55.0), sample(15, 15.2, 54.0)];
        let derived = derive_series(&series, &DeriveConfig::default()).unwrap();

        assert_eq!(derived.len(), 2);
        assert!(*derived[0].absolute_humidity > 0.0);
        assert_eq!(derived[0].target_temp_60rh, None);
        assert_eq!(derived[0].absolute_humidity_slope, None);
        assert!(derived[1].absolute_humidity_slope.is_some());
        assert!(derived[1].temperature_slope.is_some());
        // 0.2 °C over a quarter hour
        assert!((derived[1].temperature_slope.unwrap() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_target_temp_only_above_threshold() {
        let config = DeriveConfig {
            compute_target_temp: true,
            ..DeriveConfig::default()
        };
        let series = [sample(0, 18.0, 72.0), sample(15, 18.0, 50.0)];
        let derived = derive_series(&series, &config).unwrap();

        // Damp sample gets a warmer correction target
        let corrected = derived[0].target_temp_60rh.unwrap();
        assert!(corrected > derived[0].temperature);
        // Dry sample passes its own temperature through the gate
        assert_eq!(derived[1].target_temp_60rh, Some(derived[1].temperature));
    }

    #[test]
    fn test_invalid_humidity_aborts_with_timestamp() {
        let series = [sample(0, 15.0, 55.0), sample(15, 15.0, 140.0)];
        let err = derive_series(&series, &DeriveConfig::default()).unwrap_err();
        match err {
            DeriveError::Humidity { timestamp, .. } => assert_eq!(timestamp, at_minutes(15)),
            DeriveError::Inversion { .. } => panic!("wrong error variant: {err}"),
        }
    }

    #[test]
    fn test_input_left_untouched() {
        let series = vec![sample(0, 12.0, 48.0), sample(15, 12.1, 48.5)];
        let before = series.clone();
        let _ = derive_series(&series, &DeriveConfig::default()).unwrap();
        assert_eq!(series, before);
    }

    #[test]
    fn test_empty_series() {
        let derived = derive_series(&[], &DeriveConfig::default()).unwrap();
        assert!(derived.is_empty());
    }
}
