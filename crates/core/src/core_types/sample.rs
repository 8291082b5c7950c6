//! Timestamped climate samples
//!
//! A monitoring logger delivers a time-ordered table of
//! `(timestamp, temperature, relative humidity)` rows. The engine never
//! mutates a series in place; every transform returns a new vector.

use crate::core_types::units::{Celsius, GramsPerCubicMeter, Percent};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw logger reading.
///
/// Relative humidity is expected in [0, 100]; the conversion boundary
/// validates this, the struct itself does not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub temperature: Celsius,
    pub relative_humidity: Percent,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, temperature: Celsius, relative_humidity: Percent) -> Self {
        Sample {
            timestamp,
            temperature,
            relative_humidity,
        }
    }
}

/// A [`Sample`] augmented with derived psychrometric columns.
///
/// `target_temp_60rh` is present only when the derivation was configured to
/// run the target-humidity inversion. The slope columns are `None` at the
/// series head and wherever the time delta to the predecessor is not
/// positive (undefined slope, never silently zero).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedSample {
    pub timestamp: DateTime<Utc>,
    pub temperature: Celsius,
    pub relative_humidity: Percent,
    pub absolute_humidity: GramsPerCubicMeter,
    /// Temperature at which the sample's absolute humidity would read the
    /// configured target RH (only computed above the target)
    pub target_temp_60rh: Option<Celsius>,
    /// Absolute humidity rate of change in g/m³ per hour
    pub absolute_humidity_slope: Option<f64>,
    /// Temperature rate of change in °C per hour
    pub temperature_slope: Option<f64>,
}

/// True when timestamps are non-decreasing left to right.
///
/// Duplicate timestamps are tolerated (they surface as undefined slopes
/// downstream); a decreasing pair means the caller's table is not a series.
pub fn is_time_ordered(samples: &[Sample]) -> bool {
    samples.windows(2).all(|w| w[0].timestamp <= w[1].timestamp)
}
