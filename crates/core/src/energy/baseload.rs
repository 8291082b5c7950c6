//! Baseload heating energy estimation
//!
//! Estimates the energy spent keeping the enclosure above a minimum
//! temperature through the heating season: restrict paired indoor/outdoor
//! series to the season window, align them on shared timestamps, gate the
//! indoor−outdoor spread on the heating policy, and integrate the surviving
//! spread over time against the building's heat-loss coefficient.

use crate::core_types::sample::Sample;
use crate::core_types::units::{Celsius, Hours, KelvinDelta, KilowattHours};
use chrono::{DateTime, NaiveDate, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Calendar window of the heating season (both endpoints inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SeasonWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        SeasonWindow { start, end }
    }

    /// The conventional heating season: 1 Nov of `start_year` through
    /// 31 Mar of the following year.
    ///
    /// # Panics
    /// Never for representable years; the dates are fixed calendar days.
    pub fn heating_season(start_year: i32) -> Self {
        SeasonWindow {
            start: NaiveDate::from_ymd_opt(start_year, 11, 1).expect("valid date"),
            end: NaiveDate::from_ymd_opt(start_year + 1, 3, 31).expect("valid date"),
        }
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let date = timestamp.date_naive();
        self.start <= date && date <= self.end
    }
}

/// Estimator parameters; every former hard-coded literal is a named field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseloadConfig {
    /// Season the integration is restricted to
    pub season: SeasonWindow,
    /// Logger cadence; one qualifying sample contributes this much time
    pub sample_interval: Hours,
    /// Indoor temperature at or below which base heating is assumed active
    pub heating_threshold: Celsius,
    /// Transmission share of the heat-loss coefficient (kWh/K per interval-hour)
    pub transmission_loss_kwh_per_k: f64,
    /// Ventilation share of the heat-loss coefficient (kWh/K per interval-hour)
    pub ventilation_loss_kwh_per_k: f64,
}

impl BaseloadConfig {
    /// Defaults of the deployed monitoring setup: 15-minute cadence,
    /// 9.5 °C threshold, 2.2 + 0.9 kWh/K heat loss.
    pub fn new(season: SeasonWindow) -> Self {
        BaseloadConfig {
            season,
            sample_interval: Hours::new(0.25),
            heating_threshold: Celsius::new(9.5),
            transmission_loss_kwh_per_k: 2.2,
            ventilation_loss_kwh_per_k: 0.9,
        }
    }

    /// Combined heat-loss coefficient in kWh/K
    pub fn heat_loss_coefficient(&self) -> f64 {
        self.transmission_loss_kwh_per_k + self.ventilation_loss_kwh_per_k
    }
}

/// One timestamp present in both series, with the gated spread retained
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MergedSample {
    pub timestamp: DateTime<Utc>,
    pub indoor: Celsius,
    pub outdoor: Celsius,
    /// Indoor−outdoor spread, forced to zero where the heating policy says
    /// the system is inactive
    pub temp_diff: KelvinDelta,
}

/// Immutable summary of one estimator run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    pub energy_kwh: KilowattHours,
    pub average_delta_k: KelvinDelta,
    pub total_hours: Hours,
    pub heating_threshold: Celsius,
    /// Number of samples that contributed; zero is the explicit
    /// "no qualifying samples" flag (energy is reported as zero, not NaN)
    pub qualifying_samples: usize,
}

impl EnergyEstimate {
    pub fn is_empty_aggregate(&self) -> bool {
        self.qualifying_samples == 0
    }
}

/// Estimate plus the merged series for downstream inspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseloadOutcome {
    pub estimate: EnergyEstimate,
    pub merged: Vec<MergedSample>,
}

/// Run the baseload estimation over one indoor/outdoor pair.
///
/// Samples outside the season window are dropped, as are timestamps present
/// in only one series (inner join). The spread is kept only where
/// `indoor ≤ threshold` and `outdoor ≤ indoor`; everywhere else the heating
/// system is assumed inactive and the spread is forced to zero.
pub fn estimate(indoor: &[Sample], outdoor: &[Sample], config: &BaseloadConfig) -> BaseloadOutcome {
    let outdoor_by_time: FxHashMap<DateTime<Utc>, Celsius> = outdoor
        .iter()
        .filter(|s| config.season.contains(s.timestamp))
        .map(|s| (s.timestamp, s.temperature))
        .collect();

    let merged: Vec<MergedSample> = indoor
        .iter()
        .filter(|s| config.season.contains(s.timestamp))
        .filter_map(|s| {
            let outdoor_temp = *outdoor_by_time.get(&s.timestamp)?;
            let heating_active =
                s.temperature <= config.heating_threshold && outdoor_temp <= s.temperature;
            let temp_diff = if heating_active {
                s.temperature - outdoor_temp
            } else {
                KelvinDelta::ZERO
            };
            Some(MergedSample {
                timestamp: s.timestamp,
                indoor: s.temperature,
                outdoor: outdoor_temp,
                temp_diff,
            })
        })
        .collect();

    let positive: Vec<f64> = merged
        .iter()
        .map(|m| *m.temp_diff)
        .filter(|&d| d > 0.0)
        .collect();
    let count = positive.len();

    let estimate = if count == 0 {
        warn!(
            threshold = *config.heating_threshold,
            merged = merged.len(),
            "no qualifying samples below the heating threshold"
        );
        EnergyEstimate {
            energy_kwh: KilowattHours::ZERO,
            average_delta_k: KelvinDelta::ZERO,
            total_hours: Hours::new(0.0),
            heating_threshold: config.heating_threshold,
            qualifying_samples: 0,
        }
    } else {
        let average_delta_k = KelvinDelta::new(positive.iter().sum::<f64>() / count as f64);
        let total_hours = config.sample_interval * count as f64;
        let energy_kwh = KilowattHours::new(
            config.heat_loss_coefficient() * *average_delta_k * *total_hours,
        );
        info!(
            %energy_kwh,
            %average_delta_k,
            %total_hours,
            threshold = *config.heating_threshold,
            "baseload estimate"
        );
        EnergyEstimate {
            energy_kwh,
            average_delta_k,
            total_hours,
            heating_threshold: config.heating_threshold,
            qualifying_samples: count,
        }
    };

    BaseloadOutcome { estimate, merged }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::Percent;
    use chrono::TimeZone;

    fn at_minutes(m: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap() + chrono::Duration::minutes(m)
    }

    fn series(temps: &[(i64, f64)]) -> Vec<Sample> {
        temps
            .iter()
            .map(|&(m, t)| Sample::new(at_minutes(m), Celsius::new(t), Percent::new(50.0)))
            .collect()
    }

    fn winter_config() -> BaseloadConfig {
        BaseloadConfig::new(SeasonWindow::heating_season(2023))
    }

    #[test]
    fn test_end_to_end_energy_arithmetic() {
        // 4 samples at 15-minute spacing: ΔT = 8 K each, 1 h total,
        // 3.1 kWh/K → 24.8 kWh
        let indoor = series(&[(0, 8.0), (15, 8.0), (30, 8.0), (45, 8.0)]);
        let outdoor = series(&[(0, 0.0), (15, 0.0), (30, 0.0), (45, 0.0)]);
        let outcome = estimate(&indoor, &outdoor, &winter_config());

        let e = outcome.estimate;
        assert_eq!(e.qualifying_samples, 4);
        assert!((*e.average_delta_k - 8.0).abs() < 1e-12);
        assert!((*e.total_hours - 1.0).abs() < 1e-12);
        assert!((*e.energy_kwh - 24.8).abs() < 1e-9, "energy was {}", e.energy_kwh);
        assert!(!e.is_empty_aggregate());
    }

    #[test]
    fn test_warm_indoor_is_empty_aggregate_not_nan() {
        // Indoor always above the threshold: policy zeroes every spread
        let indoor = series(&[(0, 15.0), (15, 16.0)]);
        let outdoor = series(&[(0, 0.0), (15, 0.0)]);
        let outcome = estimate(&indoor, &outdoor, &winter_config());

        let e = outcome.estimate;
        assert!(e.is_empty_aggregate());
        assert_eq!(*e.energy_kwh, 0.0);
        assert_eq!(*e.average_delta_k, 0.0);
        assert!(!e.energy_kwh.is_nan());
        // The merged series still carries the zeroed diffs for inspection
        assert_eq!(outcome.merged.len(), 2);
        assert_eq!(outcome.merged[0].temp_diff, KelvinDelta::ZERO);
    }

    #[test]
    fn test_warmer_outdoor_excluded() {
        // Below threshold indoors, but outdoor above indoor: no base heating
        let indoor = series(&[(0, 5.0), (15, 5.0)]);
        let outdoor = series(&[(0, 9.0), (15, 3.0)]);
        let outcome = estimate(&indoor, &outdoor, &winter_config());

        assert_eq!(outcome.merged[0].temp_diff, KelvinDelta::ZERO);
        assert!((*outcome.merged[1].temp_diff - 2.0).abs() < 1e-12);
        assert_eq!(outcome.estimate.qualifying_samples, 1);
    }

    #[test]
    fn test_inner_join_drops_unmatched_timestamps() {
        let indoor = series(&[(0, 5.0), (15, 5.0), (30, 5.0)]);
        let outdoor = series(&[(15, 0.0), (45, 0.0)]);
        let outcome = estimate(&indoor, &outdoor, &winter_config());

        assert_eq!(outcome.merged.len(), 1);
        assert_eq!(outcome.merged[0].timestamp, at_minutes(15));
    }

    #[test]
    fn test_season_window_filters_summer() {
        let config = winter_config();
        let july = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        let indoor = vec![Sample::new(july, Celsius::new(5.0), Percent::new(50.0))];
        let outdoor = vec![Sample::new(july, Celsius::new(0.0), Percent::new(50.0))];
        let outcome = estimate(&indoor, &outdoor, &config);

        assert!(outcome.merged.is_empty());
        assert!(outcome.estimate.is_empty_aggregate());
    }

    #[test]
    fn test_season_window_boundaries_inclusive() {
        let window = SeasonWindow::heating_season(2023);
        assert!(window.contains(Utc.with_ymd_and_hms(2023, 11, 1, 0, 0, 0).unwrap()));
        assert!(window.contains(Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2023, 10, 31, 23, 59, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_coefficient_is_sum_of_contributions() {
        let config = winter_config();
        assert!((config.heat_loss_coefficient() - 3.1).abs() < 1e-12);
    }
}
