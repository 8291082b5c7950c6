//! Finite-difference slopes over irregularly spaced timestamps
//!
//! Loggers drop samples and duplicate timestamps, so the slope column is
//! derived against the actual time delta of each consecutive pair, not an
//! assumed cadence. Undefined slopes (series head, zero or negative delta)
//! are `None` — never 0 or ±∞ silently feeding downstream arithmetic.

use chrono::{DateTime, Utc};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Per-sample slope in value units per hour.
///
/// `slope[i] = (v[i] − v[i−1]) / hours(t[i] − t[i−1])`; `slope[0]` has no
/// predecessor and is `None`. An explicit scan over consecutive pairs keeps
/// the left-to-right dependency visible.
pub fn slope_per_hour(points: &[(DateTime<Utc>, f64)]) -> Vec<Option<f64>> {
    let mut slopes = Vec::with_capacity(points.len());
    if points.is_empty() {
        return slopes;
    }
    slopes.push(None);
    slopes.extend(points.windows(2).map(|pair| {
        let (t_prev, v_prev) = pair[0];
        let (t_cur, v_cur) = pair[1];
        let delta_hours =
            (t_cur - t_prev).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_HOUR;
        if delta_hours > 0.0 {
            Some((v_cur - v_prev) / delta_hours)
        } else {
            // duplicate or out-of-order timestamp: slope undefined here
            None
        }
    }));
    slopes
}
