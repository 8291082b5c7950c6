//! Organ Climate Core Library
//!
//! Psychrometric and thermal computation engine for building-climate
//! monitoring of a pipe organ enclosure. The surrounding dashboard hands in
//! time-ordered tables of (timestamp, temperature, relative humidity) and
//! receives derived columns or scalar summaries back:
//!
//! - Magnus-formula saturation vapor pressure and absolute ↔ relative
//!   humidity conversion
//! - Newton–Raphson inversion finding the temperature at which the current
//!   absolute humidity would read a target relative humidity
//! - finite-difference slopes over irregularly sampled series
//! - baseload heating energy estimation from paired indoor/outdoor series
//!
//! All operations are synchronous pure functions over immutable inputs; the
//! per-sample transforms parallelize across samples with rayon.

// Shared value types and units
pub mod core_types;

// Psychrometric physics
pub mod physics;

// Numerical inversion
pub mod solver;

// Series transforms
pub mod series;

// Energy estimation
pub mod energy;

// Re-export core types
pub use core_types::{
    is_time_ordered, Celsius, DerivedSample, GramsPerCubicMeter, HectoPascals, Hours, KelvinDelta,
    KilowattHours, Percent, Sample,
};

// Re-export the operation surface
pub use energy::{estimate, BaseloadConfig, BaseloadOutcome, EnergyEstimate, SeasonWindow};
pub use physics::{
    absolute_humidity, actual_vapor_pressure, relative_humidity, saturation_vapor_pressure,
    HumidityError, MagnusFormulation,
};
pub use series::{derive_series, slope_per_hour, DeriveConfig, DeriveError};
pub use solver::{invert_to_target_rh, InversionConfig, SolveError};
