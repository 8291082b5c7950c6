//! Core value types shared across the engine

pub mod sample;
pub mod units;

pub use sample::{is_time_ordered, DerivedSample, Sample};
pub use units::{Celsius, GramsPerCubicMeter, HectoPascals, Hours, KelvinDelta, KilowattHours, Percent};
