//! Series transforms: slope derivation and the batch pipeline

pub mod derive;
pub mod slope;

pub use derive::{derive_series, DeriveConfig, DeriveError};
pub use slope::slope_per_hour;
