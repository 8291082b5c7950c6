//! Numerical solvers for the psychrometric inversions

pub mod newton;
pub mod target_humidity;

pub use newton::{find_root, SolveError};
pub use target_humidity::{invert_to_target_rh, InversionConfig};
