//! Heating energy estimation

pub mod baseload;

pub use baseload::{
    estimate, BaseloadConfig, BaseloadOutcome, EnergyEstimate, MergedSample, SeasonWindow,
};
