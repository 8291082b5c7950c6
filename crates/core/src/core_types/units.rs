//! Semantic unit types for type-safe physical quantity handling
//!
//! Newtype wrappers over `f64` prevent accidental mixing of incompatible
//! quantities (e.g. a temperature with a vapor pressure, or a temperature
//! difference with an absolute temperature).
//!
//! # Design
//! - All quantities use f64; the Newton inversion and energy integration are
//!   sensitive to accumulated rounding
//! - `Deref` exposes the raw value for formula-heavy physics code
//! - Total ordering via `Ord` (NaN sorts greater than all values)
//! - Serde support for serialization
//!
//! # Usage
//! ```
//! use organ_climate_core::core_types::{Celsius, KelvinDelta};
//!
//! let indoor = Celsius::new(8.0);
//! let outdoor = Celsius::new(0.0);
//! let diff: KelvinDelta = indoor - outdoor;
//! assert_eq!(*diff, 8.0);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, DerefMut, Div, Mul, Neg, Sub};

/// Temperature in degrees Celsius.
///
/// Not range-validated: the conversion formulas are documented as undefined
/// at −273.15 °C and the engine leaves extreme inputs unguarded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f64);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Celsius {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Celsius {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Celsius {
    /// Celsius to Kelvin conversion offset (0 °C = 273.15 K)
    pub const KELVIN_OFFSET: f64 = 273.15;

    /// Water freezing point
    pub const FREEZING: Celsius = Celsius(0.0);

    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Celsius(value)
    }

    /// Absolute temperature in Kelvin
    #[inline]
    pub fn to_kelvin(self) -> f64 {
        self.0 + Self::KELVIN_OFFSET
    }
}

impl From<f64> for Celsius {
    fn from(value: f64) -> Self {
        Celsius(value)
    }
}

impl From<Celsius> for f64 {
    fn from(value: Celsius) -> Self {
        value.0
    }
}

impl Sub for Celsius {
    type Output = KelvinDelta;
    /// Difference of two temperatures is a temperature *difference*
    fn sub(self, rhs: Celsius) -> KelvinDelta {
        KelvinDelta(self.0 - rhs.0)
    }
}

impl Add<KelvinDelta> for Celsius {
    type Output = Celsius;
    fn add(self, rhs: KelvinDelta) -> Celsius {
        Celsius(self.0 + rhs.0)
    }
}

impl Sub<KelvinDelta> for Celsius {
    type Output = Celsius;
    fn sub(self, rhs: KelvinDelta) -> Celsius {
        Celsius(self.0 - rhs.0)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} °C", self.0)
    }
}

/// Temperature difference in Kelvin (equivalently, degrees Celsius).
///
/// Distinct from [`Celsius`] so that an indoor/outdoor spread cannot be
/// passed where an absolute temperature is expected.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KelvinDelta(f64);

impl Eq for KelvinDelta {}

impl PartialOrd for KelvinDelta {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KelvinDelta {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for KelvinDelta {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KelvinDelta {
    pub const ZERO: KelvinDelta = KelvinDelta(0.0);

    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KelvinDelta(value)
    }
}

impl Neg for KelvinDelta {
    type Output = KelvinDelta;
    fn neg(self) -> KelvinDelta {
        KelvinDelta(-self.0)
    }
}

impl Add for KelvinDelta {
    type Output = KelvinDelta;
    fn add(self, rhs: KelvinDelta) -> KelvinDelta {
        KelvinDelta(self.0 + rhs.0)
    }
}

impl Sub for KelvinDelta {
    type Output = KelvinDelta;
    fn sub(self, rhs: KelvinDelta) -> KelvinDelta {
        KelvinDelta(self.0 - rhs.0)
    }
}

impl Mul<f64> for KelvinDelta {
    type Output = KelvinDelta;
    fn mul(self, rhs: f64) -> KelvinDelta {
        KelvinDelta(self.0 * rhs)
    }
}

impl Div<f64> for KelvinDelta {
    type Output = KelvinDelta;
    fn div(self, rhs: f64) -> KelvinDelta {
        KelvinDelta(self.0 / rhs)
    }
}

impl fmt::Display for KelvinDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} K", self.0)
    }
}

/// Relative humidity (or any ratio) as a percentage.
///
/// Deliberately unclamped: the inverse humidity relation evaluates above
/// 100 % while the Newton iteration probes the curve. Range validation
/// happens at the conversion boundary, not in the constructor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Percent(f64);

impl Eq for Percent {}

impl PartialOrd for Percent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Percent {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Percent {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Percent(value)
    }

    /// Value as a fraction (60 % → 0.60)
    #[inline]
    pub fn as_fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} %", self.0)
    }
}

/// Vapor pressure in hectopascals (hPa)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct HectoPascals(f64);

impl Eq for HectoPascals {}

impl PartialOrd for HectoPascals {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HectoPascals {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for HectoPascals {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl HectoPascals {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        HectoPascals(value)
    }

    /// Conversion to pascals (1 hPa = 100 Pa)
    #[inline]
    pub fn to_pascals(self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for HectoPascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} hPa", self.0)
    }
}

/// Absolute humidity in grams of water vapor per cubic meter of air
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct GramsPerCubicMeter(f64);

impl Eq for GramsPerCubicMeter {}

impl PartialOrd for GramsPerCubicMeter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GramsPerCubicMeter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for GramsPerCubicMeter {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl GramsPerCubicMeter {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        GramsPerCubicMeter(value)
    }
}

impl fmt::Display for GramsPerCubicMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} g/m³", self.0)
    }
}

/// Elapsed time in hours
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Hours(f64);

impl Eq for Hours {}

impl PartialOrd for Hours {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hours {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Hours {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Hours {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Hours(value)
    }
}

impl Mul<f64> for Hours {
    type Output = Hours;
    fn mul(self, rhs: f64) -> Hours {
        Hours(self.0 * rhs)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} h", self.0)
    }
}

/// Energy in kilowatt-hours
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilowattHours(f64);

impl Eq for KilowattHours {}

impl PartialOrd for KilowattHours {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilowattHours {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for KilowattHours {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilowattHours {
    pub const ZERO: KilowattHours = KilowattHours(0.0);

    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilowattHours(value)
    }
}

impl Add for KilowattHours {
    type Output = KilowattHours;
    fn add(self, rhs: KilowattHours) -> KilowattHours {
        KilowattHours(self.0 + rhs.0)
    }
}

impl fmt::Display for KilowattHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} kWh", self.0)
    }
}
