//! Surface vapor transfer estimate for condensation-risk checks
//!
//! Cold enclosure walls sit below room temperature; when the vapor pressure
//! at the wall film exceeds the interior vapor pressure, moisture moves into
//! the room air (and vice versa, toward the wall when the gradient flips).
//! The flux model is the standard film-resistance form
//! `g_v = 7·10⁻⁹ / R_si · Δp`, with Δp in Pa and `R_si` the interior
//! surface resistance (m²K/W, typically 0.13).

use crate::core_types::units::{Celsius, KelvinDelta, Percent};
use crate::physics::humidity::actual_vapor_pressure;

/// Film coefficient of the vapor transfer model (g/(m²·s·Pa) per unit R_si)
const VAPOR_TRANSFER_COEFFICIENT: f64 = 7e-9;

/// Inner wall surface temperature behind a steady heat flux.
///
/// `T_wall = T_interior − U · (T_interior − T_exterior) · R_si`
///
/// # Arguments
/// * `interior` / `exterior` - air temperatures on both sides of the wall
/// * `u_value` - wall thermal transmittance (W/(m²K))
/// * `surface_resistance` - interior surface resistance R_si (m²K/W)
pub fn wall_surface_temperature(
    interior: Celsius,
    exterior: Celsius,
    u_value: f64,
    surface_resistance: f64,
) -> Celsius {
    let flux = u_value * *(interior - exterior);
    interior - KelvinDelta::new(flux * surface_resistance)
}

/// Vapor mass flux through the wall film in g/(h·m²).
///
/// Positive when moisture moves from the surface into the room air.
///
/// # Arguments
/// * `surface_temperature` / `surface_humidity` - conditions at the wall film
/// * `interior_temperature` / `interior_humidity` - room air conditions
/// * `surface_resistance` - interior surface resistance R_si (m²K/W)
pub fn vapor_transfer_rate(
    surface_temperature: Celsius,
    surface_humidity: Percent,
    interior_temperature: Celsius,
    interior_humidity: Percent,
    surface_resistance: f64,
) -> f64 {
    let p_surface = actual_vapor_pressure(surface_temperature, surface_humidity).to_pascals();
    let p_interior = actual_vapor_pressure(interior_temperature, interior_humidity).to_pascals();
    let per_second = VAPOR_TRANSFER_COEFFICIENT / surface_resistance * (p_surface - p_interior);
    per_second * 3600.0
}
