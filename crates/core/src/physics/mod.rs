//! Psychrometric physics: vapor pressure, humidity conversion, vapor transfer

pub mod humidity;
pub mod vapor_pressure;
pub mod vapor_transfer;

pub use humidity::{absolute_humidity, actual_vapor_pressure, relative_humidity, HumidityError};
pub use vapor_pressure::{
    saturation_vapor_pressure, saturation_vapor_pressure_with, MagnusFormulation,
};
pub use vapor_transfer::{vapor_transfer_rate, wall_surface_temperature};
