//! Conversion arithmetic
//!
//! Weight and distance convert through a scale factor to the dimension's
//! base unit. Temperature uses explicit pairwise formulas with no
//! intermediate base unit.

use crate::{Measure, TemperatureScale, UnitDefinition};
use crate::unit::ConversionError;

// ============ convert ============

/// Convert a quantity between two units of the same dimension
pub fn convert(quantity: f64, from: &UnitDefinition, to: &UnitDefinition) -> Result<f64, ConversionError> {
    match (from.measure, to.measure) {
        (Measure::Weight(from_factor), Measure::Weight(to_factor))
        | (Measure::Distance(from_factor), Measure::Distance(to_factor)) => {
            Ok(scale(quantity, from_factor, to_factor))
        }
        (Measure::Temperature(from_scale), Measure::Temperature(to_scale)) => {
            Ok(convert_temperature(quantity, from_scale, to_scale))
        }
        _ => Err(ConversionError::IncompatibleDimensions {
            from: from.plural,
            to: to.plural,
            from_dim: from.dimension(),
            to_dim: to.dimension(),
        }),
    }
}

// ============ scale ============

/// Linear conversion via the base unit: `quantity * from / to`
pub fn scale(quantity: f64, from_factor: f64, to_factor: f64) -> f64 {
    quantity * from_factor / to_factor
}

// ============ convert_temperature ============

/// Convert between temperature scales
pub fn convert_temperature(quantity: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
    use TemperatureScale::*;

    match (from, to) {
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => quantity,
        (Celsius, Fahrenheit) => quantity * 9.0 / 5.0 + 32.0,
        (Celsius, Kelvin) => quantity + 273.15,
        (Fahrenheit, Celsius) => (quantity - 32.0) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (quantity + 459.67) * 5.0 / 9.0,
        (Kelvin, Celsius) => quantity - 273.15,
        (Kelvin, Fahrenheit) => quantity * 9.0 / 5.0 - 459.67,
    }
}
