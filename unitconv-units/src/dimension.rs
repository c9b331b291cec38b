//! Dimension types
//!
//! A dimension is the kind of physical quantity a unit measures. Conversions
//! are only defined between units that share one.

use std::fmt;
use serde::Serialize;

/// The physical quantity kind of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Mass, base unit gram
    Weight,
    /// Length, base unit meter
    Distance,
    /// Temperature, converted with affine formulas instead of a factor
    Temperature,
}

impl Dimension {
    /// Lowercase name of the dimension
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Weight => "weight",
            Dimension::Distance => "distance",
            Dimension::Temperature => "temperature",
        }
    }

    /// Check if conversion is a plain multiplication by a scale factor
    pub fn is_linear(&self) -> bool {
        !matches!(self, Dimension::Temperature)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Temperature scales supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    #[cfg(test)]
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "celsius",
            TemperatureScale::Fahrenheit => "fahrenheit",
            TemperatureScale::Kelvin => "kelvin",
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
