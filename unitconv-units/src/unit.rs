//! Unit representation with conversion payloads

use std::fmt;
use serde::Serialize;
use thiserror::Error;
use crate::{Dimension, TemperatureScale};

/// How a unit converts to the other units of its dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "dimension", content = "value")]
pub enum Measure {
    /// Factor to grams
    Weight(f64),
    /// Factor to meters
    Distance(f64),
    /// Affine scale, converted pairwise
    Temperature(TemperatureScale),
}

/// A known unit and the spellings that refer to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitDefinition {
    /// Short form (e.g., "km", "lb", "c")
    pub abbreviation: &'static str,
    /// Label used when the quantity is exactly one (e.g., "kilometer", "degree celsius")
    pub singular: &'static str,
    /// Label used otherwise (e.g., "kilometers", "degrees celsius")
    pub plural: &'static str,
    /// Extra temperature spellings: bare name and two-letter degree code
    pub alternates: &'static [&'static str],
    pub measure: Measure,
}

impl UnitDefinition {
    /// Create a weight unit with its factor to grams
    pub const fn weight(abbreviation: &'static str, singular: &'static str, plural: &'static str, factor: f64) -> Self {
        UnitDefinition { abbreviation, singular, plural, alternates: &[], measure: Measure::Weight(factor) }
    }

    /// Create a distance unit with its factor to meters
    pub const fn distance(abbreviation: &'static str, singular: &'static str, plural: &'static str, factor: f64) -> Self {
        UnitDefinition { abbreviation, singular, plural, alternates: &[], measure: Measure::Distance(factor) }
    }

    /// Create a temperature unit
    pub const fn temperature(
        abbreviation: &'static str,
        singular: &'static str,
        plural: &'static str,
        alternates: &'static [&'static str],
        scale: TemperatureScale,
    ) -> Self {
        UnitDefinition { abbreviation, singular, plural, alternates, measure: Measure::Temperature(scale) }
    }

    pub fn dimension(&self) -> Dimension {
        match self.measure {
            Measure::Weight(_) => Dimension::Weight,
            Measure::Distance(_) => Dimension::Distance,
            Measure::Temperature(_) => Dimension::Temperature,
        }
    }

    /// Factor to the dimension's base unit, `None` for temperature
    pub fn scale_factor(&self) -> Option<f64> {
        match self.measure {
            Measure::Weight(factor) | Measure::Distance(factor) => Some(factor),
            Measure::Temperature(_) => None,
        }
    }

    /// Temperature scale, `None` for linear units
    pub fn temperature_scale(&self) -> Option<TemperatureScale> {
        match self.measure {
            Measure::Temperature(scale) => Some(scale),
            _ => None,
        }
    }

    /// Check if this is the base unit of its dimension (gram or meter)
    pub fn is_base(&self) -> bool {
        self.scale_factor() == Some(1.0)
    }

    /// Check if two units are dimensionally compatible (can be converted)
    pub fn is_compatible(&self, other: &UnitDefinition) -> bool {
        self.dimension() == other.dimension()
    }

    /// Every spelling that refers to this unit, duplicates included
    pub fn recognized_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        [self.abbreviation, self.singular, self.plural]
            .into_iter()
            .chain(self.alternates.iter().copied())
    }

    /// Check if `name` is one of this unit's spellings (case-sensitive)
    pub fn matches(&self, name: &str) -> bool {
        self.recognized_names().any(|n| n == name)
    }

    /// Singular label for exactly one, plural otherwise
    pub fn label_for(&self, quantity: f64) -> &'static str {
        if quantity == 1.0 {
            self.singular
        } else {
            self.plural
        }
    }
}

impl fmt::Display for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plural)
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Units have incompatible dimensions
    #[error("cannot convert {from} ({from_dim}) to {to} ({to_dim}): incompatible dimensions")]
    IncompatibleDimensions {
        from: &'static str,
        to: &'static str,
        from_dim: Dimension,
        to_dim: Dimension,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> UnitDefinition {
        UnitDefinition::distance("m", "meter", "meters", 1.0)
    }

    fn kilogram() -> UnitDefinition {
        UnitDefinition::weight("kg", "kilogram", "kilograms", 1000.0)
    }

    fn celsius() -> UnitDefinition {
        UnitDefinition::temperature("c", "degree celsius", "degrees celsius", &["celsius", "dc"], TemperatureScale::Celsius)
    }

    #[test]
    fn test_base_unit() {
        assert!(meter().is_base());
        assert!(!kilogram().is_base());
        assert!(!celsius().is_base());
    }

    #[test]
    fn test_dimension_from_measure() {
        assert_eq!(meter().dimension(), Dimension::Distance);
        assert_eq!(kilogram().dimension(), Dimension::Weight);
        assert_eq!(celsius().dimension(), Dimension::Temperature);
    }

    #[test]
    fn test_scale_factor_only_for_linear() {
        assert_eq!(kilogram().scale_factor(), Some(1000.0));
        assert_eq!(celsius().scale_factor(), None);
        assert_eq!(celsius().temperature_scale(), Some(TemperatureScale::Celsius));
        assert_eq!(meter().temperature_scale(), None);
    }

    #[test]
    fn test_compatible_units() {
        assert!(meter().is_compatible(&meter()));
        assert!(!meter().is_compatible(&kilogram()));
        assert!(!celsius().is_compatible(&kilogram()));
    }

    #[test]
    fn test_matches_all_spellings() {
        let c = celsius();
        for name in ["c", "degree celsius", "degrees celsius", "celsius", "dc"] {
            assert!(c.matches(name), "{name}");
        }
        assert!(!c.matches("C"));
        assert!(!c.matches("f"));

        let kg = kilogram();
        assert!(kg.matches("kilograms"));
        assert!(!kg.matches("Kilograms"));
    }

    #[test]
    fn test_label_for() {
        let m = meter();
        assert_eq!(m.label_for(1.0), "meter");
        assert_eq!(m.label_for(2.0), "meters");
        assert_eq!(m.label_for(0.0), "meters");
        assert_eq!(m.label_for(1.0000001), "meters");
    }

    #[test]
    fn test_serialize_measure() {
        let json = serde_json::to_value(kilogram()).unwrap();
        assert_eq!(json["measure"]["dimension"], "weight");
        assert_eq!(json["measure"]["value"], 1000.0);
        assert_eq!(json["plural"], "kilograms");
    }
}
