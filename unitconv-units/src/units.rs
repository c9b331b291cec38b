//! Unit definitions - weight, distance and temperature units

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, warn};
use crate::{Dimension, TemperatureScale, UnitDefinition};

/// Global unit catalog
pub static UNITS: LazyLock<UnitCatalog> = LazyLock::new(|| UnitCatalog::new(&DEFINITIONS));

static DEFINITIONS: [UnitDefinition; 16] = [
    // Weight, factors to grams
    UnitDefinition::weight("g", "gram", "grams", 1.0),
    UnitDefinition::weight("kg", "kilogram", "kilograms", 1000.0),
    UnitDefinition::weight("mg", "milligram", "milligrams", 0.001),
    UnitDefinition::weight("lb", "pound", "pounds", 453.592),
    UnitDefinition::weight("oz", "ounce", "ounces", 28.3495),

    // Distance, factors to meters
    UnitDefinition::distance("m", "meter", "meters", 1.0),
    UnitDefinition::distance("km", "kilometer", "kilometers", 1000.0),
    UnitDefinition::distance("cm", "centimeter", "centimeters", 0.01),
    UnitDefinition::distance("mm", "millimeter", "millimeters", 0.001),
    UnitDefinition::distance("mi", "mile", "miles", 1609.35),
    UnitDefinition::distance("yd", "yard", "yards", 0.9144),
    UnitDefinition::distance("ft", "foot", "feet", 0.3048),
    UnitDefinition::distance("in", "inch", "inches", 0.0254),

    // Temperature
    UnitDefinition::temperature("c", "degree celsius", "degrees celsius", &["celsius", "dc"], TemperatureScale::Celsius),
    UnitDefinition::temperature("f", "degree fahrenheit", "degrees fahrenheit", &["fahrenheit", "df"], TemperatureScale::Fahrenheit),
    // Bare name and code are both "k"
    UnitDefinition::temperature("k", "kelvin", "kelvins", &["k"], TemperatureScale::Kelvin),
];

/// Look up a unit by any of its spellings in the global catalog
///
/// Callers lowercase user input first; the lookup itself is exact.
pub fn find_unit(name: &str) -> Option<&'static UnitDefinition> {
    UNITS.get(name)
}

/// Read-only catalog of units with a name index
pub struct UnitCatalog {
    units: &'static [UnitDefinition],
    index: HashMap<&'static str, usize>,
    collisions: Vec<&'static str>,
}

impl UnitCatalog {
    pub fn new(units: &'static [UnitDefinition]) -> Self {
        let mut index = HashMap::new();
        let mut collisions = Vec::new();

        for (i, unit) in units.iter().enumerate() {
            for name in unit.recognized_names() {
                match index.get(name).copied() {
                    None => {
                        index.insert(name, i);
                    }
                    Some(existing) if existing != i => {
                        // First definition wins, as with a linear scan
                        warn!(unit_name = name, kept = units[existing].plural, dropped = unit.plural, "duplicate unit name");
                        collisions.push(name);
                    }
                    Some(_) => {}
                }
            }
        }

        debug!(units = units.len(), names = index.len(), "unit catalog ready");
        UnitCatalog { units, index, collisions }
    }

    /// Get a unit by any recognized spelling (case-sensitive)
    pub fn get(&self, name: &str) -> Option<&'static UnitDefinition> {
        let units = self.units;
        self.index.get(name).map(|&i| &units[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static UnitDefinition> {
        self.units.iter()
    }

    /// Get all units of a dimension, in catalog order
    pub fn by_dimension(&self, dimension: Dimension) -> Vec<&'static UnitDefinition> {
        self.iter().filter(|u| u.dimension() == dimension).collect()
    }

    /// Get all recognized names
    pub fn names(&self) -> Vec<&'static str> {
        self.index.keys().copied().collect()
    }

    /// Names claimed by more than one unit
    pub fn collisions(&self) -> &[&'static str] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
