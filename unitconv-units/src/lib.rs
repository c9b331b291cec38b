//! Unitconv Units - unit catalog and conversion arithmetic
//!
//! Provides the static table of known units and the arithmetic that
//! converts quantities between them.
//!
//! Categories:
//! - Weight (g, kg, mg, lb, oz), base unit gram
//! - Distance (m, km, cm, mm, mi, yd, ft, in), base unit meter
//! - Temperature (C, F, K), pairwise affine formulas

mod dimension;
mod unit;
mod units;
mod convert;

pub use dimension::{Dimension, TemperatureScale};
pub use unit::{UnitDefinition, Measure, ConversionError};
pub use units::{UNITS, UnitCatalog, find_unit};
pub use convert::{convert, scale, convert_temperature};
