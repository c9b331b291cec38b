//! Unitconv - natural-language unit conversion
//!
//! Turns phrases like "5 kilometers to miles" into a converted value.
//! One line goes through parse, unit lookup, validation and conversion,
//! and comes back as either a result line or a user-facing error line.

mod error;
mod parser;
mod render;
mod session;

pub use error::{ConvertError, ParseError};
pub use parser::{parse, ParsedRequest};
pub use render::format_number;
pub use session::{Session, SessionConfig, State, EXIT_COMMAND, PROMPT};

use serde::Serialize;
use tracing::debug;
use unitconv_units::{convert, find_unit, Dimension, UnitDefinition};

/// A successful conversion, ready to be printed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub quantity: f64,
    pub value: f64,
    pub from: &'static UnitDefinition,
    pub to: &'static UnitDefinition,
}

/// Parse, resolve, validate and convert one input line
pub fn dispatch(line: &str) -> Result<ConversionResult, ConvertError> {
    let request = parse(line).inspect_err(|e| debug!(error = %e, "parse failed"))?;
    debug!(quantity = request.quantity, from = %request.from, to = %request.to, "parsed request");

    let (from, to) = match (find_unit(&request.from), find_unit(&request.to)) {
        (Some(from), Some(to)) if from.is_compatible(to) => (from, to),
        (from, to) => return Err(ConvertError::Impossible { from, to }),
    };

    let dimension = from.dimension();
    if request.quantity < 0.0 {
        match dimension {
            Dimension::Distance => return Err(ConvertError::NegativeLength),
            Dimension::Weight => return Err(ConvertError::NegativeWeight),
            Dimension::Temperature => {}
        }
    }

    let value = convert(request.quantity, from, to)?;
    debug!(%dimension, value, "converted");

    Ok(ConversionResult {
        quantity: request.quantity,
        value,
        from,
        to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv_units::UNITS;

    fn message(line: &str) -> String {
        match dispatch(line) {
            Ok(result) => result.to_string(),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn test_dispatch_linear() {
        let result = dispatch("5 kilometers to miles").unwrap();
        assert_eq!(result.from.abbreviation, "km");
        assert_eq!(result.to.abbreviation, "mi");
        assert_eq!(result.value, 5.0 * 1000.0 / 1609.35);
    }

    #[test]
    fn test_dispatch_temperature_allows_negative() {
        let result = dispatch("-40 degrees celsius to degrees fahrenheit").unwrap();
        assert_eq!(result.value, -40.0);
        assert_eq!(message("-40 c to f"), "-40.0 degrees celsius is -40.0 degrees fahrenheit");
    }

    #[test]
    fn test_dispatch_parse_failure() {
        assert_eq!(
            dispatch("abc kg to lb"),
            Err(ConvertError::Parse(ParseError::InvalidQuantity("abc".to_string())))
        );
    }

    #[test]
    fn test_dispatch_number_spellings() {
        assert_eq!(message("nan km to m"), "Parse error");
        assert_eq!(message("inf km to m"), "Parse error");
        assert_eq!(message("5d kg to g"), "5.0 kilograms is 5000.0 grams");
        assert_eq!(message("5f kg to g"), "5.0 kilograms is 5000.0 grams");
        assert_eq!(message("0x1p3 kg to g"), "8.0 kilograms is 8000.0 grams");
        assert_eq!(message("Infinity m to cm"), "Infinity meters is Infinity centimeters");
    }

    #[test]
    fn test_dispatch_unknown_sides() {
        assert_eq!(message("5 foo to bar"), "Conversion from ??? to ??? is impossible");
        assert_eq!(message("5 foo to lb"), "Conversion from ??? to pounds is impossible");
        assert_eq!(message("5 lb to bar"), "Conversion from pounds to ??? is impossible");
    }

    #[test]
    fn test_unknown_side_checked_before_negativity() {
        assert_eq!(message("-5 kg to bar"), "Conversion from kilograms to ??? is impossible");
    }

    #[test]
    fn test_dimension_mismatch_never_converts() {
        for a in UNITS.iter() {
            for b in UNITS.iter() {
                if a.dimension() == b.dimension() {
                    continue;
                }
                let line = format!("1 {} to {}", a.abbreviation, b.abbreviation);
                assert_eq!(
                    dispatch(&line),
                    Err(ConvertError::Impossible { from: Some(a), to: Some(b) }),
                    "{line}"
                );
            }
        }
    }

    #[test]
    fn test_negative_linear_rejected() {
        for unit in UNITS.iter().filter(|u| u.dimension().is_linear()) {
            let line = format!("-0.5 {} to {}", unit.abbreviation, unit.abbreviation);
            let expected = match unit.dimension() {
                Dimension::Distance => ConvertError::NegativeLength,
                _ => ConvertError::NegativeWeight,
            };
            assert_eq!(dispatch(&line), Err(expected), "{line}");
        }
        assert_eq!(message("-3 kg to lb"), "Weight shouldn't be negative");
        assert_eq!(message("-3 km to mi"), "Length shouldn't be negative");
    }

    #[test]
    fn test_negative_temperature_converts() {
        for unit in UNITS.by_dimension(Dimension::Temperature) {
            let line = format!("-10 {} to {}", unit.abbreviation, unit.abbreviation);
            assert_eq!(dispatch(&line).unwrap().value, -10.0, "{line}");
        }
    }

    #[test]
    fn test_labels_singular_on_exact_one() {
        assert_eq!(message("1 foot to inches"), "1.0 foot is 12.000000000000002 inches");
        assert_eq!(message("1000 g to kg"), "1000.0 grams is 1.0 kilogram");
        assert_eq!(message("1 k to kelvins"), "1.0 kelvin is 1.0 kelvin");
    }

    #[test]
    fn test_result_serializes() {
        let json = serde_json::to_value(dispatch("1000 g to kg").unwrap()).unwrap();
        assert_eq!(json["value"], 1.0);
        assert_eq!(json["from"]["singular"], "gram");
        assert_eq!(json["to"]["measure"]["dimension"], "weight");
    }
}
