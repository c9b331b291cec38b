//! Per-line errors
//!
//! Every error here ends one read-convert-print cycle and nothing more.
//! `Display` of [`ConvertError`] is the exact line shown to the user.

use thiserror::Error;
use unitconv_units::{ConversionError, UnitDefinition};

/// Why a line could not be read as a conversion phrase
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty input")]
    MissingQuantity,

    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("unsupported phrase shape: {0} words")]
    UnsupportedShape(usize),

    #[error("five-word phrase without \"degree\" in second or fourth position")]
    MissingDegreeWord,
}

/// Outcome of a cycle that produced no conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Parse error")]
    Parse(#[from] ParseError),

    /// Unknown unit on either side, or units of different dimensions
    #[error("Conversion from {} to {} is impossible", plural_or_unknown(.from), plural_or_unknown(.to))]
    Impossible {
        from: Option<&'static UnitDefinition>,
        to: Option<&'static UnitDefinition>,
    },

    #[error("Length shouldn't be negative")]
    NegativeLength,

    #[error("Weight shouldn't be negative")]
    NegativeWeight,

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

fn plural_or_unknown(unit: &Option<&'static UnitDefinition>) -> &'static str {
    match unit {
        Some(unit) => unit.plural,
        None => "???",
    }
}
