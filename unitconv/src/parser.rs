//! Conversion phrase parser
//!
//! Purely positional: the word count picks the shape, fixed positions
//! give the unit names. The separator word ("to") is never checked.
//!
//! Shapes:
//! - `<num> <from> to <to>`
//! - `<num> degree(s) <from> to <to>`
//! - `<num> <from> to degree(s) <to>`
//! - `<num> <word> <from> to <word> <to>`

use crate::error::ParseError;

/// Quantity and lowercased unit names read from one line
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    pub quantity: f64,
    pub from: String,
    pub to: String,
}

/// Parse one input line
pub fn parse(input: &str) -> Result<ParsedRequest, ParseError> {
    let words: Vec<&str> = input.split_whitespace().collect();

    // The quantity is checked before the shape
    let first = words.first().ok_or(ParseError::MissingQuantity)?;
    let quantity = parse_quantity(first).ok_or_else(|| ParseError::InvalidQuantity(first.to_string()))?;

    let (from, to) = match words.as_slice() {
        [_, from, _, to] => (from, to),
        [_, _, from, _, _, to] => (from, to),
        [_, degree, from, _, to] if is_degree_word(degree) => (from, to),
        [_, from, _, degree, to] if is_degree_word(degree) => (from, to),
        [_, _, _, _, _] => return Err(ParseError::MissingDegreeWord),
        other => return Err(ParseError::UnsupportedShape(other.len())),
    };

    Ok(ParsedRequest {
        quantity,
        from: from.to_lowercase(),
        to: to.to_lowercase(),
    })
}

fn is_degree_word(word: &str) -> bool {
    word.eq_ignore_ascii_case("degree") || word.eq_ignore_ascii_case("degrees")
}

/// Read a quantity token.
///
/// Accepts an optional sign followed by exactly `NaN`, exactly `Infinity`,
/// a decimal `digits[.digits][(e|E)[sign]digits]` or a hex float
/// `0x<hex>[.<hex>](p|P)[sign]digits`. Decimal and hex forms may carry one
/// trailing `d`, `D`, `f` or `F`. Lowercase `nan`, `inf` and `infinity`
/// are not numbers here.
fn parse_quantity(token: &str) -> Option<f64> {
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let magnitude = match rest {
        "NaN" => f64::NAN,
        "Infinity" => f64::INFINITY,
        _ => {
            let body = rest
                .strip_suffix(|c: char| matches!(c, 'd' | 'D' | 'f' | 'F'))
                .unwrap_or(rest);
            match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
                Some(hex) => parse_hex(hex)?,
                None if is_decimal(body) => body.parse().ok()?,
                None => return None,
            }
        }
    };

    Some(if negative { -magnitude } else { magnitude })
}

fn is_decimal(body: &str) -> bool {
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits_ok = whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit())
        && !(whole.is_empty() && fraction.is_empty());
    digits_ok && exponent.map_or(true, is_exponent)
}

fn is_exponent(exponent: &str) -> bool {
    let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

// Binary exponents past this already overflow or underflow any mantissa
const MAX_BINARY_EXPONENT: i64 = 5000;

fn parse_hex(hex: &str) -> Option<f64> {
    let (significand, exponent) = hex.split_once(['p', 'P'])?;
    if !is_exponent(exponent) {
        return None;
    }
    let (whole, fraction) = significand.split_once('.').unwrap_or((significand, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut mantissa = 0.0_f64;
    for c in whole.chars().chain(fraction.chars()) {
        mantissa = mantissa * 16.0 + f64::from(c.to_digit(16)?);
    }

    // Out-of-range exponents only need to keep their sign
    let exponent: i64 = exponent.parse().unwrap_or(if exponent.starts_with('-') {
        -MAX_BINARY_EXPONENT
    } else {
        MAX_BINARY_EXPONENT
    });
    let fraction_bits = 4 * fraction.len() as i64;
    let mut shift = (exponent - fraction_bits).clamp(-MAX_BINARY_EXPONENT, MAX_BINARY_EXPONENT) as i32;

    while shift != 0 && mantissa != 0.0 && mantissa.is_finite() {
        let step = shift.clamp(-1000, 1000);
        mantissa *= 2.0_f64.powi(step);
        shift -= step;
    }
    Some(mantissa)
}
