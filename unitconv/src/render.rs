//! Result line rendering
//!
//! Numbers are printed the way a JVM `Double` prints: shortest round-trip
//! digits, always at least one fractional digit, and scientific notation
//! outside `[1e-3, 1e7)`.

use std::fmt;
use crate::ConversionResult;

const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

/// Format a number for display
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        // Debug keeps the trailing ".0" on whole numbers
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{}E{}", mantissa, exponent),
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is {} {}",
            format_number(self.quantity),
            self.from.label_for(self.quantity),
            format_number(self.value),
            self.to.label_for(self.value),
        )
    }
}
