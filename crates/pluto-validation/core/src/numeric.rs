//! Numeric validation functions

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

// Optional sign, digits, optional fraction. No exponents, no "inf"/"NaN".
static DECIMAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)$").unwrap()
});

/// Parses a base-10 integer with nothing else around it
///
/// Values outside the `i64` range are rejected.
pub fn parse_integer(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

/// Parses a number in plain decimal notation, with or without a fraction
///
/// Digit strings too long for an `f64` are rejected rather than read as
/// infinity.
pub fn parse_decimal(text: &str) -> Option<f64> {
    if !DECIMAL_REGEX.is_match(text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Validates minimum value for numeric types
pub fn validate_min<T: PartialOrd>(value: T, min: T) -> bool {
    value >= min
}

/// Validates maximum value for numeric types
pub fn validate_max<T: PartialOrd>(value: T, max: T) -> bool {
    value <= max
}

/// Orders an integer against a bound without rounding either side
///
/// `None` only for a NaN bound.
pub fn compare_integer(value: i64, bound: f64) -> Option<Ordering> {
    if bound.is_nan() {
        return None;
    }

    let floor = bound.floor();
    // saturating cast; every finite floor inside the i64 range converts exactly
    let whole = floor as i128;
    match i128::from(value).cmp(&whole) {
        Ordering::Equal if bound > floor => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

/// A parsed field value that can be checked against `f64` bounds
pub trait Bounded: Copy {
    fn at_least(self, min: f64) -> bool;
    fn at_most(self, max: f64) -> bool;
}

impl Bounded for i64 {
    fn at_least(self, min: f64) -> bool {
        matches!(compare_integer(self, min), Some(Ordering::Greater | Ordering::Equal))
    }

    fn at_most(self, max: f64) -> bool {
        matches!(compare_integer(self, max), Some(Ordering::Less | Ordering::Equal))
    }
}

impl Bounded for f64 {
    fn at_least(self, min: f64) -> bool {
        validate_min(self, min)
    }

    fn at_most(self, max: f64) -> bool {
        validate_max(self, max)
    }
}
