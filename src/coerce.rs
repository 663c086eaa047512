//! Coordinate coercion at the API boundary.
//!
//! Two policies are offered. [`coerce_int`] reproduces the permissive legacy
//! behavior: text is read like `parseInt(text, 10)` and anything unreadable
//! becomes NaN, which later degrades into invisible geometry. [`parse_coord`]
//! is strict and reports a diagnostic instead.

use crate::errors::CoordError;
use crate::types::CoordArg;

/// Read the leading decimal integer of `text`.
///
/// Leading whitespace and a single sign are accepted; reading stops at the
/// first non-digit. Text without any leading digit yields NaN.
pub fn coerce_int(text: &str) -> f64 {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return f64::NAN;
    }

    // Long digit runs saturate in f64 instead of overflowing.
    let value: f64 = rest[..digits].parse().unwrap_or(f64::NAN);
    if negative { -value } else { value }
}

/// Strictly parse `text` as a finite number.
///
/// `name` identifies the argument in the diagnostic (e.g. `"x1"`).
pub fn parse_coord(name: &'static str, text: &str) -> Result<f64, CoordError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CoordError::invalid_number(name, text)),
    }
}

impl CoordArg<'_> {
    /// Lenient coercion: numbers pass through, text goes through [`coerce_int`].
    pub fn coerce(self) -> f64 {
        match self {
            CoordArg::Number(value) => value,
            CoordArg::Text(text) => coerce_int(text),
        }
    }

    /// Strict coercion: numbers pass through (if finite), text goes through
    /// [`parse_coord`].
    pub fn parse(self, name: &'static str) -> Result<f64, CoordError> {
        match self {
            CoordArg::Number(value) if value.is_finite() => Ok(value),
            CoordArg::Number(value) => Err(CoordError::invalid_number(name, &value.to_string())),
            CoordArg::Text(text) => parse_coord(name, text),
        }
    }
}
