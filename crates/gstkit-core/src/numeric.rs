//! # Numeric Utilities
//!
//! Shared coercion, parsing, and rounding helpers.
//!
//! The engine receives its numeric input from free-text form fields, so
//! every arithmetic path is defensive: a missing or malformed operand is
//! coerced to 0 rather than letting `NaN` leak into a document total.

/// Outcome of parsing a raw form field as a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ParsedNumber {
    /// The field was empty (after trimming).
    Empty,
    /// A finite numeric value.
    Value(f64),
    /// Non-empty input that does not parse as a finite number.
    Invalid,
}

/// Parses a raw form input as a number.
///
/// Whitespace is trimmed first. Values that parse but are not finite
/// (`NaN`, `inf`) are treated as invalid, never as numbers.
pub(crate) fn parse_number(input: &str) -> ParsedNumber {
    let input = input.trim();
    if input.is_empty() {
        return ParsedNumber::Empty;
    }
    match input.parse::<f64>() {
        Ok(v) if v.is_finite() => ParsedNumber::Value(v),
        _ => ParsedNumber::Invalid,
    }
}

/// Coerces a possibly-NaN operand to a usable number.
///
/// `NaN` and infinities become 0 so they can never propagate into
/// totals. Ordinary negative values pass through unchanged (credit-note
/// style lines are legitimate).
#[inline]
pub(crate) fn coerce(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// Rounds a grand total to the nearest whole currency unit.
///
/// Uses round-half-away-from-zero: `100.5` → `101`, `-100.5` → `-101`.
/// This is the documented tie-breaking rule for the ticket round-off;
/// `f64::round` implements it exactly.
#[inline]
pub fn round_to_unit(v: f64) -> f64 {
    v.round()
}
