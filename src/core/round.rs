//! Purpose: Round floats to a fixed number of decimal places.
//! Exports: `round_to`.
//! Invariants: Rounding is exact on the binary value; exact ties go to the even digit.
//! Invariants: Non-finite inputs are returned unchanged.

/// Rounds `value` to `digits` decimal places.
///
/// Formatting with an explicit precision is correctly rounded with ties to
/// even, so parsing the formatted text back gives the nearest representable
/// float to the decimal result. `round_to(2.5, 0)` is `2.0`, and
/// `round_to(0.125, 2)` is `0.12` because `0.125` is an exact binary tie.
pub fn round_to(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if digits == 0 {
        return value.round_ties_even();
    }
    format!("{value:.digits$}").parse().unwrap_or(value)
}
