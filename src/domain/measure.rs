//! Numeric input normalization for lengths, heights, coverage and price.
//!
//! A measure is either a finite, non-negative number or unset (`None`).
//! Anything else coming from user input is collapsed to unset so it can
//! never leak into totals as zero or NaN.

/// Parse raw text into a measure. Blank or malformed input is unset.
pub fn parse_measure(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    normalize_measure(trimmed.parse::<f64>().ok())
}

/// Drop values that are not a usable measure (NaN, infinite, negative).
pub fn normalize_measure(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}
