use crate::indicators::error::IndicatorError;
use crate::models::{Phase, Weight};

/// Parse a weight typed into an edit field.
///
/// Accepts a base-10 integer, surrounding whitespace ignored. Text with
/// a fractional or trailing part (`"50.5"`, `"50abc"`) is rejected rather
/// than truncated to its leading digits.
pub fn parse_weight(value: &str) -> Result<Weight, IndicatorError> {
    let trimmed = value.trim();
    let parsed = trimmed
        .parse::<i64>()
        .map_err(|_| IndicatorError::InvalidNumericFormat(value.to_string()))?;
    Weight::new(parsed)
}

pub fn parse_phase(value: &str) -> Result<Phase, IndicatorError> {
    value.parse()
}
