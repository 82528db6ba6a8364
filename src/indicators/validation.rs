use crate::indicators::error::IndicatorError;
use crate::models::{Indicator, NewIndicator};
use std::collections::HashSet;

/// Catalog ids must be unique and names/triggers non-empty
pub fn validate_catalog(catalog: &[Indicator]) -> Result<(), IndicatorError> {
    let mut seen = HashSet::new();
    for indicator in catalog {
        if !seen.insert(indicator.id.as_str()) {
            return Err(IndicatorError::DuplicateId(indicator.id.clone()));
        }
        validate_required(&indicator.name, "name")?;
        validate_required(&indicator.trigger, "trigger")?;
    }
    Ok(())
}

pub fn validate_new_indicator(draft: &NewIndicator) -> Result<(), IndicatorError> {
    validate_required(&draft.name, "name")?;
    validate_required(&draft.trigger, "trigger")?;
    Ok(())
}

fn validate_required(value: &str, field: &str) -> Result<(), IndicatorError> {
    if value.trim().is_empty() {
        return Err(IndicatorError::MissingField(field.to_string()));
    }
    Ok(())
}
