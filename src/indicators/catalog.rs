//! Static indicator catalog

use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_catalog;
use crate::models::{Indicator, Phase, Weight};
use std::fs;
use std::path::Path;
use tracing::info;

#[allow(clippy::too_many_arguments)]
fn builtin(
    id: &str,
    phase: Phase,
    category: &str,
    name: &str,
    logic: &str,
    trigger: &str,
    weight: u8,
    reliability: &str,
) -> Indicator {
    Indicator {
        id: id.to_string(),
        phase,
        category: category.to_string(),
        name: name.to_string(),
        logic: logic.to_string(),
        trigger: trigger.to_string(),
        weight: Weight::percent(weight),
        reliability: reliability.to_string(),
        current_value: String::new(),
        is_triggered: false,
    }
}

/// The built-in indicators, in display order
pub fn builtin_catalog() -> Vec<Indicator> {
    vec![
        builtin(
            "ro-1",
            Phase::RiskOn,
            "Technical Indicators",
            "Daily RSI Divergence",
            "Price makes a lower low, but momentum (RSI) makes a higher low.",
            "Daily RSI < 30 then creates Higher Low while price is making a lower low",
            10,
            "B-Tier",
        ),
        builtin(
            "ro-2",
            Phase::RiskOn,
            "Correlation",
            "Outperform S&P500",
            "Daily Bitcoin price when outperform against the S&P 500 price, it shows liquidity is moving into crypto",
            "Daily Bitcoin price > S&P 500 price consecutively in the last 3 days",
            15,
            "B-Tier",
        ),
        builtin(
            "ro-3",
            Phase::RiskOn,
            "Sentiment",
            "Crypto F&G Index",
            "Fear and Greed Index when show at extreme levels <20 or >75 implies crypto market is oversold or overbought",
            "When Fear and Greed Index <20 for more than 1 month, it's a signal that Bitcoin is over sold",
            5,
            "B-Tier",
        ),
        builtin(
            "ro-4",
            Phase::RiskOn,
            "Correlation",
            "MSTR Outperform S&P500",
            "Daily MSTR price when outperform against the S&P 500 price, it shows liquidity is moving into crypto",
            "Daily MSTR price > S&P 500 price consecutively in the last 3 days",
            20,
            "S-Tier",
        ),
        builtin(
            "roff-1",
            Phase::RiskOff,
            "Technical Indicators",
            "Weekly RSI Divergence",
            "Weekly RSI Divergence",
            "Weekly RSI > 70 then creates lower high while price is making a higher high",
            20,
            "S-Tier",
        ),
    ]
}

/// Load a catalog from a JSON array of indicators
pub fn load_catalog(path: &Path) -> Result<Vec<Indicator>, IndicatorError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| IndicatorError::CatalogUnreadable(format!("{}: {}", path.display(), e)))?;
    let catalog: Vec<Indicator> = serde_json::from_str(&raw)
        .map_err(|e| IndicatorError::CatalogUnreadable(format!("{}: {}", path.display(), e)))?;

    validate_catalog(&catalog)?;
    info!(path = %path.display(), indicators = catalog.len(), "Loaded indicator catalog");
    Ok(catalog)
}

/// Catalog default weight for `id`, if the catalog knows it
pub fn default_weight(catalog: &[Indicator], id: &str) -> Option<Weight> {
    catalog
        .iter()
        .find(|indicator| indicator.id == id)
        .map(|indicator| indicator.weight)
}
