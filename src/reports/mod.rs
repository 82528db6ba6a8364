//! Read-only auxiliary datasets: derivatives position summaries and curated
//! trader leaderboards. Consumed as display data only.

pub mod error;
pub mod positions;
pub mod traders;

pub use error::ReportError;
pub use positions::{CoinAggregate, PositionDirection, PositionSummary, PositionTotals, TopPosition};
pub use traders::{PerformanceTier, TierBuckets, TierFilter, Trader, TraderSummary, TraderTotals};

use chrono::{DateTime, NaiveDateTime};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load and parse a dataset file
pub fn load_report<T: DeserializeOwned>(path: &Path) -> Result<T, ReportError> {
    let raw = fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let report = serde_json::from_str(&raw).map_err(|source| ReportError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), "Loaded report dataset");
    Ok(report)
}

/// Parse a generation timestamp, with or without offset
pub(crate) fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Rank `items` by `key` descending and keep the first `limit`
pub(crate) fn top_by<T, F>(items: &[T], limit: usize, key: F) -> Vec<&T>
where
    F: Fn(&T) -> f64,
{
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| key(b).total_cmp(&key(a)));
    ranked.truncate(limit);
    ranked
}
