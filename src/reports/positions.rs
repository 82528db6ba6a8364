//! Derivatives position summary dataset

use crate::reports::{parse_timestamp, top_by};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSummary {
    pub generated_at: String,
    #[serde(default)]
    pub fetch_date: String,
    #[serde(default)]
    pub fetched_at: String,
    pub summary: PositionTotals,
    #[serde(default)]
    pub by_coin: Vec<CoinAggregate>,
    #[serde(default)]
    pub risk_distribution: HashMap<String, u64>,
    #[serde(default)]
    pub top_positions: Vec<TopPosition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionTotals {
    pub total_users: u64,
    pub users_with_positions: u64,
    pub users_without_positions: u64,
    pub total_positions: u64,
    pub total_position_value: f64,
    pub avg_positions_per_user: f64,
}

/// Per-coin aggregate across all tracked accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinAggregate {
    pub coin: String,
    pub count: u64,
    pub total_value: f64,
    pub longs: u64,
    pub shorts: u64,
    pub long_short_ratio: f64,
    #[serde(default)]
    pub longs_total_size: f64,
    #[serde(default)]
    pub shorts_total_size: f64,
    #[serde(default)]
    pub long_short_size_ratio: f64,
    #[serde(default)]
    pub longs_unrealized_pnl: f64,
    #[serde(default)]
    pub shorts_unrealized_pnl: f64,
    pub total_unrealized_pnl: f64,
    #[serde(default)]
    pub total_margin_used: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionDirection {
    Long,
    Short,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPosition {
    pub user_address: String,
    pub coin: String,
    pub direction: PositionDirection,
    pub size: f64,
    pub position_value: f64,
    pub unrealized_pnl: f64,
    pub entry_price: f64,
    pub risk_level: String,
    #[serde(default)]
    pub margin_used: f64,
}

impl PositionSummary {
    pub fn generated_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.generated_at)
    }

    /// Coins by total position value, largest first
    pub fn top_coins(&self, limit: usize) -> Vec<&CoinAggregate> {
        top_by(&self.by_coin, limit, |coin| coin.total_value)
    }

    /// Positions by absolute notional, largest first
    pub fn top_positions(&self, limit: usize) -> Vec<&TopPosition> {
        top_by(&self.top_positions, limit, |position| {
            position.position_value.abs()
        })
    }

    /// Share of positions at `risk_level`, in percent
    pub fn risk_share(&self, risk_level: &str) -> f64 {
        let total: u64 = self.risk_distribution.values().sum();
        let count = self.risk_distribution.get(risk_level).copied().unwrap_or(0);
        count as f64 / total.max(1) as f64 * 100.0
    }
}
