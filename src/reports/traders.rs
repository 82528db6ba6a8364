//! Curated trader leaderboard dataset

use crate::reports::{parse_timestamp, top_by};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

const NEGATIVE_TAGS: [&str; 2] = ["Negative Pnl", "Bad KOL"];
const POSITIVE_TAGS: [&str; 3] = ["God Tier", "Consistent Winner", "Winning Streak"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    Strong,
    Watch,
    Avoid,
}

impl PerformanceTier {
    /// Avoid on a negative tag; strong on win rate above 50%, positive
    /// profit and a positive tag; watch otherwise.
    pub fn classify(categories: &[String], win_rate: Option<f64>, total_profit: Option<f64>) -> Self {
        let has_tag = |tags: &[&str]| categories.iter().any(|c| tags.contains(&c.as_str()));

        if has_tag(&NEGATIVE_TAGS) {
            return PerformanceTier::Avoid;
        }

        let winning = win_rate.is_some_and(|rate| rate > 50.0);
        let profitable = total_profit.is_some_and(|profit| profit > 0.0);
        if winning && profitable && has_tag(&POSITIVE_TAGS) {
            PerformanceTier::Strong
        } else {
            PerformanceTier::Watch
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceTier::Strong => "strong",
            PerformanceTier::Watch => "watch",
            PerformanceTier::Avoid => "avoid",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaderboard view selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierFilter {
    All,
    Tier(PerformanceTier),
}

impl FromStr for TierFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TierFilter::All),
            "strong" => Ok(TierFilter::Tier(PerformanceTier::Strong)),
            "watch" => Ok(TierFilter::Tier(PerformanceTier::Watch)),
            "avoid" => Ok(TierFilter::Tier(PerformanceTier::Avoid)),
            other => Err(format!("unknown tier filter: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trader {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub categories: Vec<String>,
    pub win_rate: Option<f64>,
    pub wins: Option<u64>,
    pub losses: Option<u64>,
    pub total_profit: Option<f64>,
    #[serde(default)]
    pub has_positions: bool,
    #[serde(default)]
    pub num_positions: u64,
    #[serde(default)]
    pub account_value: f64,
    #[serde(default)]
    pub unrealized_pnl: f64,
    #[serde(default)]
    pub top_coins: Vec<String>,
    pub performance_tier: PerformanceTier,
}

impl Trader {
    /// `0x1234...abcd` style abbreviation
    pub fn short_address(&self) -> String {
        let chars: Vec<char> = self.address.chars().collect();
        if chars.len() <= 10 {
            return self.address.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraderTotals {
    pub total_traders: u64,
    pub traders_with_positions: u64,
    pub total_positions: u64,
    #[serde(default)]
    pub category_counts: HashMap<String, u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TierBuckets {
    #[serde(default)]
    pub strong: Vec<Trader>,
    #[serde(default)]
    pub watch: Vec<Trader>,
    #[serde(default)]
    pub avoid: Vec<Trader>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraderSummary {
    pub generated_at: String,
    #[serde(default)]
    pub fetch_date: String,
    #[serde(default)]
    pub fetched_at: String,
    pub summary: TraderTotals,
    #[serde(default)]
    pub traders: Vec<Trader>,
    #[serde(default)]
    pub by_performance_tier: TierBuckets,
}

impl TraderSummary {
    pub fn generated_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.generated_at)
    }

    pub fn traders_for(&self, filter: TierFilter) -> &[Trader] {
        match filter {
            TierFilter::All => &self.traders,
            TierFilter::Tier(PerformanceTier::Strong) => &self.by_performance_tier.strong,
            TierFilter::Tier(PerformanceTier::Watch) => &self.by_performance_tier.watch,
            TierFilter::Tier(PerformanceTier::Avoid) => &self.by_performance_tier.avoid,
        }
    }

    /// Traders of `filter` by total profit, unknown profit last
    pub fn top_traders(&self, filter: TierFilter, limit: usize) -> Vec<&Trader> {
        top_by(self.traders_for(filter), limit, |trader| {
            trader.total_profit.unwrap_or(f64::NEG_INFINITY)
        })
    }

    /// Category tags by trader count, ties broken by name
    pub fn top_categories(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut counts: Vec<(&str, u64)> = self
            .summary
            .category_counts
            .iter()
            .map(|(category, count)| (category.as_str(), *count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts.truncate(limit);
        counts
    }

    pub fn tier_count(&self, tier: PerformanceTier) -> usize {
        self.traders_for(TierFilter::Tier(tier)).len()
    }
}
