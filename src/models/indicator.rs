//! Indicator records and their value types

use crate::indicators::error::IndicatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market-cycle stage an indicator contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "RISK-ON (Entry)")]
    RiskOn,
    #[serde(rename = "STAY RISK-ON (Hold)")]
    StayRiskOn,
    #[serde(rename = "RISK-OFF (Exit)")]
    RiskOff,
    #[serde(rename = "STAY RISK-OFF (Wait)")]
    StayRiskOff,
}

impl Phase {
    /// All phases in board display order
    pub const ALL: [Phase; 4] = [
        Phase::RiskOn,
        Phase::StayRiskOn,
        Phase::RiskOff,
        Phase::StayRiskOff,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Phase::RiskOn => "RISK-ON (Entry)",
            Phase::StayRiskOn => "STAY RISK-ON (Hold)",
            Phase::RiskOff => "RISK-OFF (Exit)",
            Phase::StayRiskOff => "STAY RISK-OFF (Wait)",
        }
    }

    /// Label without the parenthesised stage, e.g. `RISK-ON`
    pub fn short_label(&self) -> &'static str {
        match self {
            Phase::RiskOn => "RISK-ON",
            Phase::StayRiskOn => "STAY RISK-ON",
            Phase::RiskOff => "RISK-OFF",
            Phase::StayRiskOff => "STAY RISK-OFF",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Phase {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.label() == s.trim())
            .ok_or_else(|| IndicatorError::UnknownPhase(s.to_string()))
    }
}

/// Indicator weight, always within `0..=100`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct Weight(u8);

impl Weight {
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Result<Self, IndicatorError> {
        if (0..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(IndicatorError::InvalidWeight(value))
        }
    }

    /// Weight from a compile-time literal; panics when above 100.
    pub const fn percent(value: u8) -> Self {
        assert!(value <= Self::MAX, "weight must be within 0..=100");
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Weight {
    type Error = IndicatorError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl From<Weight> for u32 {
    fn from(weight: Weight) -> Self {
        weight.0 as u32
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked piece of market evidence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    pub id: String,
    pub phase: Phase,
    pub category: String,
    pub name: String,
    pub logic: String,
    pub trigger: String,
    pub weight: Weight,
    pub reliability: String,
    #[serde(default)]
    pub current_value: String,
    #[serde(default)]
    pub is_triggered: bool,
}

impl Indicator {
    /// Weight contributed to the phase score right now
    pub fn contribution(&self) -> u32 {
        if self.is_triggered {
            self.weight.into()
        } else {
            0
        }
    }

    /// Apply every field present in `update`, leaving the rest untouched
    pub fn apply(&mut self, update: IndicatorUpdate) {
        if let Some(phase) = update.phase {
            self.phase = phase;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(logic) = update.logic {
            self.logic = logic;
        }
        if let Some(trigger) = update.trigger {
            self.trigger = trigger;
        }
        if let Some(weight) = update.weight {
            self.weight = weight;
        }
        if let Some(reliability) = update.reliability {
            self.reliability = reliability;
        }
        if let Some(current_value) = update.current_value {
            self.current_value = current_value;
        }
        if let Some(is_triggered) = update.is_triggered {
            self.is_triggered = is_triggered;
        }
    }
}

/// Partial update; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reliability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_triggered: Option<bool>,
}

impl IndicatorUpdate {
    pub fn weight(weight: Weight) -> Self {
        Self {
            weight: Some(weight),
            ..Self::default()
        }
    }

    pub fn triggered(is_triggered: bool) -> Self {
        Self {
            is_triggered: Some(is_triggered),
            ..Self::default()
        }
    }

    pub fn current_value(value: impl Into<String>) -> Self {
        Self {
            current_value: Some(value.into()),
            ..Self::default()
        }
    }
}

/// Draft for a user-created indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewIndicator {
    pub category: String,
    pub name: String,
    pub logic: String,
    pub trigger: String,
    pub weight: Weight,
    pub reliability: String,
}

impl Default for NewIndicator {
    fn default() -> Self {
        Self {
            category: String::new(),
            name: String::new(),
            logic: String::new(),
            trigger: String::new(),
            weight: Weight(10),
            reliability: "B-Tier".to_string(),
        }
    }
}

impl NewIndicator {
    pub fn new(name: impl Into<String>, trigger: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            trigger: trigger.into(),
            ..Self::default()
        }
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Build the indicator, filling blank optional fields with custom defaults
    pub fn into_indicator(self, id: String, phase: Phase) -> Indicator {
        Indicator {
            id,
            phase,
            category: or_default(self.category, "Custom"),
            name: self.name,
            logic: or_default(self.logic, "User defined custom indicator"),
            trigger: self.trigger,
            weight: self.weight,
            reliability: or_default(self.reliability, "User"),
            current_value: String::new(),
            is_triggered: false,
        }
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}
