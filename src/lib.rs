//! Cycle Tracker
//!
//! Manual Bitcoin market-cycle indicator tracking: a static indicator catalog
//! reconciled with locally persisted weight overrides and deletions, per-phase
//! weighted scoring, and a recommendation policy on top of the scores.

pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod reports;
pub mod signals;
pub mod store;

pub use config::Config;
pub use indicators::{IndicatorError, IndicatorRegistry};
pub use models::{Indicator, IndicatorUpdate, NewIndicator, Phase, Weight};
pub use signals::{BoardSummary, Recommendation};
pub use store::{FileMedium, MemoryMedium, OverrideStore, PersistedOverrideStore, StoreError};
