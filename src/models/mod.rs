//! Shared data models spanning the tracker layers.

pub mod indicator;

pub use indicator::{Indicator, IndicatorUpdate, NewIndicator, Phase, Weight};
