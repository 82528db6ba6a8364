//! Board evaluation: phase scores plus the recommendation derived from them.

use crate::models::{Indicator, Phase};
use crate::signals::aggregation::{Aggregator, PhaseScores};
use crate::signals::decision::{recommend, Recommendation};
use crate::signals::scoring::fill_percentage;
use serde::Serialize;

/// Display stats of one phase
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseStats {
    pub phase: Phase,
    pub count: usize,
    pub score: u32,
    pub total_weight: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSummary {
    pub phases: Vec<PhaseStats>,
    pub recommendation: Recommendation,
}

impl BoardSummary {
    pub fn phase(&self, phase: Phase) -> Option<&PhaseStats> {
        self.phases.iter().find(|stats| stats.phase == phase)
    }

    /// Phases with a non-zero score
    pub fn active_scores(&self) -> Vec<(Phase, u32)> {
        self.phases
            .iter()
            .filter(|stats| stats.score > 0)
            .map(|stats| (stats.phase, stats.score))
            .collect()
    }

    pub fn scores(&self) -> PhaseScores {
        PhaseScores::from_totals(
            self.phases
                .iter()
                .map(|stats| (stats.phase, stats.score, stats.total_weight)),
        )
    }
}

impl Default for BoardSummary {
    fn default() -> Self {
        Self {
            phases: Vec::new(),
            recommendation: Recommendation::Neutral,
        }
    }
}

pub struct SignalEngine;

impl SignalEngine {
    /// Score the indicators and derive the recommendation
    pub fn evaluate(indicators: &[Indicator]) -> BoardSummary {
        let scores = Aggregator::aggregate_by_phase(indicators);
        let recommendation = recommend(&scores);

        let phases = scores
            .iter()
            .map(|s| PhaseStats {
                phase: s.phase,
                count: s.count,
                score: s.score,
                total_weight: s.total_weight,
                percentage: fill_percentage(s.score, s.total_weight),
            })
            .collect();

        BoardSummary {
            phases,
            recommendation,
        }
    }
}
