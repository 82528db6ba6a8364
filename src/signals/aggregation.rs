//! Phase-based aggregation logic

use crate::models::{Indicator, Phase};

/// Weighted score of one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseScore {
    pub phase: Phase,
    /// Sum of weights of triggered indicators
    pub score: u32,
    /// Sum of weights of all indicators in the phase
    pub total_weight: u32,
    pub count: usize,
}

/// Scores for the phases present in an indicator set, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseScores {
    scores: Vec<PhaseScore>,
}

impl PhaseScores {
    /// Build from explicit `(phase, score, total_weight)` triples
    pub fn from_totals(totals: impl IntoIterator<Item = (Phase, u32, u32)>) -> Self {
        let mut scores = Self::default();
        for (phase, score, total_weight) in totals {
            let entry = scores.entry(phase);
            entry.score += score;
            entry.total_weight += total_weight;
        }
        scores
    }

    fn entry(&mut self, phase: Phase) -> &mut PhaseScore {
        let index = match self.scores.iter().position(|s| s.phase == phase) {
            Some(index) => index,
            None => {
                self.scores.push(PhaseScore {
                    phase,
                    score: 0,
                    total_weight: 0,
                    count: 0,
                });
                self.scores.len() - 1
            }
        };
        &mut self.scores[index]
    }

    pub fn get(&self, phase: Phase) -> Option<&PhaseScore> {
        self.scores.iter().find(|s| s.phase == phase)
    }

    /// Score of `phase`, 0 when the phase has no indicators
    pub fn score_of(&self, phase: Phase) -> u32 {
        self.get(phase).map(|s| s.score).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhaseScore> {
        self.scores.iter()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Aggregate indicators into per-phase scores
pub struct Aggregator;

impl Aggregator {
    /// Group by phase; only phases that have indicators appear.
    pub fn aggregate_by_phase(indicators: &[Indicator]) -> PhaseScores {
        let mut scores = PhaseScores::default();
        for indicator in indicators {
            let entry = scores.entry(indicator.phase);
            entry.score += indicator.contribution();
            entry.total_weight += u32::from(indicator.weight);
            entry.count += 1;
        }
        scores
    }
}

/// Shorthand for [`Aggregator::aggregate_by_phase`]
pub fn score(indicators: &[Indicator]) -> PhaseScores {
    Aggregator::aggregate_by_phase(indicators)
}
