//! Unit tests for the recommendation policy

use cycle_tracker::models::Phase;
use cycle_tracker::signals::{recommend, PhaseScores, PhaseThresholds, Recommendation};

fn scores(entries: &[(Phase, u32)]) -> PhaseScores {
    PhaseScores::from_totals(entries.iter().map(|(phase, score)| (*phase, *score, 100)))
}

#[test]
fn test_exit_takes_priority_over_entry() {
    let result = recommend(&scores(&[(Phase::RiskOff, 80), (Phase::RiskOn, 90)]));
    assert_eq!(result, Recommendation::SellHedge);
}

#[test]
fn test_each_phase_fires_above_threshold() {
    let cases = [
        (Phase::RiskOff, Recommendation::SellHedge),
        (Phase::RiskOn, Recommendation::Buy),
        (Phase::StayRiskOn, Recommendation::Hold),
        (Phase::StayRiskOff, Recommendation::WaitCash),
    ];
    for (phase, expected) in cases {
        let threshold = PhaseThresholds::get(phase);
        assert_eq!(recommend(&scores(&[(phase, threshold + 1)])), expected);
        assert_eq!(
            recommend(&scores(&[(phase, threshold)])),
            Recommendation::Neutral,
            "{} at exactly {} must not fire",
            phase,
            threshold
        );
    }
}

#[test]
fn test_entry_beats_hold_and_hold_beats_wait() {
    let result = recommend(&scores(&[
        (Phase::StayRiskOff, 90),
        (Phase::StayRiskOn, 90),
        (Phase::RiskOn, 66),
    ]));
    assert_eq!(result, Recommendation::Buy);

    let result = recommend(&scores(&[(Phase::StayRiskOff, 90), (Phase::StayRiskOn, 51)]));
    assert_eq!(result, Recommendation::Hold);
}

#[test]
fn test_missing_phases_are_neutral() {
    assert_eq!(recommend(&PhaseScores::default()), Recommendation::Neutral);
    assert_eq!(
        recommend(&scores(&[(Phase::RiskOff, 75), (Phase::RiskOn, 65)])),
        Recommendation::Neutral
    );
}

#[test]
fn test_labels() {
    assert_eq!(Recommendation::SellHedge.to_string(), "SELL / HEDGE");
    assert_eq!(Recommendation::Buy.label(), "BUY");
    assert_eq!(Recommendation::Hold.label(), "HOLD");
    assert_eq!(Recommendation::WaitCash.label(), "WAIT / CASH");
    assert_eq!(Recommendation::Neutral.label(), "NEUTRAL");
    assert_eq!(
        serde_json::to_string(&Recommendation::WaitCash).unwrap(),
        "\"WAIT / CASH\""
    );
}
