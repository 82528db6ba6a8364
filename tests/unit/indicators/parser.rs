//! Unit tests for edit-field parsing

use cycle_tracker::indicators::{parse_phase, parse_weight, IndicatorError};
use cycle_tracker::models::Phase;

#[test]
fn test_parse_weight_valid() {
    assert_eq!(parse_weight("0").unwrap().value(), 0);
    assert_eq!(parse_weight(" 55 ").unwrap().value(), 55);
    assert_eq!(parse_weight("100").unwrap().value(), 100);
}

#[test]
fn test_parse_weight_out_of_range() {
    assert_eq!(parse_weight("101").unwrap_err(), IndicatorError::InvalidWeight(101));
    assert_eq!(parse_weight("-5").unwrap_err(), IndicatorError::InvalidWeight(-5));
}

#[test]
fn test_parse_weight_non_numeric() {
    assert!(matches!(
        parse_weight("abc"),
        Err(IndicatorError::InvalidNumericFormat(_))
    ));
    assert!(matches!(
        parse_weight(""),
        Err(IndicatorError::InvalidNumericFormat(_))
    ));
    assert!(matches!(
        parse_weight("12.5"),
        Err(IndicatorError::InvalidNumericFormat(_))
    ));
}

#[test]
fn test_parse_phase_labels() {
    assert_eq!(parse_phase("RISK-ON (Entry)").unwrap(), Phase::RiskOn);
    assert_eq!(parse_phase("STAY RISK-OFF (Wait)").unwrap(), Phase::StayRiskOff);
    assert!(matches!(
        parse_phase("SIDEWAYS"),
        Err(IndicatorError::UnknownPhase(_))
    ));

    for phase in Phase::ALL {
        assert_eq!(parse_phase(phase.label()).unwrap(), phase);
    }
}

#[test]
fn test_parse_weight_rejects_partial_numbers() {
    for input in ["50.5", "50abc", "1e2"] {
        assert_eq!(
            parse_weight(input),
            Err(IndicatorError::InvalidNumericFormat(input.to_string()))
        );
    }
}
