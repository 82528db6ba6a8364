//! Unit tests for the position summary dataset

use cycle_tracker::reports::{load_report, PositionDirection, PositionSummary, ReportError};
use std::io::Write;

const REPORT: &str = r#"{
  "generated_at": "2025-11-02T08:15:30.123456",
  "fetch_date": "2025-11-02",
  "fetched_at": "2025-11-02T08:10:00Z",
  "summary": {
    "total_users": 120,
    "users_with_positions": 80,
    "users_without_positions": 40,
    "total_positions": 300,
    "total_position_value": 12500000.5,
    "avg_positions_per_user": 3.75
  },
  "by_coin": [
    {"coin": "ETH", "count": 90, "total_value": 3000000.0, "longs": 50, "shorts": 40,
     "long_short_ratio": 1.25, "total_unrealized_pnl": -1200.0},
    {"coin": "BTC", "count": 120, "total_value": 8000000.0, "longs": 80, "shorts": 40,
     "long_short_ratio": 2.0, "total_unrealized_pnl": 55000.0},
    {"coin": "SOL", "count": 90, "total_value": 1500000.0, "longs": 30, "shorts": 60,
     "long_short_ratio": 0.5, "total_unrealized_pnl": 300.0}
  ],
  "risk_distribution": {"low": 150, "medium": 100, "high": 50},
  "top_positions": [
    {"user_address": "0xaaa", "coin": "BTC", "direction": "LONG", "size": 10.0,
     "position_value": 700000.0, "unrealized_pnl": 5000.0, "entry_price": 69000.0,
     "risk_level": "low"},
    {"user_address": "0xbbb", "coin": "ETH", "direction": "SHORT", "size": -400.0,
     "position_value": -950000.0, "unrealized_pnl": -800.0, "entry_price": 2400.0,
     "risk_level": "high"},
    {"user_address": "0xccc", "coin": "SOL", "direction": "FLAT", "size": 0.0,
     "position_value": 1000.0, "unrealized_pnl": 0.0, "entry_price": 150.0,
     "risk_level": "medium"}
  ]
}"#;

fn report() -> PositionSummary {
    serde_json::from_str(REPORT).unwrap()
}

#[test]
fn test_parses_dataset() {
    let report = report();
    assert_eq!(report.summary.total_users, 120);
    assert_eq!(report.by_coin.len(), 3);
    assert_eq!(report.by_coin[0].longs_total_size, 0.0);
    assert_eq!(report.top_positions[0].direction, PositionDirection::Long);
    assert_eq!(report.top_positions[2].direction, PositionDirection::Unknown);
}

#[test]
fn test_generated_at_without_offset() {
    let generated = report().generated_at().unwrap();
    assert_eq!(generated.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-11-02 08:15:30");
}

#[test]
fn test_top_coins_by_value() {
    let report = report();
    let coins: Vec<&str> = report.top_coins(2).iter().map(|c| c.coin.as_str()).collect();
    assert_eq!(coins, vec!["BTC", "ETH"]);
    assert_eq!(report.top_coins(10).len(), 3);
}

#[test]
fn test_top_positions_by_absolute_value() {
    let report = report();
    let top = report.top_positions(2);
    assert_eq!(top[0].user_address, "0xbbb");
    assert_eq!(top[1].user_address, "0xaaa");
}

#[test]
fn test_risk_share() {
    let report = report();
    assert_eq!(report.risk_share("low"), 50.0);
    assert_eq!(report.risk_share("extreme"), 0.0);

    let mut empty = report.clone();
    empty.risk_distribution.clear();
    assert_eq!(empty.risk_share("low"), 0.0);
}

#[test]
fn test_load_report_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(REPORT.as_bytes()).unwrap();

    let loaded: PositionSummary = load_report(file.path()).unwrap();
    assert_eq!(loaded.summary.total_positions, 300);
}

#[test]
fn test_load_report_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = load_report::<PositionSummary>(&dir.path().join("missing.json"));
    assert!(matches!(missing, Err(ReportError::Io { .. })));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"generated_at\": 5}").unwrap();
    let broken = load_report::<PositionSummary>(file.path());
    assert!(matches!(broken, Err(ReportError::Parse { .. })));
}
