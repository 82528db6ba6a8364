//! Unit tests for catalog reconciliation

use crate::common::{indicator, weight};
use cycle_tracker::indicators::{builtin_catalog, reconcile};
use cycle_tracker::models::Phase;
use std::collections::{BTreeMap, HashSet};

#[test]
fn test_no_overrides_keeps_catalog() {
    let catalog = builtin_catalog();
    let merged = reconcile(&catalog, &BTreeMap::new(), &HashSet::new());
    assert_eq!(merged, catalog);
}

#[test]
fn test_deleted_ids_are_filtered_and_overrides_applied() {
    let catalog = vec![
        indicator("a", Phase::RiskOn, 10),
        indicator("b", Phase::RiskOn, 20),
        indicator("c", Phase::RiskOff, 30),
        indicator("d", Phase::StayRiskOn, 40),
    ];
    let overrides = BTreeMap::from([("a".to_string(), weight(55)), ("c".to_string(), weight(0))]);
    let deleted = HashSet::from(["b".to_string()]);

    let merged = reconcile(&catalog, &overrides, &deleted);

    let ids: Vec<&str> = merged.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "d"]);
    for entry in &merged {
        let original = catalog.iter().find(|c| c.id == entry.id).unwrap();
        let expected = overrides.get(&entry.id).copied().unwrap_or(original.weight);
        assert_eq!(entry.weight, expected);
    }
}

#[test]
fn test_orphan_override_is_ignored() {
    let catalog = vec![indicator("a", Phase::RiskOn, 10)];
    let overrides = BTreeMap::from([
        ("gone".to_string(), weight(90)),
        ("custom-123".to_string(), weight(70)),
    ]);

    let merged = reconcile(&catalog, &overrides, &HashSet::new());
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].weight, weight(10));
}

#[test]
fn test_override_on_deleted_id_is_ignored() {
    let catalog = vec![indicator("a", Phase::RiskOn, 10), indicator("b", Phase::RiskOn, 20)];
    let overrides = BTreeMap::from([("a".to_string(), weight(35))]);
    let deleted = HashSet::from(["a".to_string()]);

    let merged = reconcile(&catalog, &overrides, &deleted);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].id, "b");
}
