//! Session start-up merge of the static catalog with persisted overrides

use crate::models::{Indicator, Weight};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Merge `catalog` with the stored overrides.
///
/// Entries whose id is in `deleted` are dropped; survivors take their
/// override weight when one exists and keep the catalog default otherwise.
/// Catalog order is preserved. Overrides for ids not in the surviving
/// catalog have no effect.
pub fn reconcile(
    catalog: &[Indicator],
    overrides: &BTreeMap<String, Weight>,
    deleted: &HashSet<String>,
) -> Vec<Indicator> {
    let merged: Vec<Indicator> = catalog
        .iter()
        .filter(|indicator| !deleted.contains(&indicator.id))
        .map(|indicator| {
            let mut indicator = indicator.clone();
            if let Some(weight) = overrides.get(&indicator.id) {
                indicator.weight = *weight;
            }
            indicator
        })
        .collect();

    debug!(
        catalog = catalog.len(),
        overrides = overrides.len(),
        deleted = deleted.len(),
        live = merged.len(),
        "Reconciled indicator catalog"
    );

    merged
}
