//! Session indicator registry with write-through persistence

use crate::indicators::catalog::default_weight;
use crate::indicators::parser::parse_weight;
use crate::indicators::reconciler::reconcile;
use crate::indicators::validation::validate_new_indicator;
use crate::models::{Indicator, IndicatorUpdate, NewIndicator, Phase, Weight};
use crate::signals::engine::{BoardSummary, SignalEngine};
use crate::store::OverrideStore;
use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, info, warn};

pub const CUSTOM_ID_PREFIX: &str = "custom-";

/// In-memory indicators of the current session.
///
/// Weight edits and deletions are written through to the override store
/// immediately. Store write faults are logged; the in-memory state stays
/// authoritative for the rest of the session. The board summary is
/// recomputed after every mutation.
pub struct IndicatorRegistry<S: OverrideStore> {
    indicators: Vec<Indicator>,
    store: S,
    /// Every id held during this session, including removed ones
    issued_ids: HashSet<String>,
    summary: BoardSummary,
}

impl<S: OverrideStore> IndicatorRegistry<S> {
    /// Create an empty registry
    pub fn new(store: S) -> Self {
        Self {
            indicators: Vec::new(),
            store,
            issued_ids: HashSet::new(),
            summary: BoardSummary::default(),
        }
    }

    /// Reconcile `catalog` with the stored overrides and start a session
    pub fn load(catalog: &[Indicator], store: S) -> Self {
        let overrides = store.get_weight_overrides();
        let deleted = store.get_deleted_ids();
        let indicators = reconcile(catalog, &overrides, &deleted);

        info!(
            live = indicators.len(),
            deleted = deleted.len(),
            customized = overrides.len(),
            "Loaded indicator registry"
        );

        let mut registry = Self::new(store);
        registry.issued_ids = indicators.iter().map(|i| i.id.clone()).collect();
        registry.indicators = indicators;
        registry.refresh();
        registry
    }

    /// Append an indicator. Id uniqueness is the caller's responsibility.
    pub fn add(&mut self, indicator: Indicator) {
        debug!(id = %indicator.id, phase = %indicator.phase, "Adding indicator");
        self.issued_ids.insert(indicator.id.clone());
        self.indicators.push(indicator);
        self.refresh();
    }

    /// Apply a partial update to every indicator with `id`.
    ///
    /// Returns `false` (and changes nothing) when `id` is not live. A new
    /// weight is also saved as an override.
    pub fn update(&mut self, id: &str, update: IndicatorUpdate) -> bool {
        if self.position(id).is_none() {
            debug!(id = id, "Update for unknown indicator ignored");
            return false;
        }

        if let Some(weight) = update.weight {
            if let Err(e) = self.store.set_weight_override(id, weight) {
                warn!(error = %e, id = id, weight = weight.value(), "Failed to persist weight override");
            }
        }

        for indicator in self.indicators.iter_mut().filter(|i| i.id == id) {
            indicator.apply(update.clone());
        }
        self.refresh();
        true
    }

    /// Remove every indicator with `id` and mark it deleted in the store.
    ///
    /// Returns the first removed entry. The deleted marker is written even
    /// when `id` is not live.
    pub fn remove(&mut self, id: &str) -> Option<Indicator> {
        let (removed, kept): (Vec<Indicator>, Vec<Indicator>) = std::mem::take(&mut self.indicators)
            .into_iter()
            .partition(|indicator| indicator.id == id);
        self.indicators = kept;

        if let Err(e) = self.store.add_deleted_id(id) {
            warn!(error = %e, id = id, "Failed to persist indicator deletion");
        }

        self.refresh();
        removed.into_iter().next()
    }

    /// Create a user indicator in `phase` from `draft`.
    ///
    /// Returns the generated id, or `None` when name or trigger is blank.
    pub fn create_custom(&mut self, phase: Phase, draft: NewIndicator) -> Option<String> {
        if let Err(e) = validate_new_indicator(&draft) {
            debug!(error = %e, "Custom indicator rejected");
            return None;
        }

        let id = self.next_custom_id();
        self.add(draft.into_indicator(id.clone(), phase));
        Some(id)
    }

    /// Apply a weight typed into an edit field.
    ///
    /// Invalid input is rejected without touching the indicator or the
    /// store. Returns the weight now in effect, `None` if `id` is not live.
    pub fn apply_weight_input(&mut self, id: &str, input: &str) -> Option<Weight> {
        let current = self.get(id)?.weight;
        match parse_weight(input) {
            Ok(weight) => {
                self.update(id, IndicatorUpdate::weight(weight));
                Some(weight)
            }
            Err(e) => {
                debug!(error = %e, id = id, "Rejected weight input");
                Some(current)
            }
        }
    }

    pub fn set_triggered(&mut self, id: &str, is_triggered: bool) -> bool {
        self.update(id, IndicatorUpdate::triggered(is_triggered))
    }

    pub fn set_current_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        self.update(id, IndicatorUpdate::current_value(value))
    }

    /// Drop the stored override of `id` and restore its catalog default.
    ///
    /// Indicators absent from `catalog` keep their current weight.
    pub fn reset_weight(&mut self, id: &str, catalog: &[Indicator]) -> Option<Weight> {
        let position = self.position(id)?;
        let current = self.indicators[position].weight;

        if let Err(e) = self.store.clear_weight_override(id) {
            warn!(error = %e, id = id, "Failed to clear weight override");
        }

        let weight = default_weight(catalog, id).unwrap_or(current);
        for indicator in self.indicators.iter_mut().filter(|i| i.id == id) {
            indicator.weight = weight;
        }
        self.refresh();
        Some(weight)
    }

    /// Clear the deleted marker of `id` and bring the catalog entry back.
    ///
    /// Returns `true` when an indicator was re-added.
    pub fn restore(&mut self, id: &str, catalog: &[Indicator]) -> bool {
        if let Err(e) = self.store.clear_deleted_id(id) {
            warn!(error = %e, id = id, "Failed to clear deleted marker");
        }

        if self.position(id).is_some() {
            return false;
        }

        let Some(entry) = catalog.iter().find(|indicator| indicator.id == id) else {
            return false;
        };

        let mut entry = entry.clone();
        if let Some(weight) = self.store.get_weight_overrides().get(id) {
            entry.weight = *weight;
        }
        self.add(entry);
        true
    }

    /// Clear every deleted marker and re-add missing catalog entries.
    pub fn restore_all(&mut self, catalog: &[Indicator]) -> usize {
        if let Err(e) = self.store.clear_all_deleted_ids() {
            warn!(error = %e, "Failed to clear deleted markers");
        }

        let overrides = self.store.get_weight_overrides();
        let missing: Vec<Indicator> = catalog
            .iter()
            .filter(|indicator| self.position(&indicator.id).is_none())
            .cloned()
            .collect();

        let restored = missing.len();
        for mut entry in missing {
            if let Some(weight) = overrides.get(&entry.id) {
                entry.weight = *weight;
            }
            self.issued_ids.insert(entry.id.clone());
            self.indicators.push(entry);
        }

        self.refresh();
        restored
    }

    pub fn get(&self, id: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|indicator| indicator.id == id)
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn by_phase(&self, phase: Phase) -> impl Iterator<Item = &Indicator> {
        self.indicators
            .iter()
            .filter(move |indicator| indicator.phase == phase)
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    pub fn is_weight_customized(&self, id: &str) -> bool {
        self.store.is_weight_customized(id)
    }

    /// Board summary as of the last mutation
    pub fn summary(&self) -> &BoardSummary {
        &self.summary
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.indicators.iter().position(|indicator| indicator.id == id)
    }

    fn refresh(&mut self) {
        self.summary = SignalEngine::evaluate(&self.indicators);
    }

    fn next_custom_id(&self) -> String {
        let mut stamp = Utc::now().timestamp_millis();
        loop {
            let id = format!("{}{}", CUSTOM_ID_PREFIX, stamp);
            if !self.issued_ids.contains(&id) && self.position(&id).is_none() {
                return id;
            }
            stamp += 1;
        }
    }
}
