//! Persisted weight overrides and deleted-indicator markers
//!
//! Two independent records live in the storage medium:
//! - `crypto-tracker-weights`: JSON object, indicator id -> integer weight
//! - `crypto-tracker-deleted`: JSON array of indicator ids
//!
//! Reads are best effort: a missing, unreadable or corrupt record reads as
//! empty and the fault is only logged.

use crate::models::Weight;
use crate::store::error::{StoreError, StoreResult};
use crate::store::medium::StorageMedium;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

pub const WEIGHTS_KEY: &str = "crypto-tracker-weights";
pub const DELETED_KEY: &str = "crypto-tracker-deleted";

/// Port for the override state the registry and reconciler depend on
pub trait OverrideStore {
    /// All stored weight overrides; empty on missing or corrupt data
    fn get_weight_overrides(&self) -> BTreeMap<String, Weight>;

    fn set_weight_override(&mut self, id: &str, weight: Weight) -> StoreResult<()>;

    /// Remove one override; no-op when absent
    fn clear_weight_override(&mut self, id: &str) -> StoreResult<()>;

    fn clear_all_weight_overrides(&mut self) -> StoreResult<()>;

    /// Ids removed from the working registry; empty on missing or corrupt data
    fn get_deleted_ids(&self) -> HashSet<String>;

    /// Mark `id` deleted (idempotent) and drop any weight override it had
    fn add_deleted_id(&mut self, id: &str) -> StoreResult<()>;

    fn clear_deleted_id(&mut self, id: &str) -> StoreResult<()>;

    fn clear_all_deleted_ids(&mut self) -> StoreResult<()>;

    fn is_weight_customized(&self, id: &str) -> bool {
        self.get_weight_overrides().contains_key(id)
    }
}

/// Override store encoding both collections as JSON in a storage medium
#[derive(Debug, Clone, Default)]
pub struct PersistedOverrideStore<M: StorageMedium> {
    medium: M,
}

impl<M: StorageMedium> PersistedOverrideStore<M> {
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Parse the record under `key`, `None` when absent or unusable
    fn read_json(&self, key: &str) -> Option<Value> {
        let raw = match self.medium.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, key = key, medium = self.medium.name(), "Failed to read override record");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, key = key, "Corrupt override record, treating as empty");
                None
            }
        }
    }

    fn write_json(&mut self, key: &str, value: &Value) -> StoreResult<()> {
        let payload = serde_json::to_string(value).map_err(|source| StoreError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.medium.write(key, &payload)
    }

    fn deleted_list(&self) -> Vec<String> {
        match self.read_json(DELETED_KEY) {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(id) => Some(id),
                    other => {
                        warn!(entry = %other, "Skipping non-string deleted id");
                        None
                    }
                })
                .collect(),
            Some(other) => {
                warn!(kind = json_kind(&other), "Deleted record is not an array, treating as empty");
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    fn write_deleted(&mut self, ids: Vec<String>) -> StoreResult<()> {
        let value = Value::Array(ids.into_iter().map(Value::String).collect());
        self.write_json(DELETED_KEY, &value)
    }

    fn write_weights(&mut self, weights: &BTreeMap<String, Weight>) -> StoreResult<()> {
        let map: Map<String, Value> = weights
            .iter()
            .map(|(id, weight)| (id.clone(), Value::from(weight.value())))
            .collect();
        self.write_json(WEIGHTS_KEY, &Value::Object(map))
    }
}

impl<M: StorageMedium> OverrideStore for PersistedOverrideStore<M> {
    fn get_weight_overrides(&self) -> BTreeMap<String, Weight> {
        let map = match self.read_json(WEIGHTS_KEY) {
            Some(Value::Object(map)) => map,
            Some(other) => {
                warn!(kind = json_kind(&other), "Weights record is not an object, treating as empty");
                return BTreeMap::new();
            }
            None => return BTreeMap::new(),
        };

        map.into_iter()
            .filter_map(|(id, value)| match weight_from_json(&value) {
                Some(weight) => Some((id, weight)),
                None => {
                    warn!(id = %id, entry = %value, "Skipping invalid weight override");
                    None
                }
            })
            .collect()
    }

    fn set_weight_override(&mut self, id: &str, weight: Weight) -> StoreResult<()> {
        let mut weights = self.get_weight_overrides();
        weights.insert(id.to_string(), weight);
        self.write_weights(&weights)?;
        debug!(id = id, weight = weight.value(), "Saved weight override");
        Ok(())
    }

    fn clear_weight_override(&mut self, id: &str) -> StoreResult<()> {
        let mut weights = self.get_weight_overrides();
        weights.remove(id);
        self.write_weights(&weights)
    }

    fn clear_all_weight_overrides(&mut self) -> StoreResult<()> {
        self.medium.remove(WEIGHTS_KEY)
    }

    fn get_deleted_ids(&self) -> HashSet<String> {
        self.deleted_list().into_iter().collect()
    }

    fn add_deleted_id(&mut self, id: &str) -> StoreResult<()> {
        let mut deleted = self.deleted_list();
        let marked = if deleted.iter().any(|existing| existing == id) {
            Ok(())
        } else {
            deleted.push(id.to_string());
            self.write_deleted(deleted)
        };

        // The stale override goes even if the marker write failed
        let cleaned = self.clear_weight_override(id);
        debug!(id = id, "Marked indicator deleted");
        marked.and(cleaned)
    }

    fn clear_deleted_id(&mut self, id: &str) -> StoreResult<()> {
        let deleted: Vec<String> = self
            .deleted_list()
            .into_iter()
            .filter(|existing| existing != id)
            .collect();
        self.write_deleted(deleted)
    }

    fn clear_all_deleted_ids(&mut self) -> StoreResult<()> {
        self.medium.remove(DELETED_KEY)
    }
}

fn weight_from_json(value: &Value) -> Option<Weight> {
    let raw = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    })?;
    Weight::new(raw).ok()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
