//! Parameter table and its normalized lookup.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

use super::log::RunLog;
use super::value::ParamValue;
use crate::normalize::normalize_key;

/// Per-site mapping from trimmed parameter name to coerced value.
///
/// Preserves first-insertion order. Re-inserting a key replaces its value
/// but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParameterTable {
    entries: IndexMap<String, ParamValue>,
}

impl ParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: ParamValue) -> Option<ParamValue> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, ParamValue)> for ParameterTable {
    fn from_iter<I: IntoIterator<Item = (K, ParamValue)>>(iter: I) -> Self {
        let mut table = ParameterTable::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

/// Parameter values keyed by normalized name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookup {
    entries: IndexMap<String, ParamValue>,
}

impl Lookup {
    /// Build the lookup for a table.
    ///
    /// When two table keys normalize to the same form the later entry wins;
    /// each collision is recorded in `log`.
    pub fn build(table: &ParameterTable, log: &mut RunLog) -> Self {
        let mut entries = IndexMap::with_capacity(table.len());
        let mut origins: HashMap<String, &str> = HashMap::new();

        for (key, value) in table.iter() {
            let normalized = normalize_key(key);
            if let Some(previous) = origins.insert(normalized.clone(), key) {
                tracing::warn!(
                    "Parameters '{}' and '{}' both normalize to '{}'; keeping '{}'",
                    previous,
                    key,
                    normalized,
                    key
                );
                log.record(format!(
                    "Normalized key collision: '{previous}' and '{key}' both map to '{normalized}'; using value from '{key}'"
                ));
            }
            entries.insert(normalized, value.clone());
        }

        Self { entries }
    }

    /// Look up a raw (not yet normalized) key.
    pub fn get(&self, raw_key: &str) -> Option<&ParamValue> {
        self.entries.get(&normalize_key(raw_key))
    }

    pub fn get_normalized(&self, normalized_key: &str) -> Option<&ParamValue> {
        self.entries.get(normalized_key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
