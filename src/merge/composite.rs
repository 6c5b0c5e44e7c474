//! Injection of unmodeled overrides into composite sections.
//!
//! Some template objects (e.g. `chartValues.UmIdpConfig`) accept settings
//! that have no named-parameter node to match against. Every lookup entry
//! whose normalized key carries the section prefix is added to the object
//! unless the object already has that key.

use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::domain::{CompositeRule, Lookup, RunLog};
use crate::normalize::normalize_key;

/// Add lookup entries starting with the normalized `prefix` to `target`.
///
/// Keys are inserted in normalized form. Existing keys are compared in
/// normalized form too and are never overwritten. Returns the number of
/// keys added.
pub fn merge_into_composite(
    target: &mut Map<String, Value>,
    prefix: &str,
    lookup: &Lookup,
    log: &mut RunLog,
) -> usize {
    let normalized_prefix = normalize_key(prefix);
    let existing: HashSet<String> = target.keys().map(|k| normalize_key(k)).collect();

    let mut added = 0;
    for (key, value) in lookup.iter() {
        if key.starts_with(&normalized_prefix) && !existing.contains(key) {
            target.insert(key.to_string(), value.to_json());
            log.record(format!(
                "Merged key '{key}' into composite section under prefix '{prefix}': {value}"
            ));
            added += 1;
        }
    }
    added
}

/// Apply every rule to a template whose root is a sequence of named entries.
///
/// Templates with any other root shape have no composite sections.
pub fn apply_composite_rules(
    template: &mut Value,
    rules: &[CompositeRule],
    lookup: &Lookup,
    log: &mut RunLog,
) -> usize {
    let Value::Array(entries) = template else {
        return 0;
    };

    let mut added = 0;
    for rule in rules {
        for entry in entries.iter_mut() {
            if let Some(target) = composite_target(entry, rule) {
                added += merge_into_composite(target, &rule.prefix, lookup, log);
            }
        }
    }
    added
}

fn composite_target<'a>(
    entry: &'a mut Value,
    rule: &CompositeRule,
) -> Option<&'a mut Map<String, Value>> {
    let fields = entry.as_object_mut()?;
    if fields.get("name").and_then(Value::as_str) != Some(rule.section.as_str()) {
        return None;
    }
    fields.get_mut("value")?.as_object_mut()?.get_mut(&rule.object)?.as_object_mut()
}
