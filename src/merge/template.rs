//! Recursive override of template leaves.

use serde_json::Value;

use super::node::{is_scalar, Node};
use crate::domain::{display_json, Lookup, RunLog};

/// Merge `lookup` into a deep copy of `template`, leaving the input intact.
pub fn merge_template(template: &Value, lookup: &Lookup, log: &mut RunLog) -> Value {
    let mut merged = template.clone();
    apply_overrides(&mut merged, lookup, log);
    merged
}

/// Walk `node` in place, replacing scalar leaves whose key matches the lookup.
///
/// Named parameters match on their `name` and always descend into `value`.
/// Other mappings match on field names; a matching field that holds a
/// mapping or sequence is descended into, never replaced.
pub fn apply_overrides(node: &mut Value, lookup: &Lookup, log: &mut RunLog) {
    match Node::classify(node) {
        Node::Named { name, fields } => {
            let Some(value) = fields.get_mut("value") else {
                return;
            };
            if let Some(new_value) = lookup.get(&name) {
                if is_scalar(value) {
                    let old_value = std::mem::replace(value, new_value.to_json());
                    log.record(format!(
                        "Updated parameter '{}' from {} to {}",
                        name,
                        display_json(&old_value),
                        new_value
                    ));
                }
            }
            apply_overrides(value, lookup, log);
        }
        Node::Mapping(fields) => {
            for (key, value) in fields.iter_mut() {
                match lookup.get(key) {
                    Some(new_value) if is_scalar(value) => {
                        let old_value = std::mem::replace(value, new_value.to_json());
                        log.record(format!(
                            "Updated key '{}' from {} to {}",
                            key,
                            display_json(&old_value),
                            new_value
                        ));
                    }
                    _ => apply_overrides(value, lookup, log),
                }
            }
        }
        Node::Sequence(items) => {
            for item in items.iter_mut() {
                apply_overrides(item, lookup, log);
            }
        }
        Node::Scalar => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ParamValue, ParameterTable};
    use serde_json::json;

    fn lookup(entries: Vec<(&str, ParamValue)>) -> Lookup {
        let table: ParameterTable = entries.into_iter().collect();
        Lookup::build(&table, &mut RunLog::new())
    }

    #[test]
    fn replaces_named_parameter_values() {
        let lookup = lookup(vec![
            ("Foo Bar", ParamValue::Bool(true)),
            ("AIF_Enabled", ParamValue::from("1")),
        ]);
        let template = json!([
            {"name": "Foo Bar", "value": "x"},
            {"name": "AIF_Enabled", "value": 0}
        ]);
        let mut log = RunLog::new();

        let merged = merge_template(&template, &lookup, &mut log);

        assert_eq!(
            merged,
            json!([
                {"name": "Foo Bar", "value": true},
                {"name": "AIF_Enabled", "value": "1"}
            ])
        );
        assert!(log.contains("Updated parameter 'Foo Bar' from x to true"));
        assert!(log.contains("Updated parameter 'AIF_Enabled' from 0 to 1"));
    }

    #[test]
    fn leaves_the_input_template_untouched() {
        let lookup = lookup(vec![("port", ParamValue::Int(80))]);
        let template = json!({"port": 1});
        let merged = merge_template(&template, &lookup, &mut RunLog::new());
        assert_eq!(template, json!({"port": 1}));
        assert_eq!(merged, json!({"port": 80}));
    }

    #[test]
    fn replaces_generic_mapping_fields_by_normalized_name() {
        let lookup = lookup(vec![("N3 Port", ParamValue::Int(2152)), ("mtu", ParamValue::Int(9000))]);
        let template = json!({"n3_port": 0, "nested": {"MTU": null, "other": "keep"}});
        let mut log = RunLog::new();

        let merged = merge_template(&template, &lookup, &mut log);

        assert_eq!(merged, json!({"n3_port": 2152, "nested": {"MTU": 9000, "other": "keep"}}));
        assert!(log.contains("Updated key 'n3_port' from 0 to 2152"));
        assert!(log.contains("Updated key 'MTU' from null to 9000"));
    }

    #[test]
    fn never_replaces_containers() {
        let lookup = lookup(vec![
            ("servers", ParamValue::from("flat")),
            ("config", ParamValue::from("flat")),
            ("host", ParamValue::from("10.0.0.1")),
        ]);
        let template = json!({
            "servers": [{"host": "a"}],
            "params": [{"name": "config", "value": {"host": "b"}}]
        });

        let merged = merge_template(&template, &lookup, &mut RunLog::new());

        assert_eq!(
            merged,
            json!({
                "servers": [{"host": "10.0.0.1"}],
                "params": [{"name": "config", "value": {"host": "10.0.0.1"}}]
            })
        );
    }

    #[test]
    fn named_parameter_other_fields_are_not_matched() {
        let lookup = lookup(vec![("type", ParamValue::from("changed"))]);
        let template = json!([{"name": "x", "value": 1, "type": "int"}]);
        let merged = merge_template(&template, &lookup, &mut RunLog::new());
        assert_eq!(merged, template);
    }

    #[test]
    fn named_value_replaced_then_descended() {
        let lookup = lookup(vec![("Outer", ParamValue::Int(5))]);
        let template = json!({"name": "Outer", "value": "old"});
        let mut log = RunLog::new();
        let merged = merge_template(&template, &lookup, &mut log);
        assert_eq!(merged, json!({"name": "Outer", "value": 5}));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn unmatched_template_is_unchanged_and_silent() {
        let lookup = lookup(vec![("absent", ParamValue::Int(1))]);
        let template = json!({"a": [1, 2, {"b": "c"}], "d": null});
        let mut log = RunLog::new();
        let merged = merge_template(&template, &lookup, &mut log);
        assert_eq!(merged, template);
        assert!(log.is_empty());
    }

    #[test]
    fn merging_is_deterministic() {
        let lookup = lookup(vec![("a", ParamValue::Float(1.5)), ("b", ParamValue::from("x"))]);
        let template = json!([{"name": "A", "value": 0}, {"b": 0, "c": {"a": 2}}]);
        let first = merge_template(&template, &lookup, &mut RunLog::new());
        let second = merge_template(&template, &lookup, &mut RunLog::new());
        assert_eq!(
            serde_json::to_string(&first).expect("json"),
            serde_json::to_string(&second).expect("json")
        );
    }
}
