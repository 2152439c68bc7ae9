//! Deep merge of layered YAML configuration.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely (reviewer presets do not accumulate)
//! - Null values in the overlay delete the corresponding key from the base
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::Value;

/// Deep merge two YAML values; `overlay` wins at the point of conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Copy of `value` with every null mapping entry removed.
///
/// A layer validated on its own still uses nulls to delete keys from the
/// layers below it, so those entries carry no settings of their own.
pub fn without_nulls(value: &Value) -> Value {
    match value {
        Value::Mapping(map) => Value::Mapping(
            map.iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), without_nulls(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Merge layers in order (first is the base, last has highest priority).
///
/// Empty layers (`null`, e.g. from an empty file) change nothing.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .filter(|config| !config.is_null())
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn project_layer_overrides_user_layer() {
        let user = yaml("remote: origin\nenable_reviewers: true");
        let project = yaml("remote: gerrit");

        let result = deep_merge(&user, &project);

        assert_eq!(result["remote"], "gerrit");
        assert_eq!(result["enable_reviewers"], true);
    }

    #[test]
    fn sequences_are_replaced_not_merged() {
        let base = yaml("reviewer_presets: [alice, bob]");
        let overlay = yaml("reviewer_presets: [carol]");

        let result = deep_merge(&base, &overlay);
        let presets = result["reviewer_presets"].as_sequence().unwrap();

        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0], "carol");
    }

    #[test]
    fn null_removes_inherited_value() {
        let base = yaml("default_branch: develop\nremote: gerrit");
        let overlay = yaml("default_branch: null");

        let result = deep_merge(&base, &overlay);

        assert!(result.get("default_branch").is_none());
        assert_eq!(result["remote"], "gerrit");
    }

    #[test]
    fn merge_configs_applies_layers_in_order() {
        let configs = vec![
            yaml("remote: a\ndefault_branch: main"),
            yaml("remote: b"),
            yaml("remote: c\ncompact_remote_url: true"),
        ];

        let result = merge_configs(&configs);

        assert_eq!(result["remote"], "c");
        assert_eq!(result["default_branch"], "main");
        assert_eq!(result["compact_remote_url"], true);
    }

    #[test]
    fn empty_layer_changes_nothing() {
        let configs = vec![yaml("remote: gerrit"), Value::Null];

        let result = merge_configs(&configs);

        assert_eq!(result["remote"], "gerrit");
    }

    #[test]
    fn merge_of_nothing_is_an_empty_mapping() {
        let result = merge_configs(&[]);
        assert!(result.as_mapping().unwrap().is_empty());
    }

    #[test]
    fn without_nulls_drops_deletion_markers() {
        let layer = yaml("remote: gerrit\ndefault_branch: null\nreviewer_presets: [alice]");
        assert_eq!(
            without_nulls(&layer),
            yaml("remote: gerrit\nreviewer_presets: [alice]")
        );
    }
}
