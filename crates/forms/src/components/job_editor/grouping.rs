//! Grouping of input definitions by category for display.

use composer_types::{InputDefinition, InputGroup};
use composer_util::{get_property, locale_compare, scalar_key};
use indexmap::IndexMap;

use crate::config::EditorConfig;

/// Reads the category key of `definition` from `config.category_path`.
///
/// The first path segment names a metadata root of the definition
/// (`customProps` or any raw key); the rest is walked inside it. Missing
/// metadata, missing keys and non-scalar values all fall back to
/// `config.default_category`.
pub fn category_key(definition: &InputDefinition, config: &EditorConfig) -> String {
    let (root, rest) = config
        .category_path
        .split_once('.')
        .unwrap_or((config.category_path.as_str(), ""));
    definition
        .metadata_root(root)
        .and_then(|value| get_property(value, rest))
        .and_then(scalar_key)
        .unwrap_or_else(|| config.default_category.clone())
}

/// Partitions `inputs` into one group per category key.
///
/// Groups are ordered by locale comparison of their names; members keep the
/// order in which they appear in `inputs`.
pub fn group_inputs(inputs: &[InputDefinition], config: &EditorConfig) -> Vec<InputGroup> {
    let mut grouped: IndexMap<String, Vec<InputDefinition>> = IndexMap::new();
    for definition in inputs {
        grouped
            .entry(category_key(definition, config))
            .or_default()
            .push(definition.clone());
    }

    let mut groups = grouped
        .into_iter()
        .map(|(name, inputs)| InputGroup { name, inputs })
        .collect::<Vec<_>>();
    groups.sort_by(|left, right| locale_compare(&left.name, &right.name));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(id: &str, category: Option<&str>) -> InputDefinition {
        let mut definition = InputDefinition::new(id);
        if let Some(category) = category {
            definition.custom_props = json!({ "sbg:category": category });
        }
        definition
    }

    fn names(groups: &[InputGroup]) -> Vec<&str> {
        groups.iter().map(|group| group.name.as_str()).collect()
    }

    fn ids(group: &InputGroup) -> Vec<&str> {
        group.inputs.iter().map(|input| input.id.as_str()).collect()
    }

    #[test]
    fn missing_metadata_is_uncategorized() {
        let config = EditorConfig::default();
        assert_eq!(category_key(&input("threads", None), &config), "Uncategorized");

        let mut empty_props = InputDefinition::new("flag");
        empty_props.custom_props = json!({});
        assert_eq!(category_key(&empty_props, &config), "Uncategorized");

        let mut structured = InputDefinition::new("odd");
        structured.custom_props = json!({ "sbg:category": ["A"] });
        assert_eq!(category_key(&structured, &config), "Uncategorized");
    }

    #[test]
    fn groups_sorted_and_members_stable() {
        let inputs = vec![input("b1", Some("B")), input("a1", Some("A")), input("a2", Some("A"))];
        let groups = group_inputs(&inputs, &EditorConfig::default());

        assert_eq!(names(&groups), vec!["A", "B"]);
        assert_eq!(ids(&groups[0]), vec!["a1", "a2"]);
        assert_eq!(ids(&groups[1]), vec!["b1"]);
    }

    #[test]
    fn group_order_is_locale_aware() {
        let inputs = vec![input("x", None), input("y", Some("advanced")), input("z", Some("Basic"))];
        let groups = group_inputs(&inputs, &EditorConfig::default());
        assert_eq!(names(&groups), vec!["advanced", "Basic", "Uncategorized"]);
    }

    #[test]
    fn accented_categories_sort_by_base_letter() {
        let inputs = vec![
            input("f", Some("Filters")),
            input("e", Some("Éditions")),
            input("a", Some("Alignment")),
        ];
        let groups = group_inputs(&inputs, &EditorConfig::default());
        assert_eq!(names(&groups), vec!["Alignment", "Éditions", "Filters"]);
    }

    #[test]
    fn honours_configured_path_and_default() {
        let config = EditorConfig {
            category_path: "sbg:toolDefaultGroup".to_string(),
            default_category: "Other".to_string(),
        };
        let mut grouped = InputDefinition::new("reads");
        grouped.extra.insert("sbg:toolDefaultGroup".to_string(), json!("Files"));

        let groups = group_inputs(&[grouped, input("threads", Some("Ignored"))], &config);
        assert_eq!(names(&groups), vec!["Files", "Other"]);
    }

    #[test]
    fn empty_list_yields_no_groups() {
        assert!(group_inputs(&[], &EditorConfig::default()).is_empty());
    }
}
