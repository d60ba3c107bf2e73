use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Key under which authoring tools store custom input metadata.
pub const CUSTOM_PROPS_KEY: &str = "customProps";

/// Declared input parameter of a workflow.
///
/// Beyond the identifier and display copy, definitions are opaque to the
/// editors; everything else is kept as raw JSON so metadata can be looked up
/// by path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputDefinition {
    /// Identifier used as the key into a job's `inputs`.
    pub id: String,
    /// Optional human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Descriptive copy shown under the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared type, kept verbatim (string or structured type).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<JsonValue>,
    /// Custom authoring metadata (categories, tool hints, ...).
    #[serde(rename = "customProps", default, skip_serializing_if = "JsonValue::is_null")]
    pub custom_props: JsonValue,
    /// Remaining keys of the definition.
    #[serde(flatten)]
    pub extra: IndexMap<String, JsonValue>,
}

impl InputDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            description: None,
            r#type: None,
            custom_props: JsonValue::Null,
            extra: IndexMap::new(),
        }
    }

    /// Returns the label when present, otherwise the identifier.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    /// Resolves the JSON root for a top-level metadata key.
    ///
    /// `customProps` maps to the custom metadata; any other key is looked up
    /// among the remaining raw keys.
    pub fn metadata_root(&self, key: &str) -> Option<&JsonValue> {
        if key == CUSTOM_PROPS_KEY {
            return (!self.custom_props.is_null()).then_some(&self.custom_props);
        }
        self.extra.get(key)
    }
}

/// Input definitions sharing one category key, in first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputGroup {
    pub name: String,
    pub inputs: Vec<InputDefinition>,
}
