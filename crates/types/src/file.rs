use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// File or directory descriptor edited by the file input inspector.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileReference {
    /// Location of the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Inline file contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
    /// Free-form metadata attached to the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IndexMap<String, JsonValue>>,
    /// Files that travel alongside the primary file (indexes, headers, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_files: Option<Vec<SecondaryFile>>,
}

/// Secondary file entry. Only the path is meaningful to the editors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecondaryFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl SecondaryFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: Some(path.into()) }
    }
}
