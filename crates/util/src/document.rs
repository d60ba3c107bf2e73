//! Loading of job, file and input definition documents from disk.
//!
//! Documents are JSON or YAML; the format is chosen from the file extension
//! (`.json`, `.yaml`, `.yml`).

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// Error surfaced when a document cannot be read or parsed.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// I/O failure (for example, a missing file or permissions).
    #[error("document I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON payload.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    /// Malformed YAML payload.
    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The extension does not name a supported format.
    #[error("unsupported document extension for '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedExtension(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Determines the document format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(DocumentError::UnsupportedExtension(path.display().to_string())),
        }
    }

    /// Parses `text` in this format.
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, DocumentError> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }
}

/// Reads and deserializes the document at `path`.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    let format = DocumentFormat::from_path(path)?;
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), ?format, "loading document");
    format.parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use composer_types::{InputDefinition, JobDocument};
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn loads_json_job() {
        let file = write_temp(".json", r#"{ "inputs": { "threads": 4 } }"#);
        let job: JobDocument = load_document(file.path()).expect("load job");
        assert_eq!(job.input("threads"), Some(&serde_json::json!(4)));
    }

    #[test]
    fn loads_yaml_input_list() {
        let file = write_temp(
            ".yml",
            r#"
- id: reads
  customProps:
    "sbg:category": Inputs
- id: threads
"#,
        );
        let inputs: Vec<InputDefinition> = load_document(file.path()).expect("load inputs");
        let ids = inputs.iter().map(|input| input.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["reads", "threads"]);
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = write_temp(".txt", "{}");
        let error = load_document::<JobDocument>(file.path()).expect_err("unsupported extension");
        assert!(matches!(error, DocumentError::UnsupportedExtension(_)));
    }

    #[test]
    fn reports_malformed_json() {
        let file = write_temp(".json", "{ inputs: ");
        let error = load_document::<JobDocument>(file.path()).expect_err("malformed json");
        assert!(matches!(error, DocumentError::Json(_)));
    }
}
