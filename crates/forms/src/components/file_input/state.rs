use composer_types::{FileReference, SecondaryFile};

/// Flat field values of the file input form.
///
/// Secondary files are held as plain path strings; the full object shape is
/// only rebuilt when the value leaves the form (see
/// [`FileInputFormValue::into_file_reference`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInputFormValue {
    pub path: Option<String>,
    pub size: Option<u64>,
    pub contents: Option<String>,
    pub secondary_files: Vec<String>,
}

impl FileInputFormValue {
    /// Projects a file reference onto the flat form fields.
    pub fn from_file_reference(file: &FileReference) -> Self {
        Self {
            path: file.path.clone(),
            size: file.size,
            contents: file.contents.clone(),
            secondary_files: secondary_file_paths(file),
        }
    }

    /// Rebuilds the file reference shape from the flat form fields.
    ///
    /// Every secondary path becomes a `{ path }` entry. Metadata is not part
    /// of the form and is therefore absent from the result.
    pub fn into_file_reference(self) -> FileReference {
        FileReference {
            path: self.path,
            size: self.size,
            contents: self.contents,
            metadata: None,
            secondary_files: Some(self.secondary_files.into_iter().map(SecondaryFile::new).collect()),
        }
    }
}

/// Extracts the ordered secondary file paths of `file`.
///
/// An absent `secondaryFiles` list yields an empty list; entries without a
/// path contribute an empty string so positions are preserved.
pub fn secondary_file_paths(file: &FileReference) -> Vec<String> {
    file.secondary_files
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|secondary| secondary.path.clone().unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_secondary_files_to_paths() {
        let file: FileReference = serde_json::from_value(json!({
            "path": "reads.bam",
            "size": 10,
            "contents": "abc",
            "metadata": { "sample": "s1" },
            "secondaryFiles": [{ "path": "reads.bam.bai" }, {}]
        }))
        .expect("file");

        let value = FileInputFormValue::from_file_reference(&file);
        assert_eq!(value.path.as_deref(), Some("reads.bam"));
        assert_eq!(value.size, Some(10));
        assert_eq!(value.contents.as_deref(), Some("abc"));
        assert_eq!(value.secondary_files, vec!["reads.bam.bai".to_string(), String::new()]);
    }

    #[test]
    fn absent_secondary_files_normalize_to_empty() {
        assert!(secondary_file_paths(&FileReference::default()).is_empty());
    }

    #[test]
    fn reconstructs_secondary_file_objects() {
        let value = FileInputFormValue {
            path: Some("a".into()),
            secondary_files: vec!["a.txt".into(), "b.txt".into()],
            ..Default::default()
        };
        let file = value.into_file_reference();
        assert_eq!(
            serde_json::to_value(&file).expect("serialize"),
            json!({ "path": "a", "secondaryFiles": [{ "path": "a.txt" }, { "path": "b.txt" }] })
        );
    }

    #[test]
    fn reconstruction_always_carries_secondary_files() {
        let file = FileInputFormValue::default().into_file_reference();
        assert_eq!(file.secondary_files, Some(Vec::new()));
    }
}
