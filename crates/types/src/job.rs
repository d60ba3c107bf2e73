use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as JsonValue};

/// Concrete runtime values supplied for a workflow's declared inputs.
///
/// A job is treated as an immutable snapshot: edits go through
/// [`JobDocument::with_input`], which builds a new document and leaves the
/// receiver untouched so earlier snapshots stay valid for comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JobDocument {
    /// Resources reserved for the run, when specified.
    #[serde(rename = "allocatedResources", default, skip_serializing_if = "Option::is_none")]
    pub allocated_resources: Option<AllocatedResources>,
    /// Input values keyed by input identifier, in authoring order.
    #[serde(default)]
    pub inputs: IndexMap<String, JsonValue>,
    /// Any other top-level keys carried by the job; preserved across edits.
    #[serde(flatten)]
    pub extra: IndexMap<String, JsonValue>,
}

/// Resource amounts exactly as written in the job, so `2` stays `2` and
/// `0.5` stays `0.5` when the job is written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocatedResources {
    pub cpu: Number,
    pub mem: Number,
}

impl JobDocument {
    /// Returns the current value of an input, if one was supplied.
    pub fn input(&self, input_id: &str) -> Option<&JsonValue> {
        self.inputs.get(input_id)
    }

    /// Builds a new job whose `inputs` equal this job's inputs with
    /// `input_id` overwritten by `value`.
    ///
    /// Existing keys keep their position; new keys are appended.
    pub fn with_input(&self, input_id: impl Into<String>, value: JsonValue) -> JobDocument {
        let mut inputs = self.inputs.clone();
        inputs.insert(input_id.into(), value);
        JobDocument {
            allocated_resources: self.allocated_resources.clone(),
            inputs,
            extra: self.extra.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn with_input_leaves_original_untouched() {
        let original: JobDocument = serde_json::from_value(json!({ "inputs": { "y": 1 } })).expect("job");
        let updated = original.with_input("x", json!(5));

        assert_eq!(original.inputs.len(), 1);
        assert_eq!(original.input("x"), None);
        assert_eq!(serde_json::to_value(&updated).expect("serialize"), json!({ "inputs": { "y": 1, "x": 5 } }));
    }

    #[test]
    fn overwriting_keeps_key_position() {
        let original: JobDocument = serde_json::from_value(json!({ "inputs": { "a": 1, "b": 2 } })).expect("job");
        let updated = original.with_input("a", json!("changed"));
        let keys = updated.inputs.keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(updated.input("a"), Some(&json!("changed")));
    }

    #[test]
    fn preserves_resources_and_unknown_keys() {
        let yaml_text = r#"
allocatedResources:
  cpu: 2
  mem: 4096
label: nightly
"#;
        let original: JobDocument = serde_yaml::from_str(yaml_text).expect("deserialize job");
        assert!(original.inputs.is_empty());

        let updated = original.with_input("reads", json!({ "class": "File", "path": "reads.bam" }));
        assert_eq!(
            updated.allocated_resources,
            Some(AllocatedResources {
                cpu: Number::from(2),
                mem: Number::from(4096)
            })
        );
        assert_eq!(updated.extra.get("label"), Some(&json!("nightly")));
    }

    #[test]
    fn resource_numbers_keep_their_encoding() {
        let original: JobDocument = serde_json::from_value(json!({
            "allocatedResources": { "cpu": 2, "mem": 4096 },
            "inputs": {}
        }))
        .expect("job");
        let updated = original.with_input("threads", json!(4));

        assert_eq!(
            serde_json::to_string(&updated).expect("serialize"),
            r#"{"allocatedResources":{"cpu":2,"mem":4096},"inputs":{"threads":4}}"#
        );

        let fractional: JobDocument =
            serde_json::from_value(json!({ "allocatedResources": { "cpu": 0.5, "mem": 512 } })).expect("job");
        assert_eq!(
            serde_json::to_value(fractional.with_input("x", json!(1))).expect("serialize")["allocatedResources"],
            json!({ "cpu": 0.5, "mem": 512 })
        );
    }
}
