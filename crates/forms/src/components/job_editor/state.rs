use std::sync::Arc;

use composer_types::{InputDefinition, InputGroup, JobDocument};
use serde_json::Value as JsonValue;
use tracing::debug;

use super::grouping::group_inputs;
use crate::config::EditorConfig;

/// What a per-entry sub-editor is given to render: the definition and the
/// job's current value for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryView<'a> {
    pub definition: &'a InputDefinition,
    pub value: Option<&'a JsonValue>,
}

impl EntryView<'_> {
    pub fn input_id(&self) -> &str {
        &self.definition.id
    }

    pub fn label(&self) -> &str {
        self.definition.display_label()
    }

    pub fn description(&self) -> Option<&str> {
        self.definition.description.as_deref()
    }
}

/// One rendered group: its name and the entries inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupView<'a> {
    pub name: &'a str,
    pub entries: Vec<EntryView<'a>>,
}

/// Job snapshot plus the grouped input definitions it is edited through.
#[derive(Debug, Default)]
pub(crate) struct JobEditorState {
    job: Arc<JobDocument>,
    inputs: Vec<InputDefinition>,
    input_groups: Vec<InputGroup>,
}

impl JobEditorState {
    pub(crate) fn job(&self) -> &Arc<JobDocument> {
        &self.job
    }

    pub(crate) fn inputs(&self) -> &[InputDefinition] {
        &self.inputs
    }

    pub(crate) fn input_groups(&self) -> &[InputGroup] {
        &self.input_groups
    }

    pub(crate) fn set_job(&mut self, job: Arc<JobDocument>) {
        self.job = job;
    }

    /// Replaces the input definitions and rebuilds the groups from scratch.
    pub(crate) fn set_inputs(&mut self, inputs: Vec<InputDefinition>, config: &EditorConfig) {
        self.input_groups = group_inputs(&inputs, config);
        self.inputs = inputs;
        debug!(inputs = self.inputs.len(), groups = self.input_groups.len(), "regrouped job inputs");
    }

    /// Replaces the job with a copy whose `input_id` value is `value`.
    ///
    /// The previous job is left untouched; holders of the old `Arc` keep
    /// seeing the old inputs.
    pub(crate) fn apply_entry_update(&mut self, input_id: &str, value: JsonValue) -> Arc<JobDocument> {
        self.job = Arc::new(self.job.with_input(input_id, value));
        Arc::clone(&self.job)
    }

    pub(crate) fn group_views(&self) -> Vec<GroupView<'_>> {
        self.input_groups
            .iter()
            .map(|group| GroupView {
                name: &group.name,
                entries: group
                    .inputs
                    .iter()
                    .map(|definition| EntryView {
                        definition,
                        value: self.job.input(&definition.id),
                    })
                    .collect(),
            })
            .collect()
    }
}
