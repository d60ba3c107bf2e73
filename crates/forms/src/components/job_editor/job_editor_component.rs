//! Job editor: edits the input values of a job, one entry per declared input,
//! presented in category groups.

use std::sync::Arc;

use composer_types::{InputDefinition, InputGroup, JobDocument};
use serde_json::Value as JsonValue;
use tracing::trace;

use super::state::{GroupView, JobEditorState};
use crate::components::component::Component;
use crate::config::EditorConfig;
use crate::effect::Effect;

#[derive(Debug, Clone, PartialEq)]
pub enum JobEditorMsg {
    /// New input definitions from the owner; groups are rebuilt.
    InputsChanged(Vec<InputDefinition>),
    /// New job snapshot from the owner.
    JobChanged(Arc<JobDocument>),
    /// Native change event of a group form. Entries report their own edits,
    /// so this carries no behavior.
    FormChanged,
    /// A sub-editor accepted a new value for one input.
    EntryUpdated { input_id: String, value: JsonValue },
}

/// Status line reported for an accepted edit of `input_id`.
pub fn status_message(input_id: &str) -> String {
    format!("Updated job value of {input_id}.")
}

/// State core of the job editor.
#[derive(Debug, Default)]
pub struct JobEditor {
    config: EditorConfig,
    state: JobEditorState,
}

impl JobEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            state: JobEditorState::default(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Current job snapshot.
    pub fn job(&self) -> &Arc<JobDocument> {
        self.state.job()
    }

    pub fn inputs(&self) -> &[InputDefinition] {
        self.state.inputs()
    }

    /// Inputs grouped and sorted the way they are presented.
    pub fn input_groups(&self) -> &[InputGroup] {
        self.state.input_groups()
    }

    /// Groups with the `(definition, current value)` pair of every entry.
    pub fn group_views(&self) -> Vec<GroupView<'_>> {
        self.state.group_views()
    }

    fn entry_updated(&mut self, input_id: String, value: JsonValue) -> Vec<Effect> {
        let message = status_message(&input_id);
        let job = self.state.apply_entry_update(&input_id, value);
        vec![Effect::StatusMessage(message), Effect::JobUpdated(job), Effect::MarkForCheck]
    }
}

impl Component for JobEditor {
    type Msg = JobEditorMsg;

    fn update(&mut self, msg: JobEditorMsg) -> Vec<Effect> {
        match msg {
            JobEditorMsg::InputsChanged(inputs) => {
                self.state.set_inputs(inputs, &self.config);
                Vec::new()
            }
            JobEditorMsg::JobChanged(job) => {
                self.state.set_job(job);
                Vec::new()
            }
            JobEditorMsg::FormChanged => {
                trace!("job form change ignored; entries report their own edits");
                Vec::new()
            }
            JobEditorMsg::EntryUpdated { input_id, value } => self.entry_updated(input_id, value),
        }
    }

    fn destroy(&mut self) -> Vec<Effect> {
        vec![Effect::HideInspector]
    }
}
