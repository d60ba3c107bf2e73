//! File input inspector: edits path, size, secondary files and contents of a
//! single file-typed value.

use composer_types::FileReference;
use tracing::debug;

use super::aggregator::{ChangeAggregator, ChangeSource};
use super::state::{FileInputFormValue, secondary_file_paths};
use crate::components::component::Component;
use crate::effect::Effect;

/// Messages understood by the [`FileInputInspector`].
#[derive(Debug, Clone, PartialEq)]
pub enum FileInputMsg {
    /// A new file reference snapshot from the owner.
    InputChanged(FileReference),
    /// The path field text changed.
    PathEdited(Option<String>),
    /// The size field changed.
    SizeEdited(Option<u64>),
    /// The contents field text changed.
    ContentsEdited(Option<String>),
    /// The secondary file list was edited (tags added, removed or reordered).
    SecondaryFilesEdited(Vec<String>),
    /// A native change event fired on the form.
    RawChange,
}

/// State core of the file input inspector.
///
/// Plain field edits only update form state; they surface once the form
/// reports a [`FileInputMsg::RawChange`]. Secondary file edits surface
/// directly unless they repeat the previous list. Either way the emitted
/// update is rebuilt from the whole form, not just the edited field.
#[derive(Debug, Default)]
pub struct FileInputInspector {
    input: FileReference,
    secondary_file_paths: Vec<String>,
    form: Option<FileInputFormValue>,
    aggregator: ChangeAggregator,
}

impl FileInputInspector {
    pub fn new(input: FileReference) -> Self {
        let mut inspector = Self::default();
        inspector.set_input(input);
        inspector
    }

    /// Latest snapshot received from the owner.
    pub fn input(&self) -> &FileReference {
        &self.input
    }

    /// Secondary paths derived from the latest snapshot.
    pub fn secondary_file_paths(&self) -> &[String] {
        &self.secondary_file_paths
    }

    /// Current form values, once the form has been built.
    pub fn form_value(&self) -> Option<&FileInputFormValue> {
        self.form.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.form.is_some()
    }

    fn set_input(&mut self, input: FileReference) {
        self.secondary_file_paths = secondary_file_paths(&input);
        self.input = input;

        // Form is absent until init; it picks the paths up on construction.
        let Some(form) = self.form.as_mut() else {
            debug!("file input form not built yet; deferring secondary files");
            return;
        };
        form.secondary_files = self.secondary_file_paths.clone();
        self.aggregator.sync_secondary_files(&self.secondary_file_paths);
    }

    fn edit_field(&mut self, apply: impl FnOnce(&mut FileInputFormValue)) {
        match self.form.as_mut() {
            Some(form) => apply(form),
            None => debug!("ignoring file input edit before init"),
        }
    }

    fn edit_secondary_files(&mut self, paths: Vec<String>) -> Vec<Effect> {
        let Some(form) = self.form.as_mut() else {
            debug!("ignoring secondary files edit before init");
            return Vec::new();
        };
        form.secondary_files = paths;
        let source = self.aggregator.secondary_files_changed(&form.secondary_files);
        self.emit(source)
    }

    fn emit(&self, source: Option<ChangeSource>) -> Vec<Effect> {
        let (Some(source), Some(form)) = (source, self.form.as_ref()) else {
            return Vec::new();
        };
        debug!(?source, subscribed = self.aggregator.is_subscribed(), "file input form changed");
        vec![Effect::FileInputUpdated(form.clone().into_file_reference())]
    }
}

impl Component for FileInputInspector {
    type Msg = FileInputMsg;

    fn init(&mut self) -> Vec<Effect> {
        if self.form.is_some() {
            return Vec::new();
        }
        let form = FileInputFormValue::from_file_reference(&self.input);
        self.aggregator = ChangeAggregator::subscribe(&form.secondary_files);
        self.form = Some(form);
        Vec::new()
    }

    fn update(&mut self, msg: FileInputMsg) -> Vec<Effect> {
        match msg {
            FileInputMsg::InputChanged(input) => {
                self.set_input(input);
                Vec::new()
            }
            FileInputMsg::PathEdited(path) => {
                self.edit_field(|form| form.path = path);
                Vec::new()
            }
            FileInputMsg::SizeEdited(size) => {
                self.edit_field(|form| form.size = size);
                Vec::new()
            }
            FileInputMsg::ContentsEdited(contents) => {
                self.edit_field(|form| form.contents = contents);
                Vec::new()
            }
            FileInputMsg::SecondaryFilesEdited(paths) => self.edit_secondary_files(paths),
            FileInputMsg::RawChange => {
                let source = self.aggregator.raw_change();
                self.emit(source)
            }
        }
    }

    fn destroy(&mut self) -> Vec<Effect> {
        self.aggregator.unsubscribe();
        Vec::new()
    }
}
