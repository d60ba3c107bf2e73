//! # Composer Form Components
//!
//! State cores for the two form components of the workflow editor:
//!
//! - [`FileInputInspector`] edits a single file-typed value (path, size,
//!   secondary files, inline contents).
//! - [`JobEditor`] edits a job document, grouping the workflow's input
//!   definitions by category and merging per-entry edits into the job.
//!
//! ## Architecture
//!
//! Components are driven by messages and never call their host directly.
//! Every handler returns the [`Effect`]s the host should perform (emit an
//! update, report a status line, re-render, hide the inspector); an
//! [`EffectRouter`] applies them to the host's collaborators. All handlers run
//! to completion synchronously and in arrival order.

mod components;
mod config;
mod effect;

pub use components::component::Component;
pub use components::file_input::{ChangeSource, FileInputFormValue, FileInputInspector, FileInputMsg, secondary_file_paths};
pub use components::job_editor::{EntryView, GroupView, JobEditor, JobEditorMsg, category_key, group_inputs, status_message};
pub use config::{CATEGORY_PATH_ENV, DEFAULT_CATEGORY, DEFAULT_CATEGORY_ENV, DEFAULT_CATEGORY_PATH, EditorConfig};
pub use effect::{Effect, EffectRouter, InspectorVisibility, Outbound, StatusReporter};
