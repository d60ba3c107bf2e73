mod grouping;
mod job_editor_component;
mod state;

pub use grouping::{category_key, group_inputs};
pub use job_editor_component::{JobEditor, JobEditorMsg, status_message};
pub use state::{EntryView, GroupView};
