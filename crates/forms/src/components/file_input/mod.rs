mod aggregator;
mod file_input_component;
mod state;

pub use aggregator::ChangeSource;
pub use file_input_component::{FileInputInspector, FileInputMsg};
pub use state::{FileInputFormValue, secondary_file_paths};
