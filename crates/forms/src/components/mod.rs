pub mod common;
pub mod component;
pub mod file_input;
pub mod job_editor;
