//! Shared models for the job editor and the file input inspector.
//!
//! The shapes defined here mirror the documents exchanged with the host
//! editor: file references with their secondary files, job documents holding
//! concrete input values, and the input definitions those values belong to.
//! Key order is preserved (via `IndexMap`) so documents round-trip in the
//! order they were authored.

pub mod file;
pub mod input;
pub mod job;

pub use file::{FileReference, SecondaryFile};
pub use input::{InputDefinition, InputGroup};
pub use job::{AllocatedResources, JobDocument};
