pub mod assignment;
pub mod document;
pub mod object_path;
pub mod text_processing;

pub use assignment::{AssignmentError, parse_assignment};
pub use document::{DocumentError, DocumentFormat, load_document};
pub use object_path::{get_property, scalar_key};
pub use text_processing::{list_key, locale_compare};
