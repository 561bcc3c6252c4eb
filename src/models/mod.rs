pub mod file_slot;
pub mod form_file;
pub mod loaders;
pub mod page_list;
pub mod statement;
pub mod submission;

pub use file_slot::{FileKind, FileSlot, SelectedFile};
pub use form_file::{FormFile, FormPages};
pub use loaders::load_form_file;
pub use page_list::{parse_page_number, PageList};
pub use statement::StatementKind;
pub use submission::{FilePart, StatementPages, SubmissionRequest};
