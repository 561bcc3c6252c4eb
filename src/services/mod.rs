pub mod download_writer;
pub mod notifier;
pub mod upload_form;

pub use download_writer::DownloadWriter;
pub use notifier::{ConsoleNotifier, NoticeLevel, Notifier, RecordingNotifier};
pub use upload_form::{BusyGuard, SubmissionState, UploadForm};
