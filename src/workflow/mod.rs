pub mod submission_flow;

pub use submission_flow::{SubmissionController, SubmitOutcome, FAILURE_MESSAGE, SUCCESS_MESSAGE};
