/// Mock implementations for testing
mod mock_mend_api;
mod mock_progress_reporter;

pub use mock_mend_api::MockMendApi;
pub use mock_progress_reporter::MockProgressReporter;
