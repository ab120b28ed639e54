/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (Mend API, file system, console).
pub mod mend_api;
pub mod progress_reporter;
pub mod report_writer;

pub use mend_api::{ApiRequest, ApiResponse, MendApi, ResponseMode};
pub use progress_reporter::ProgressReporter;
pub use report_writer::ReportWriter;
