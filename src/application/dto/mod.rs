/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod export_config;
mod export_summary;
mod report_status;

pub use export_config::{ExportConfig, ExportConfigBuilder};
pub use export_summary::ExportSummary;
pub use report_status::ReportStatus;
