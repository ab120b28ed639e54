/// Filesystem adapters for report output
mod report_writer;

pub use report_writer::FileSystemReportWriter;
