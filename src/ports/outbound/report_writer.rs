use crate::shared::Result;
use serde_json::Value;
use std::path::PathBuf;

/// ReportWriter port for persisting finished reports
pub trait ReportWriter: Send + Sync {
    /// Makes sure the output location exists before any report is written
    fn prepare(&self) -> Result<()>;

    /// Writes one report document and returns the path it was written to
    ///
    /// # Arguments
    /// * `file_name` - Report file name; path separators are neutralized
    /// * `document` - JSON document to write
    fn write_report(&self, file_name: &str, document: &Value) -> Result<PathBuf>;
}
