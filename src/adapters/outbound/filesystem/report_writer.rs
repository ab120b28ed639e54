use crate::ports::outbound::ReportWriter;
use crate::shared::error::SbomExportError;
use crate::shared::security::{sanitize_file_name, validate_not_symlink};
use crate::shared::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemReportWriter adapter for writing reports into a directory
///
/// Reports are written as pretty-printed JSON with a four-space indent.
/// The output directory is created on `prepare` if missing, one level only.
pub struct FileSystemReportWriter {
    output_dir: PathBuf,
}

impl FileSystemReportWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn to_pretty_json(document: &Value) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        document.serialize(&mut serializer)?;
        Ok(buffer)
    }
}

impl ReportWriter for FileSystemReportWriter {
    fn prepare(&self) -> Result<()> {
        if self.output_dir.is_dir() {
            return Ok(());
        }

        fs::create_dir(&self.output_dir).map_err(|e| SbomExportError::OutputDirectoryError {
            path: self.output_dir.clone(),
            details: e.to_string(),
        })?;
        log::debug!("Created output directory {}", self.output_dir.display());
        Ok(())
    }

    fn write_report(&self, file_name: &str, document: &Value) -> Result<PathBuf> {
        let path = self.output_dir.join(sanitize_file_name(file_name));
        validate_not_symlink(&path, "write")?;

        let content = Self::to_pretty_json(document)?;
        fs::write(&path, content).map_err(|e| SbomExportError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("reports");

        let writer = FileSystemReportWriter::new(output_dir.clone());
        writer.prepare().unwrap();

        assert!(output_dir.is_dir());
    }

    #[test]
    fn test_prepare_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let writer = FileSystemReportWriter::new(temp_dir.path().to_path_buf());
        assert!(writer.prepare().is_ok());
    }

    #[test]
    fn test_prepare_does_not_create_parents() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("missing").join("reports");

        let writer = FileSystemReportWriter::new(output_dir);
        let result = writer.prepare();

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to prepare output directory"));
    }

    #[test]
    fn test_write_report_pretty_prints_with_four_spaces() {
        let temp_dir = TempDir::new().unwrap();
        let writer = FileSystemReportWriter::new(temp_dir.path().to_path_buf());

        let path = writer
            .write_report("bom.json", &json!({"name": "café"}))
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n    \"name\": \"café\"\n}");
    }

    #[test]
    fn test_write_report_sanitizes_file_name() {
        let temp_dir = TempDir::new().unwrap();
        let writer = FileSystemReportWriter::new(temp_dir.path().to_path_buf());

        let path = writer
            .write_report("SPDX report for web/api.json", &json!({}))
            .unwrap();

        assert_eq!(path, temp_dir.path().join("SPDX report for web_api.json"));
        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_report_refuses_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        fs::write(&target, "original").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("bom.json")).unwrap();

        let writer = FileSystemReportWriter::new(temp_dir.path().to_path_buf());
        let result = writer.write_report("bom.json", &json!({"x": 1}));

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
    }
}
