use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Only configuration problems and errors escaping the top-level run
/// produce a non-zero code. Individual project failures are logged and
/// do not change the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The run completed (individual projects may still have failed)
    Success = 0,
    /// Missing or malformed configuration, detected before any network activity
    InvalidConfiguration = 2,
    /// Unexpected error escaping the run (I/O error, client setup, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidConfiguration => write!(f, "Invalid Configuration (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the SBOM export run.
///
/// Per-project problems never surface as this type; they are logged and
/// converted to a failure status by the report generator.
#[derive(Debug, Error)]
pub enum SbomExportError {
    /// One entry per offending field, e.g. `MEND_USERKEY`
    #[error("Missing or malformed configuration parameters: {}", fields.join(", "))]
    InvalidConfiguration { fields: Vec<String> },

    #[error("The type {value} is not supported.\n\n💡 Hint: Use 'spdx' or 'cdx'")]
    UnsupportedFormat { value: String },

    #[error("Failed to prepare output directory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the parent directory exists and you have write permissions")]
    OutputDirectoryError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl SbomExportError {
    /// Maps the error to the process exit code
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SbomExportError::InvalidConfiguration { .. }
            | SbomExportError::UnsupportedFormat { .. } => ExitCode::InvalidConfiguration,
            _ => ExitCode::ApplicationError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidConfiguration.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidConfiguration),
            "Invalid Configuration (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_invalid_configuration_lists_every_field() {
        let error = SbomExportError::InvalidConfiguration {
            fields: vec!["MEND_USERKEY".to_string(), "MEND_PROJECTTOKEN".to_string()],
        };
        let display = format!("{}", error);
        assert!(display.contains("Missing or malformed configuration parameters"));
        assert!(display.contains("MEND_USERKEY"));
        assert!(display.contains("MEND_PROJECTTOKEN"));
        assert_eq!(error.exit_code(), ExitCode::InvalidConfiguration);
    }

    #[test]
    fn test_unsupported_format_display() {
        let error = SbomExportError::UnsupportedFormat {
            value: "xml".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("The type xml is not supported."));
        assert!(display.contains("💡 Hint:"));
        assert_eq!(error.exit_code(), ExitCode::InvalidConfiguration);
    }

    #[test]
    fn test_file_write_error_display() {
        let error = SbomExportError::FileWriteError {
            path: PathBuf::from("/test/output.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/output.json"));
        assert!(display.contains("Permission denied"));
        assert_eq!(error.exit_code(), ExitCode::ApplicationError);
    }

    #[test]
    fn test_output_directory_error_display() {
        let error = SbomExportError::OutputDirectoryError {
            path: PathBuf::from("/missing/parent/reports"),
            details: "No such file or directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to prepare output directory"));
        assert!(display.contains("/missing/parent/reports"));
    }

    #[test]
    fn test_security_error_display() {
        let error = SbomExportError::SecurityError {
            path: PathBuf::from("/test/symlink.json"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Remove the link".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Symbolic links are not allowed"));
        assert!(display.contains("Remove the link"));
    }
}
