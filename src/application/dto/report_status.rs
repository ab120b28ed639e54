use std::fmt;
use std::path::PathBuf;

/// ReportStatus - outcome of generating one project's report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStatus {
    Created { file_name: String, path: PathBuf },
    Failed,
}

impl ReportStatus {
    pub fn created(file_name: impl Into<String>, path: PathBuf) -> Self {
        ReportStatus::Created {
            file_name: file_name.into(),
            path,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, ReportStatus::Created { .. })
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportStatus::Created { file_name, .. } => {
                write!(f, "The report file {} was created.", file_name)
            }
            ReportStatus::Failed => write!(f, "The creation report file was failed."),
        }
    }
}
