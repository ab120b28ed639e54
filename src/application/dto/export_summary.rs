use crate::application::dto::ReportStatus;
use std::path::PathBuf;

/// ExportSummary - what an export run produced
///
/// Per-project failures are counted here; they never fail the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of projects in scope
    pub projects: usize,
    /// Number of license entries collected (0 when license text is off)
    pub license_entries: usize,
    /// Status of every project, in completion order
    pub statuses: Vec<ReportStatus>,
    /// Projects whose worker stopped without a status
    pub aborted: usize,
}

impl ExportSummary {
    pub fn created(&self) -> usize {
        self.statuses.iter().filter(|s| s.is_created()).count()
    }

    pub fn failed(&self) -> usize {
        self.statuses.len() - self.created() + self.aborted
    }

    /// Paths of the written report files
    pub fn written_files(&self) -> Vec<PathBuf> {
        self.statuses
            .iter()
            .filter_map(|status| match status {
                ReportStatus::Created { path, .. } => Some(path.clone()),
                ReportStatus::Failed => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let summary = ExportSummary {
            projects: 4,
            license_entries: 0,
            statuses: vec![
                ReportStatus::created("a.json", PathBuf::from("out/a.json")),
                ReportStatus::Failed,
                ReportStatus::created("b.json", PathBuf::from("out/b.json")),
            ],
            aborted: 1,
        };

        assert_eq!(summary.created(), 2);
        assert_eq!(summary.failed(), 2);
        assert_eq!(
            summary.written_files(),
            vec![PathBuf::from("out/a.json"), PathBuf::from("out/b.json")]
        );
    }
}
