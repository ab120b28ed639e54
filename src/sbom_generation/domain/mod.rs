pub mod api_model;
pub mod async_job;
pub mod license_index;
pub mod project;
pub mod report;
pub mod token;

pub use async_job::{JobHandle, JobStatus};
pub use license_index::LicenseIndex;
pub use project::{ExclusionSet, ProjectRef, ProjectScope};
pub use report::{ReportDocument, ReportFormat};
