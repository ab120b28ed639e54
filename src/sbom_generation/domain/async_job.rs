use super::api_model::AsyncProcessResponse;
use std::fmt;

const STATUS_SUCCESS: &str = "SUCCESS";
const STATUS_FAILED: &str = "FAILED";
const UNEXPECTED_ERROR: &str = "Unexpected error";

/// Identifier of an asynchronous report-generation job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self(uuid.into())
    }

    /// Extracts the handle from a `generateProjectReportAsync` response
    pub fn from_response(response: &AsyncProcessResponse) -> Option<Self> {
        response
            .async_process_status
            .as_ref()?
            .uuid
            .as_deref()
            .filter(|uuid| !uuid.is_empty())
            .map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of an asynchronous job as observed by one poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// Job finished; the bundle can be downloaded
    Success,
    /// Job failed, or the status could not be read
    Failed(String),
    /// Any other status reported by the service
    Pending(String),
}

impl JobStatus {
    /// Interprets a status poll. A response without a status field counts
    /// as a failure, carrying the service's error message when there is one.
    pub fn from_response(response: Option<&AsyncProcessResponse>) -> Self {
        let Some(response) = response else {
            return JobStatus::Failed(UNEXPECTED_ERROR.to_string());
        };

        let status = response
            .async_process_status
            .as_ref()
            .and_then(|status| status.status.as_deref());

        match status {
            Some(STATUS_SUCCESS) => JobStatus::Success,
            Some(STATUS_FAILED) => {
                JobStatus::Failed(response.error_message.clone().unwrap_or_default())
            }
            Some(other) => JobStatus::Pending(other.to_string()),
            None => JobStatus::Failed(
                response
                    .error_message
                    .clone()
                    .unwrap_or_else(|| UNEXPECTED_ERROR.to_string()),
            ),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Pending(_))
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Success => write!(f, "{}", STATUS_SUCCESS),
            JobStatus::Failed(reason) if reason.is_empty() => write!(f, "{}", STATUS_FAILED),
            JobStatus::Failed(reason) => write!(f, "{} ({})", STATUS_FAILED, reason),
            JobStatus::Pending(status) => write!(f, "{}", status),
        }
    }
}
