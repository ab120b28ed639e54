use crate::application::dto::{ExportConfig, ReportStatus};
use crate::ports::outbound::{ApiRequest, MendApi, ReportWriter, ResponseMode};
use crate::sbom_generation::domain::api_model::AsyncProcessResponse;
use crate::sbom_generation::domain::{
    JobHandle, JobStatus, LicenseIndex, ProjectRef, ReportDocument, ReportFormat,
};
use crate::sbom_generation::services::{BundleReader, CycloneDxEnricher, SpdxEnricher};
use crate::shared::security::sanitize_file_name;
use crate::shared::Result;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Delay before each status poll of an asynchronous report job
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// GenerateReportUseCase - produces and writes the report of one project
///
/// SPDX reports are fetched in one call. CycloneDX reports are produced by
/// an asynchronous job that is polled until it finishes, then downloaded as
/// a zip bundle. Collected license text is merged in before writing.
///
/// Nothing escapes `generate`: every failure is logged and reported as
/// `ReportStatus::Failed`.
pub struct GenerateReportUseCase<A, W> {
    api: Arc<A>,
    writer: Arc<W>,
    config: Arc<ExportConfig>,
    licenses: LicenseIndex,
    poll_interval: Duration,
}

impl<A: MendApi, W: ReportWriter> GenerateReportUseCase<A, W> {
    pub fn new(api: Arc<A>, writer: Arc<W>, config: Arc<ExportConfig>, licenses: LicenseIndex) -> Self {
        Self {
            api,
            writer,
            config,
            licenses,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub async fn generate(&self, project: &ProjectRef) -> ReportStatus {
        let document = match self.config.format {
            ReportFormat::Spdx => self.spdx_report(project).await,
            ReportFormat::CycloneDx => self.cyclonedx_report(project).await,
        };

        let Some(document) = document else {
            return ReportStatus::Failed;
        };

        match self.write(document) {
            Ok(status) => status,
            Err(e) => {
                log::error!("Failed to write report for {}: {:#}", project, e);
                ReportStatus::Failed
            }
        }
    }

    fn write(&self, document: ReportDocument) -> Result<ReportStatus> {
        let path = self
            .writer
            .write_report(document.file_name(), document.content())?;
        Ok(ReportStatus::created(document.file_name(), path))
    }

    async fn spdx_report(&self, project: &ProjectRef) -> Option<ReportDocument> {
        let Some(file_name) = Self::spdx_file_name(project) else {
            log::error!("No report file name can be derived from {}", project);
            return None;
        };

        let request = ApiRequest::spdx_report(&self.config.user_key, project.token());
        let Some(mut content) = self.api.call_json::<Value>(&request).await else {
            log::error!("No SPDX report could be fetched for {}", project);
            return None;
        };

        if !self.licenses.is_empty() {
            let merged = SpdxEnricher::enrich(&mut content, &self.licenses);
            log::debug!("Merged {} license text(s) into {}", merged, project);
        }

        Some(ReportDocument::new(file_name, content))
    }

    /// `SPDX report for <project>.json`, the project name without its product
    /// prefix. `None` when the display name has no product prefix.
    pub fn spdx_file_name(project: &ProjectRef) -> Option<String> {
        let short_name = project.short_name()?;
        Some(sanitize_file_name(&format!("SPDX report for {}.json", short_name)))
    }

    async fn cyclonedx_report(&self, project: &ProjectRef) -> Option<ReportDocument> {
        let job = self.start_job(project).await?;

        match self.wait_for(&job).await {
            JobStatus::Success => {}
            JobStatus::Failed(reason) => {
                log::error!(
                    "Downloading status is FAILED: {}. Please, repeat later",
                    reason
                );
                return None;
            }
            JobStatus::Pending(_) => return None,
        }

        let mut document = self.download(&job).await?;
        if !self.licenses.is_empty() {
            let attached = CycloneDxEnricher::enrich(document.content_mut(), &self.licenses);
            log::debug!("Attached {} license evidence entries for {}", attached, project);
        }
        Some(document)
    }

    async fn start_job(&self, project: &ProjectRef) -> Option<JobHandle> {
        let request = ApiRequest::cyclonedx_report_job(&self.config.user_key, project.token());
        let handle = self
            .api
            .call_json::<AsyncProcessResponse>(&request)
            .await
            .as_ref()
            .and_then(JobHandle::from_response);

        if handle.is_none() {
            log::error!("Report generation could not be started for {}", project);
        }
        handle
    }

    /// Polls until the job reaches a terminal status; the first poll
    /// happens after one interval.
    pub async fn wait_for(&self, job: &JobHandle) -> JobStatus {
        let request = ApiRequest::async_process_status(
            &self.config.user_key,
            &self.config.org_token,
            job.as_str(),
        );

        loop {
            tokio::time::sleep(self.poll_interval).await;
            let response = self.api.call_json::<AsyncProcessResponse>(&request).await;
            let status = JobStatus::from_response(response.as_ref());
            log::debug!("Job {} status: {}", job, status);
            if status.is_terminal() {
                return status;
            }
        }
    }

    async fn download(&self, job: &JobHandle) -> Option<ReportDocument> {
        let request = ApiRequest::download_async_report(
            &self.config.user_key,
            &self.config.org_token,
            job.as_str(),
        );
        let Some(bytes) = self
            .api
            .call(&request, ResponseMode::Download)
            .await
            .into_bytes()
        else {
            log::error!("Report bundle for job {} could not be downloaded", job);
            return None;
        };

        match BundleReader::read(&bytes) {
            Ok(document) if !document.file_name().is_empty() => Some(document),
            Ok(_) => {
                log::error!("Report bundle for job {} has no file name", job);
                None
            }
            Err(e) => {
                log::error!("{:#}", e);
                None
            }
        }
    }
}
