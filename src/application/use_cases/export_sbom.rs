use crate::application::dispatcher::Dispatcher;
use crate::application::dto::{ExportConfig, ExportSummary};
use crate::application::use_cases::{
    CollectLicensesUseCase, GenerateReportUseCase, ResolveScopeUseCase,
};
use crate::ports::outbound::{MendApi, ProgressReporter, ReportWriter};
use crate::sbom_generation::domain::{LicenseIndex, ProjectRef};
use crate::shared::Result;
use std::sync::Arc;
use std::time::Duration;

/// ExportSbomUseCase - runs a complete export
///
/// Phases run one after another: scope resolution, license collection
/// (when license text is requested), then report generation for every
/// project through the dispatcher. Individual project failures are part of
/// the summary; only output directory problems fail the run.
///
/// # Type Parameters
/// * `A` - MendApi implementation
/// * `W` - ReportWriter implementation
/// * `P` - ProgressReporter implementation
pub struct ExportSbomUseCase<A, W, P> {
    api: Arc<A>,
    writer: Arc<W>,
    progress_reporter: Arc<P>,
    poll_interval: Option<Duration>,
}

impl<A, W, P> ExportSbomUseCase<A, W, P>
where
    A: MendApi + 'static,
    W: ReportWriter + 'static,
    P: ProgressReporter + 'static,
{
    /// Creates a new ExportSbomUseCase with injected dependencies
    pub fn new(api: Arc<A>, writer: Arc<W>, progress_reporter: P) -> Self {
        Self {
            api,
            writer,
            progress_reporter: Arc::new(progress_reporter),
            poll_interval: None,
        }
    }

    /// Overrides the delay between status polls of CycloneDX jobs
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = Some(poll_interval);
        self
    }

    pub async fn execute(&self, config: Arc<ExportConfig>) -> Result<ExportSummary> {
        self.progress_reporter.report("Starting to create reports...");

        let scope = ResolveScopeUseCase::new(Arc::clone(&self.api))
            .execute(&config)
            .await;
        self.progress_reporter
            .report(&format!("{} project(s) in scope", scope.len()));

        let licenses = if config.include_license_text {
            let index = CollectLicensesUseCase::new(Arc::clone(&self.api))
                .execute(&scope, Arc::clone(&config), self.progress_reporter.as_ref())
                .await;
            self.progress_reporter
                .report(&format!("Collected {} license text(s)", index.len()));
            index
        } else {
            LicenseIndex::new()
        };

        if !config.output_dir.exists() {
            self.progress_reporter.report(&format!(
                "Dir: {} does not exist. Creating it",
                config.output_dir.display()
            ));
        }
        self.writer.prepare()?;

        let mut generator = GenerateReportUseCase::new(
            Arc::clone(&self.api),
            Arc::clone(&self.writer),
            Arc::clone(&config),
            licenses.clone(),
        );
        if let Some(poll_interval) = self.poll_interval {
            generator = generator.with_poll_interval(poll_interval);
        }
        let generator = Arc::new(generator);

        // Status lines are reported as each project finishes
        let worker = |project: ProjectRef| {
            let generator = Arc::clone(&generator);
            let progress = Arc::clone(&self.progress_reporter);
            async move {
                let status = generator.generate(&project).await;
                progress.report(&status.to_string());
                anyhow::Ok(status)
            }
        };

        let progress = self.progress_reporter.as_ref();
        let outcome = Dispatcher::new(config.threads)
            .run_all_with_progress(scope.projects().to_vec(), worker, |done, total| {
                progress.report_progress(done, total, Some("Creating reports"));
            })
            .await;

        for error in &outcome.errors {
            self.progress_reporter.report_error(&error.to_string());
        }

        let summary = ExportSummary {
            projects: scope.len(),
            license_entries: licenses.len(),
            aborted: outcome.errors.len(),
            statuses: outcome.results,
        };
        self.progress_reporter.report_completion(&format!(
            "Export finished: {} report(s) created, {} failed",
            summary.created(),
            summary.failed()
        ));

        Ok(summary)
    }
}
