use crate::application::dispatcher::Dispatcher;
use crate::application::dto::ExportConfig;
use crate::ports::outbound::{ApiRequest, MendApi, ProgressReporter};
use crate::sbom_generation::domain::api_model::AttributionReportResponse;
use crate::sbom_generation::domain::{LicenseIndex, ProjectRef, ProjectScope};
use crate::sbom_generation::services::AttributionParser;
use std::sync::Arc;

/// CollectLicensesUseCase - gathers license text for every project in scope
///
/// One attribution report is fetched per project through the dispatcher.
/// Workers insert into a shared `LicenseIndex`; a project whose report
/// cannot be fetched or read contributes nothing.
pub struct CollectLicensesUseCase<A> {
    api: Arc<A>,
}

impl<A: MendApi + 'static> CollectLicensesUseCase<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn execute<P: ProgressReporter>(
        &self,
        scope: &ProjectScope,
        config: Arc<ExportConfig>,
        progress: &P,
    ) -> LicenseIndex {
        let index = LicenseIndex::new();
        let dispatcher = Dispatcher::new(config.threads);

        let worker = |project: ProjectRef| {
            let api = Arc::clone(&self.api);
            let config = Arc::clone(&config);
            let index = index.clone();
            async move {
                Self::collect_project(api.as_ref(), &config, &project, &index).await;
                anyhow::Ok(())
            }
        };

        let outcome = dispatcher
            .run_all_with_progress(scope.projects().to_vec(), worker, |done, total| {
                progress.report_progress(done, total, Some("Collecting license text"));
            })
            .await;

        // Workers only fail by panicking; the affected projects simply have no entries
        if !outcome.errors.is_empty() {
            log::warn!(
                "License collection stopped early for {} project(s)",
                outcome.errors.len()
            );
        }

        index
    }

    async fn collect_project(api: &A, config: &ExportConfig, project: &ProjectRef, index: &LicenseIndex) {
        let request = ApiRequest::attribution_report(&config.user_key, project.token());
        let Some(report) = api.call_json::<AttributionReportResponse>(&request).await else {
            log::debug!("No attribution report for {}", project);
            return;
        };

        let entries = AttributionParser::extract(&report, config.format);
        log::debug!("{} license entries for {}", entries.len(), project);
        for (key, text) in entries {
            index.insert(key, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::*;
    use crate::ports::outbound::ApiResponse;
    use crate::sbom_generation::domain::ReportFormat;
    use serde_json::json;

    fn attribution(request: &ApiRequest) -> ApiResponse {
        match request.project_token().map(|t| t.trim_start_matches('0')) {
            Some("p1") => json(json!({"detail": {"libraries": [
                {"library": "lodash", "licenses": [{"license": "MIT", "licenseText": "MIT text"}]}
            ]}})),
            Some("p2") => json(json!({"detail": {"libraries": [
                {"library": "guava", "licenses": [
                    {"license": "Apache-2.0", "licenseText": "Apache text"},
                    {"license": "BSD", "licenseText": null}
                ]}
            ]}})),
            Some("p3") => ApiResponse::Text("<html>gateway timeout</html>".to_string()),
            _ => ApiResponse::Empty,
        }
    }

    fn scope() -> ProjectScope {
        ProjectScope::new(
            ["p1", "p2", "p3", "p4"]
                .iter()
                .map(|tag| ProjectRef::new(token(tag), format!("Product:{}", tag))),
        )
    }

    #[tokio::test]
    async fn test_collect_for_spdx() {
        let api = shared(ScriptedMendApi::new(attribution));
        let config = Arc::new(config(ReportFormat::Spdx));

        let index = CollectLicensesUseCase::new(Arc::clone(&api))
            .execute(&scope(), config, &SilentProgress)
            .await;

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("SPDXRef-PACKAGE-lodash").as_deref(), Some("MIT text"));
        assert_eq!(
            index.get("SPDXRef-PACKAGE-guava").as_deref(),
            Some("Apache text\nBSD")
        );
        assert_eq!(api.calls_of("getProjectAttributionReport").len(), 4);
    }

    #[tokio::test]
    async fn test_collect_for_cyclonedx() {
        let api = shared(ScriptedMendApi::new(attribution));
        let config = Arc::new(config(ReportFormat::CycloneDx));

        let index = CollectLicensesUseCase::new(api)
            .execute(&scope(), config, &SilentProgress)
            .await;

        assert_eq!(index.len(), 3);
        assert_eq!(
            index.lookup_license("guava", "Apache-2.0").as_deref(),
            Some("Apache text")
        );
        assert_eq!(index.lookup_license("guava", "BSD").as_deref(), Some("BSD"));
    }

    #[tokio::test]
    async fn test_attribution_request_shape() {
        let api = shared(ScriptedMendApi::new(|_: &ApiRequest| ApiResponse::Empty));
        let config = Arc::new(config(ReportFormat::Spdx));
        let scope = ProjectScope::new([ProjectRef::new(token("p1"), "Product:p1")]);

        let index = CollectLicensesUseCase::new(Arc::clone(&api))
            .execute(&scope, config, &SilentProgress)
            .await;

        assert!(index.is_empty());
        assert_eq!(
            api.calls(),
            vec![ApiRequest::attribution_report(USER_KEY, &token("p1"))]
        );
    }
}
