use crate::application::dto::ExportConfig;
use crate::ports::outbound::{ApiRequest, MendApi};
use crate::sbom_generation::domain::api_model::{ProductProjectsResponse, ProjectVitalsResponse};
use crate::sbom_generation::domain::{ExclusionSet, ProjectRef, ProjectScope};
use std::sync::Arc;

/// ResolveScopeUseCase - turns configured tokens into the projects to export
///
/// Inclusion comes from explicit project tokens and product tokens; when
/// neither is given, the whole organization is in scope. Exclusion tokens
/// are product tokens whose projects are removed from the result.
///
/// Lookups that fail degrade: a missing display name becomes the service's
/// error message, a failed expansion contributes no projects.
pub struct ResolveScopeUseCase<A> {
    api: Arc<A>,
}

impl<A: MendApi> ResolveScopeUseCase<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, config: &ExportConfig) -> ProjectScope {
        let mut included = Vec::new();

        for token in &config.project_tokens {
            included.push(self.project_ref(config, token).await);
        }

        if !config.product_tokens.is_empty() {
            for product in &config.product_tokens {
                match self.product_projects(config, product).await {
                    Some(projects) => included.extend(projects),
                    None => log::debug!("No projects resolved for product {}", product),
                }
            }
        } else if config.project_tokens.is_empty() {
            included.extend(self.organization_projects(config).await);
        }

        let scope = ProjectScope::new(included);
        if config.exclude_tokens.is_empty() {
            return scope;
        }

        let exclusions = self.exclusions(config).await;
        for token in exclusions.unresolved() {
            log::warn!(
                "Exclusion token {} could not be expanded to projects and excludes nothing",
                token
            );
        }
        scope.excluding(&exclusions)
    }

    /// Display name lookup for one project, `<product>:<project>`
    async fn project_ref(&self, config: &ExportConfig, token: &str) -> ProjectRef {
        let request = ApiRequest::project_vitals(&config.user_key, token);
        let response = self.api.call_json::<ProjectVitalsResponse>(&request).await;

        let name = response.and_then(|response| {
            response
                .project_vitals
                .as_ref()
                .and_then(|vitals| vitals.first())
                .and_then(|vitals| vitals.display_name())
                .or(response.error_message)
        });

        let name = name.unwrap_or_else(|| {
            format!("Internal error during getting project data by token {}", token)
        });
        ProjectRef::new(token, name)
    }

    async fn product_projects(&self, config: &ExportConfig, product: &str) -> Option<Vec<ProjectRef>> {
        let request = ApiRequest::all_projects(&config.user_key, product);
        let response = self
            .api
            .call_json::<ProductProjectsResponse>(&request)
            .await?;
        let Some(projects) = response.projects else {
            if let Some(message) = response.error_message {
                log::warn!("Projects of product {} could not be listed: {}", product, message);
            }
            return None;
        };

        let mut refs = Vec::with_capacity(projects.len());
        for project in projects {
            refs.push(self.project_ref(config, &project.project_token).await);
        }
        Some(refs)
    }

    async fn organization_projects(&self, config: &ExportConfig) -> Vec<ProjectRef> {
        let request = ApiRequest::organization_project_vitals(&config.user_key, &config.org_token);
        let Some(vitals) = self
            .api
            .call_json::<ProjectVitalsResponse>(&request)
            .await
            .and_then(|response| response.project_vitals)
        else {
            log::warn!("No projects could be listed for the organization");
            return Vec::new();
        };

        let mut refs = Vec::with_capacity(vitals.len());
        for token in vitals.into_iter().filter_map(|vitals| vitals.token) {
            refs.push(self.project_ref(config, &token).await);
        }
        refs
    }

    async fn exclusions(&self, config: &ExportConfig) -> ExclusionSet {
        let mut exclusions = ExclusionSet::new();
        for token in &config.exclude_tokens {
            match self.product_projects(config, token).await {
                Some(projects) => projects
                    .into_iter()
                    .for_each(|project| exclusions.add_project(project)),
                None => exclusions.add_unresolved(token.clone()),
            }
        }
        exclusions
    }
}
