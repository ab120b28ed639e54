use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// How the body of a successful response should be returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// JSON text
    Text,
    /// Binary payload (report bundles)
    Download,
}

/// Result of one API call.
///
/// `Empty` means the request failed for a reason the caller cannot see
/// (transport error or non-success status). Callers skip the item.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Text(String),
    Bytes(Vec<u8>),
    Empty,
}

impl ApiResponse {
    pub fn is_empty(&self) -> bool {
        match self {
            ApiResponse::Text(text) => text.is_empty(),
            ApiResponse::Bytes(bytes) => bytes.is_empty(),
            ApiResponse::Empty => true,
        }
    }

    /// Parses a JSON body into `T`. `None` when the call failed or the
    /// body does not have the expected shape.
    pub fn parse<T: DeserializeOwned>(&self) -> Option<T> {
        match self {
            ApiResponse::Text(text) => serde_json::from_str(text).ok(),
            ApiResponse::Bytes(bytes) => serde_json::from_slice(bytes).ok(),
            ApiResponse::Empty => None,
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            ApiResponse::Text(text) if !text.is_empty() => Some(text.into_bytes()),
            ApiResponse::Bytes(bytes) if !bytes.is_empty() => Some(bytes),
            _ => None,
        }
    }
}

/// Requests sent to the Mend API.
///
/// Serialized as a JSON object whose `requestType` field names the
/// operation; the gateway adds the agent identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "requestType")]
pub enum ApiRequest {
    #[serde(rename = "getProjectVitals", rename_all = "camelCase")]
    GetProjectVitals {
        user_key: String,
        project_token: String,
    },
    #[serde(rename = "getAllProjects", rename_all = "camelCase")]
    GetAllProjects {
        user_key: String,
        product_token: String,
    },
    #[serde(rename = "getOrganizationProjectVitals", rename_all = "camelCase")]
    GetOrganizationProjectVitals { user_key: String, org_token: String },
    #[serde(rename = "getProjectAttributionReport", rename_all = "camelCase")]
    GetProjectAttributionReport {
        user_key: String,
        project_token: String,
        reporting_aggregation_mode: String,
        reporting_scope: String,
        export_format: String,
    },
    #[serde(rename = "getProjectSpdxReport", rename_all = "camelCase")]
    GetProjectSpdxReport {
        user_key: String,
        project_token: String,
        format: String,
    },
    #[serde(rename = "generateProjectReportAsync", rename_all = "camelCase")]
    GenerateProjectReportAsync {
        user_key: String,
        project_token: String,
        report_type: String,
        standard: String,
        format: String,
    },
    #[serde(rename = "getAsyncProcessStatus", rename_all = "camelCase")]
    GetAsyncProcessStatus {
        user_key: String,
        org_token: String,
        uuid: String,
    },
    #[serde(rename = "downloadAsyncReport", rename_all = "camelCase")]
    DownloadAsyncReport {
        user_key: String,
        org_token: String,
        #[serde(rename = "reportStatusUUID")]
        report_status_uuid: String,
    },
}

impl ApiRequest {
    pub fn project_vitals(user_key: &str, project_token: &str) -> Self {
        ApiRequest::GetProjectVitals {
            user_key: user_key.to_string(),
            project_token: project_token.to_string(),
        }
    }

    pub fn all_projects(user_key: &str, product_token: &str) -> Self {
        ApiRequest::GetAllProjects {
            user_key: user_key.to_string(),
            product_token: product_token.to_string(),
        }
    }

    pub fn organization_project_vitals(user_key: &str, org_token: &str) -> Self {
        ApiRequest::GetOrganizationProjectVitals {
            user_key: user_key.to_string(),
            org_token: org_token.to_string(),
        }
    }

    /// License attribution aggregated by project, exported as JSON
    pub fn attribution_report(user_key: &str, project_token: &str) -> Self {
        ApiRequest::GetProjectAttributionReport {
            user_key: user_key.to_string(),
            project_token: project_token.to_string(),
            reporting_aggregation_mode: "BY_PROJECT".to_string(),
            reporting_scope: "LICENSES".to_string(),
            export_format: "JSON".to_string(),
        }
    }

    pub fn spdx_report(user_key: &str, project_token: &str) -> Self {
        ApiRequest::GetProjectSpdxReport {
            user_key: user_key.to_string(),
            project_token: project_token.to_string(),
            format: "JSON".to_string(),
        }
    }

    /// Starts a CycloneDX JSON SBOM job for the project
    pub fn cyclonedx_report_job(user_key: &str, project_token: &str) -> Self {
        ApiRequest::GenerateProjectReportAsync {
            user_key: user_key.to_string(),
            project_token: project_token.to_string(),
            report_type: "ProjectSBOMReport".to_string(),
            standard: "CycloneDX".to_string(),
            format: "json".to_string(),
        }
    }

    pub fn async_process_status(user_key: &str, org_token: &str, uuid: &str) -> Self {
        ApiRequest::GetAsyncProcessStatus {
            user_key: user_key.to_string(),
            org_token: org_token.to_string(),
            uuid: uuid.to_string(),
        }
    }

    pub fn download_async_report(user_key: &str, org_token: &str, uuid: &str) -> Self {
        ApiRequest::DownloadAsyncReport {
            user_key: user_key.to_string(),
            org_token: org_token.to_string(),
            report_status_uuid: uuid.to_string(),
        }
    }

    /// Value of the `requestType` field
    pub fn request_type(&self) -> &'static str {
        match self {
            ApiRequest::GetProjectVitals { .. } => "getProjectVitals",
            ApiRequest::GetAllProjects { .. } => "getAllProjects",
            ApiRequest::GetOrganizationProjectVitals { .. } => "getOrganizationProjectVitals",
            ApiRequest::GetProjectAttributionReport { .. } => "getProjectAttributionReport",
            ApiRequest::GetProjectSpdxReport { .. } => "getProjectSpdxReport",
            ApiRequest::GenerateProjectReportAsync { .. } => "generateProjectReportAsync",
            ApiRequest::GetAsyncProcessStatus { .. } => "getAsyncProcessStatus",
            ApiRequest::DownloadAsyncReport { .. } => "downloadAsyncReport",
        }
    }

    /// Project token the request is about, if any
    pub fn project_token(&self) -> Option<&str> {
        match self {
            ApiRequest::GetProjectVitals { project_token, .. }
            | ApiRequest::GetProjectAttributionReport { project_token, .. }
            | ApiRequest::GetProjectSpdxReport { project_token, .. }
            | ApiRequest::GenerateProjectReportAsync { project_token, .. } => Some(project_token),
            _ => None,
        }
    }

    /// Product token the request is about, if any
    pub fn product_token(&self) -> Option<&str> {
        match self {
            ApiRequest::GetAllProjects { product_token, .. } => Some(product_token),
            _ => None,
        }
    }

    /// Async job the request is about, if any
    pub fn job_uuid(&self) -> Option<&str> {
        match self {
            ApiRequest::GetAsyncProcessStatus { uuid, .. } => Some(uuid),
            ApiRequest::DownloadAsyncReport {
                report_status_uuid, ..
            } => Some(report_status_uuid),
            _ => None,
        }
    }

    /// Response mode the service uses for this request
    pub fn response_mode(&self) -> ResponseMode {
        match self {
            ApiRequest::DownloadAsyncReport { .. } => ResponseMode::Download,
            _ => ResponseMode::Text,
        }
    }
}

/// MendApi port for calling the Mend service
///
/// Implementations never fail: transport errors and non-success statuses
/// are logged and reported as `ApiResponse::Empty`.
#[async_trait]
pub trait MendApi: Send + Sync {
    /// Sends one request
    ///
    /// # Arguments
    /// * `request` - The request to send
    /// * `mode` - Whether the body is read as text or as raw bytes
    async fn call(&self, request: &ApiRequest, mode: ResponseMode) -> ApiResponse;

    /// Sends a text request and parses the JSON body into `T`
    async fn call_json<T>(&self, request: &ApiRequest) -> Option<T>
    where
        T: DeserializeOwned + Send,
    {
        self.call(request, ResponseMode::Text).await.parse()
    }
}
