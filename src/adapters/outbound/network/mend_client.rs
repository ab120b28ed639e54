use crate::ports::outbound::{ApiRequest, ApiResponse, MendApi, ResponseMode};
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

/// Agent name reported to the service with every request
pub const AGENT_NAME: &str = "ps-sbom-export-cli";

const API_PATH: &str = "/api/v1.4";
const SECURE_SCHEME: &str = "https://";
const INSECURE_SCHEME: &str = "http://";

/// Level at which non-success HTTP statuses are logged
const FAILED_STATUS_LEVEL: log::Level = log::Level::Warn;

/// MendApiClient adapter for the Mend HTTP API
///
/// Every request is a JSON POST to `<base>/api/v1.4` carrying an
/// `agentInfo` object. Failures never surface as errors: they are logged
/// and returned as `ApiResponse::Empty`, and there is no retry.
pub struct MendApiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl MendApiClient {
    const CONNECT_TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for the given service URL
    ///
    /// # Arguments
    /// * `base_url` - Service URL as configured, e.g. `saas.mend.io` or
    ///   `http://app.mend.io/Wss/WSS.html`
    pub fn new(base_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("mend-sbom-export/{}", version);
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(Self::CONNECT_TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: Self::endpoint_for(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Forces the secure scheme and keeps only the host part.
    ///
    /// `saas.mend.io` -> `https://saas.mend.io`,
    /// `http://app.mend.io/Wss/WSS.html` -> `https://app.mend.io`
    pub fn normalize_base_url(url: &str) -> String {
        let trimmed = url.trim();
        let without_scheme = trimmed
            .strip_prefix(SECURE_SCHEME)
            .or_else(|| trimmed.strip_prefix(INSECURE_SCHEME))
            .unwrap_or(trimmed);
        let host = without_scheme
            .split('/')
            .next()
            .unwrap_or(without_scheme);

        format!("{}{}", SECURE_SCHEME, host)
    }

    pub fn endpoint_for(base_url: &str) -> String {
        format!("{}{}", Self::normalize_base_url(base_url), API_PATH)
    }

    /// Serializes the request and injects the agent identity
    pub fn request_body(request: &ApiRequest) -> Value {
        let mut body = serde_json::to_value(request).unwrap_or_else(|_| json!({}));
        if let Some(object) = body.as_object_mut() {
            object.insert(
                "agentInfo".to_string(),
                json!({
                    "agent": AGENT_NAME,
                    "agentVersion": env!("CARGO_PKG_VERSION"),
                }),
            );
        }
        body
    }

    async fn send(&self, request: &ApiRequest, mode: ResponseMode) -> Result<ApiResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&Self::request_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::log!(
                FAILED_STATUS_LEVEL,
                "[{}] Mend API returned status code {}",
                request.request_type(),
                status
            );
            return Ok(ApiResponse::Empty);
        }

        let body = match mode {
            ResponseMode::Text => ApiResponse::Text(response.text().await?),
            ResponseMode::Download => ApiResponse::Bytes(response.bytes().await?.to_vec()),
        };
        Ok(body)
    }
}

#[async_trait]
impl MendApi for MendApiClient {
    async fn call(&self, request: &ApiRequest, mode: ResponseMode) -> ApiResponse {
        match self.send(request, mode).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("[{}] {}", request.request_type(), e);
                ApiResponse::Empty
            }
        }
    }
}
