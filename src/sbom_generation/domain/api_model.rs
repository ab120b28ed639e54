//! Response shapes of the Mend API calls used by the export.
//!
//! Every field is optional: a missing field degrades the feature that
//! needs it instead of failing the whole response.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Response of `getProjectVitals` and `getOrganizationProjectVitals`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectVitalsResponse {
    #[serde(default)]
    pub project_vitals: Option<Vec<ProjectVitals>>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectVitals {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
}

impl ProjectVitals {
    /// `<productName>:<name>`, when both are present
    pub fn display_name(&self) -> Option<String> {
        Some(format!(
            "{}:{}",
            self.product_name.as_deref()?,
            self.name.as_deref()?
        ))
    }
}

/// Response of `getAllProjects`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductProjectsResponse {
    #[serde(default)]
    pub projects: Option<Vec<ProductProject>>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductProject {
    pub project_token: String,
}

/// Response of `generateProjectReportAsync` and `getAsyncProcessStatus`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncProcessResponse {
    #[serde(default)]
    pub async_process_status: Option<AsyncProcessStatus>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AsyncProcessStatus {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Response of `getProjectAttributionReport`.
///
/// `detail` groups libraries under arbitrary keys; groups are read one by
/// one so a malformed group only drops itself.
#[derive(Debug, Default, Deserialize)]
pub struct AttributionReportResponse {
    #[serde(default)]
    pub detail: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
pub struct AttributionLibrary {
    pub library: String,
    #[serde(default)]
    pub licenses: Vec<AttributionLicense>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributionLicense {
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub license_text: Option<String>,
}

impl AttributionLicense {
    /// License text, or the license name when the text is absent or empty
    pub fn text_or_name(&self) -> &str {
        match self.license_text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => &self.license,
        }
    }
}
