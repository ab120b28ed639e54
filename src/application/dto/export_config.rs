use crate::application::dispatcher::DEFAULT_WIDTH;
use crate::sbom_generation::domain::token::{is_well_formed, split_token_list};
use crate::sbom_generation::domain::ReportFormat;
use crate::shared::error::SbomExportError;
use crate::shared::Result;
use std::fmt;
use std::path::PathBuf;

/// Names under which invalid parameters are reported
pub const USER_KEY_FIELD: &str = "MEND_USERKEY";
pub const API_KEY_FIELD: &str = "MEND_APIKEY";
pub const URL_FIELD: &str = "MEND_URL";
pub const PRODUCT_TOKEN_FIELD: &str = "MEND_PRODUCTTOKEN";
pub const PROJECT_TOKEN_FIELD: &str = "MEND_PROJECTTOKEN";
pub const EXCLUDE_TOKEN_FIELD: &str = "MEND_EXCLUDETOKEN";

const MASK: &str = "******";

/// ExportConfig - validated settings of one export run
///
/// Immutable once built; shared with every phase of the run.
#[derive(Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub user_key: String,
    /// Organization API key
    pub org_token: String,
    pub url: String,
    pub product_tokens: Vec<String>,
    pub project_tokens: Vec<String>,
    pub exclude_tokens: Vec<String>,
    pub output_dir: PathBuf,
    pub format: ReportFormat,
    pub include_license_text: bool,
    /// Number of projects processed at the same time
    pub threads: usize,
}

impl ExportConfig {
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }
}

impl fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportConfig")
            .field("user_key", &MASK)
            .field("org_token", &MASK)
            .field("url", &self.url)
            .field("product_tokens", &self.product_tokens)
            .field("project_tokens", &self.project_tokens)
            .field("exclude_tokens", &self.exclude_tokens)
            .field("output_dir", &self.output_dir)
            .field("format", &self.format)
            .field("include_license_text", &self.include_license_text)
            .field("threads", &self.threads)
            .finish()
    }
}

/// Collects raw settings from every source, then validates them in one go.
///
/// Every offending field is reported in a single
/// `SbomExportError::InvalidConfiguration`; list fields are reported once
/// even when several of their entries are malformed.
#[derive(Debug, Default, Clone)]
pub struct ExportConfigBuilder {
    user_key: Option<String>,
    org_token: Option<String>,
    url: Option<String>,
    product_tokens: Option<String>,
    project_tokens: Option<String>,
    exclude_tokens: Option<String>,
    output_dir: Option<PathBuf>,
    format: Option<String>,
    include_license_text: bool,
    threads: Option<String>,
}

impl ExportConfigBuilder {
    pub fn user_key(mut self, value: Option<String>) -> Self {
        self.user_key = value;
        self
    }

    pub fn org_token(mut self, value: Option<String>) -> Self {
        self.org_token = value;
        self
    }

    pub fn url(mut self, value: Option<String>) -> Self {
        self.url = value;
        self
    }

    /// Comma separated product tokens
    pub fn product_tokens(mut self, value: Option<String>) -> Self {
        self.product_tokens = value;
        self
    }

    /// Comma separated project tokens
    pub fn project_tokens(mut self, value: Option<String>) -> Self {
        self.project_tokens = value;
        self
    }

    /// Comma separated product tokens whose projects are left out
    pub fn exclude_tokens(mut self, value: Option<String>) -> Self {
        self.exclude_tokens = value;
        self
    }

    pub fn output_dir(mut self, value: Option<PathBuf>) -> Self {
        self.output_dir = value;
        self
    }

    pub fn format(mut self, value: Option<String>) -> Self {
        self.format = value;
        self
    }

    pub fn include_license_text(mut self, value: bool) -> Self {
        self.include_license_text = value;
        self
    }

    pub fn threads(mut self, value: Option<String>) -> Self {
        self.threads = value;
        self
    }

    pub fn build(self) -> Result<ExportConfig> {
        let mut invalid = Vec::new();

        let user_key = Self::required_token(self.user_key, USER_KEY_FIELD, &mut invalid);
        let org_token = Self::required_token(self.org_token, API_KEY_FIELD, &mut invalid);
        let url = match non_blank(self.url) {
            Some(url) => url,
            None => {
                invalid.push(URL_FIELD.to_string());
                String::new()
            }
        };
        let product_tokens =
            Self::token_list(self.product_tokens, PRODUCT_TOKEN_FIELD, &mut invalid);
        let project_tokens =
            Self::token_list(self.project_tokens, PROJECT_TOKEN_FIELD, &mut invalid);
        let exclude_tokens =
            Self::token_list(self.exclude_tokens, EXCLUDE_TOKEN_FIELD, &mut invalid);

        if !invalid.is_empty() {
            return Err(SbomExportError::InvalidConfiguration { fields: invalid }.into());
        }

        let format = match non_blank(self.format) {
            Some(value) => value
                .parse::<ReportFormat>()
                .map_err(|_| SbomExportError::UnsupportedFormat { value })?,
            None => ReportFormat::Spdx,
        };

        Ok(ExportConfig {
            user_key,
            org_token,
            url,
            product_tokens,
            project_tokens,
            exclude_tokens,
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            format,
            include_license_text: self.include_license_text,
            threads: parse_threads(self.threads.as_deref()),
        })
    }

    fn required_token(value: Option<String>, field: &str, invalid: &mut Vec<String>) -> String {
        match non_blank(value) {
            Some(token) if is_well_formed(&token) => token,
            _ => {
                invalid.push(field.to_string());
                String::new()
            }
        }
    }

    fn token_list(value: Option<String>, field: &str, invalid: &mut Vec<String>) -> Vec<String> {
        let tokens = value.as_deref().map(split_token_list).unwrap_or_default();
        if tokens.iter().any(|token| !is_well_formed(token)) {
            invalid.push(field.to_string());
        }
        tokens
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Worker count; anything that is not a positive number means the default
pub fn parse_threads(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_KEY: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ01";
    const ORG_TOKEN: &str = "5f0c8a2e-1b3d-4c6e-9f7a-2d4b6c8e0a1f";

    fn valid_builder() -> ExportConfigBuilder {
        ExportConfig::builder()
            .user_key(Some(USER_KEY.to_string()))
            .org_token(Some(ORG_TOKEN.to_string()))
            .url(Some("saas.mend.io".to_string()))
    }

    fn invalid_fields(result: Result<ExportConfig>) -> Vec<String> {
        match result.unwrap_err().downcast::<SbomExportError>() {
            Ok(SbomExportError::InvalidConfiguration { fields }) => fields,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_build_with_defaults() {
        let config = valid_builder().build().unwrap();

        assert_eq!(config.format, ReportFormat::Spdx);
        assert_eq!(config.threads, 10);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(!config.include_license_text);
        assert!(config.project_tokens.is_empty());
    }

    #[test]
    fn test_build_splits_token_lists() {
        let config = valid_builder()
            .project_tokens(Some(format!("{} , {},", ORG_TOKEN, USER_KEY)))
            .build()
            .unwrap();

        assert_eq!(config.project_tokens, vec![ORG_TOKEN, USER_KEY]);
    }

    #[test]
    fn test_malformed_user_key_is_reported() {
        let result = valid_builder().user_key(Some("short".to_string())).build();
        assert_eq!(invalid_fields(result), vec![USER_KEY_FIELD]);
    }

    #[test]
    fn test_every_offending_field_is_reported_once() {
        let result = ExportConfig::builder()
            .project_tokens(Some("bad1,bad2".to_string()))
            .exclude_tokens(Some(format!("{},bad", ORG_TOKEN)))
            .build();

        assert_eq!(
            invalid_fields(result),
            vec![
                USER_KEY_FIELD,
                API_KEY_FIELD,
                URL_FIELD,
                PROJECT_TOKEN_FIELD,
                EXCLUDE_TOKEN_FIELD
            ]
        );
    }

    #[test]
    fn test_unsupported_format() {
        let result = valid_builder().format(Some("xml".to_string())).build();
        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<SbomExportError>(),
            Some(SbomExportError::UnsupportedFormat { value }) if value == "xml"
        ));
    }

    #[test]
    fn test_format_is_case_insensitive() {
        let config = valid_builder().format(Some("CDX".to_string())).build().unwrap();
        assert_eq!(config.format, ReportFormat::CycloneDx);
    }

    #[test]
    fn test_parse_threads() {
        assert_eq!(parse_threads(Some("4")), 4);
        assert_eq!(parse_threads(Some("0")), 10);
        assert_eq!(parse_threads(Some("many")), 10);
        assert_eq!(parse_threads(None), 10);
    }

    #[test]
    fn test_debug_masks_credentials() {
        let config = valid_builder().build().unwrap();
        let debug = format!("{:?}", config);

        assert!(!debug.contains(USER_KEY));
        assert!(!debug.contains(ORG_TOKEN));
        assert!(debug.contains("******"));
        assert!(debug.contains("saas.mend.io"));
    }
}
