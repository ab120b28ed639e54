//! Configuration sources for mend-sbom-export.
//!
//! Settings are merged from, highest precedence first: command line flags,
//! environment variables, the YAML config file `mend-sbom.config.yml`, and
//! defaults. Credentials are only taken from the command line or the
//! environment, never from the file.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::ExportConfig;
use crate::cli::Args;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "mend-sbom.config.yml";

/// Environment variables consulted for each setting, first non-empty wins
pub const USER_KEY_ENV: &[&str] = &["WS_USERKEY", "MEND_USERKEY"];
pub const API_KEY_ENV: &[&str] = &["MEND_APIKEY", "WS_APIKEY", "WS_TOKEN"];
pub const URL_ENV: &[&str] = &["WS_WSS_URL", "MEND_WSS_URL", "WS_URL", "MEND_URL"];
pub const PRODUCT_TOKEN_ENV: &[&str] = &["WS_PRODUCTTOKEN", "MEND_PRODUCTTOKEN"];
pub const PROJECT_TOKEN_ENV: &[&str] = &["WS_PROJECTTOKEN", "MEND_PROJECTTOKEN"];
pub const EXCLUDE_TOKEN_ENV: &[&str] = &["WS_EXCLUDETOKEN", "MEND_EXCLUDETOKEN"];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub product_tokens: Option<Vec<String>>,
    pub project_tokens: Option<Vec<String>>,
    pub exclude_tokens: Option<Vec<String>>,
    pub output_dir: Option<PathBuf>,
    #[serde(rename = "type")]
    pub report_type: Option<String>,
    pub include_license_text: Option<bool>,
    pub threads: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    let lists = [
        ("product_tokens", &config.product_tokens),
        ("project_tokens", &config.project_tokens),
        ("exclude_tokens", &config.exclude_tokens),
    ];
    for (name, tokens) in lists {
        let Some(tokens) = tokens else { continue };
        if let Some(i) = tokens.iter().position(|t| t.trim().is_empty()) {
            bail!(
                "Invalid config: {}[{}] must not be empty.\n\n\
                 💡 Hint: Remove the entry or fill in a token.",
                name,
                i
            );
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        match key.as_str() {
            "user_key" | "api_key" | "org_token" => log::warn!(
                "Config field '{}' is ignored: credentials are only read from flags or the environment",
                key
            ),
            _ => log::warn!("Unknown config field '{}' will be ignored.", key),
        }
    }
}

/// First non-empty value among the given environment variables
pub fn first_env<F>(lookup: &F, names: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
}

/// Merges every source into a validated `ExportConfig`.
///
/// `lookup` reads one environment variable; tests pass a map instead of
/// the process environment.
pub fn resolve_export_config<F>(
    args: &Args,
    file: Option<&ConfigFile>,
    lookup: F,
) -> Result<ExportConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let file_list = |pick: fn(&ConfigFile) -> &Option<Vec<String>>| {
        file.and_then(|f| pick(f).as_ref()).map(|tokens| tokens.join(","))
    };

    let include_license_text = match args.license_text.as_deref() {
        Some(value) => value.trim().eq_ignore_ascii_case("true"),
        None => file
            .and_then(|f| f.include_license_text)
            .unwrap_or(false),
    };

    let config = ExportConfig::builder()
        .user_key(args.user_key.clone().or_else(|| first_env(&lookup, USER_KEY_ENV)))
        .org_token(args.api_key.clone().or_else(|| first_env(&lookup, API_KEY_ENV)))
        .url(
            args.url
                .clone()
                .or_else(|| first_env(&lookup, URL_ENV))
                .or_else(|| file.and_then(|f| f.url.clone())),
        )
        .product_tokens(
            args.product
                .clone()
                .or_else(|| first_env(&lookup, PRODUCT_TOKEN_ENV))
                .or_else(|| file_list(|f| &f.product_tokens)),
        )
        .project_tokens(
            args.project
                .clone()
                .or_else(|| first_env(&lookup, PROJECT_TOKEN_ENV))
                .or_else(|| file_list(|f| &f.project_tokens)),
        )
        .exclude_tokens(
            args.exclude
                .clone()
                .or_else(|| first_env(&lookup, EXCLUDE_TOKEN_ENV))
                .or_else(|| file_list(|f| &f.exclude_tokens)),
        )
        .output_dir(
            args.out
                .clone()
                .or_else(|| file.and_then(|f| f.output_dir.clone())),
        )
        .format(
            args.report_type
                .clone()
                .or_else(|| file.and_then(|f| f.report_type.clone())),
        )
        .include_license_text(include_license_text)
        .threads(
            args.threads
                .clone()
                .or_else(|| file.and_then(|f| f.threads).map(|n| n.to_string())),
        )
        .build()?;

    log::debug!("Resolved configuration: {:?}", config);
    Ok(config)
}
