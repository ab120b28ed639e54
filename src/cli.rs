use clap::Parser;
use std::path::PathBuf;

/// Export SPDX or CycloneDX reports for Mend projects
///
/// Every option can also come from the environment (see `config`); values
/// given on the command line win.
#[derive(Parser, Debug, Default)]
#[command(name = "mend-sbom-export")]
#[command(version)]
#[command(
    about = "Export SPDX or CycloneDX SBOM reports for Mend projects",
    long_about = None
)]
pub struct Args {
    /// Mend user key
    #[arg(long = "user-key", aliases = ["userKey", "userkey"], value_name = "KEY")]
    pub user_key: Option<String>,

    /// Mend API key (organization token)
    #[arg(long = "api-key", aliases = ["apiKey", "apikey", "orgToken", "orgtoken"], value_name = "KEY")]
    pub api_key: Option<String>,

    /// Comma separated product tokens
    #[arg(long = "product", aliases = ["productToken", "producttoken"], value_name = "TOKENS")]
    pub product: Option<String>,

    /// Comma separated project tokens
    #[arg(long = "project", aliases = ["projectToken", "projecttoken"], value_name = "TOKENS")]
    pub project: Option<String>,

    /// Comma separated product tokens whose projects are skipped
    #[arg(long = "exclude", value_name = "TOKENS")]
    pub exclude: Option<String>,

    /// Mend server URL, e.g. saas.mend.io
    #[arg(long = "url", aliases = ["mendUrl", "mendurl"], value_name = "URL")]
    pub url: Option<String>,

    /// Output directory (defaults to the current directory)
    #[arg(long = "out", alias = "dir", value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Include license text in the reports: true or false
    #[arg(long = "licensetext", alias = "lictext", value_name = "BOOL")]
    pub license_text: Option<String>,

    /// Number of projects processed at the same time
    #[arg(long = "threads", value_name = "N")]
    pub threads: Option<String>,

    /// Report type: spdx or cdx
    #[arg(long = "type", value_name = "TYPE")]
    pub report_type: Option<String>,

    /// Path to a YAML config file (defaults to ./mend-sbom.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
