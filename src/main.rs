use mend_sbom_export::adapters::outbound::console::StderrProgressReporter;
use mend_sbom_export::adapters::outbound::filesystem::FileSystemReportWriter;
use mend_sbom_export::adapters::outbound::network::MendApiClient;
use mend_sbom_export::application::dto::ExportSummary;
use mend_sbom_export::application::use_cases::ExportSbomUseCase;
use mend_sbom_export::cli::Args;
use mend_sbom_export::config::{discover_config, load_config_from_path, resolve_export_config};
use mend_sbom_export::shared::error::{ExitCode, SbomExportError};
use mend_sbom_export::shared::logging::init_logging;
use mend_sbom_export::shared::Result;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    init_logging();
    print_banner();

    let code = match run().await {
        Ok(summary) => {
            log::debug!("Written files: {:?}", summary.written_files());
            ExitCode::Success
        }
        Err(e) => report_error(&e),
    };

    process::exit(code.as_i32());
}

async fn run() -> Result<ExportSummary> {
    // Parse command-line arguments; usage errors exit here with clap's code
    let args = Args::parse_args();

    let config_file = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let config = resolve_export_config(&args, config_file.as_ref(), |name| {
        std::env::var(name).ok()
    })?;
    let config = Arc::new(config);

    // Create adapters (Dependency Injection)
    let api = Arc::new(MendApiClient::new(&config.url)?);
    let writer = Arc::new(FileSystemReportWriter::new(config.output_dir.clone()));
    let progress_reporter = StderrProgressReporter::new();

    let use_case = ExportSbomUseCase::new(api, writer, progress_reporter);
    use_case.execute(config).await
}

fn print_banner() {
    let title = format!("Mend SBOM Export CLI {}", env!("CARGO_PKG_VERSION"));
    let frame = "=".repeat(title.len());
    log::info!("{}", frame);
    log::info!("{}", title);
    log::info!("{}", frame);
}

fn report_error(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<SbomExportError>() {
        Some(SbomExportError::InvalidConfiguration { fields }) => {
            log::error!("Missing or malformed configuration parameters:");
            for field in fields {
                log::error!("  {}", field);
            }
        }
        Some(e) => log::error!("{}", e),
        None => {
            log::error!("An error occurred: {}", error);
            for cause in error.chain().skip(1) {
                log::error!("Caused by: {}", cause);
            }
        }
    }

    error
        .downcast_ref::<SbomExportError>()
        .map(SbomExportError::exit_code)
        .unwrap_or(ExitCode::ApplicationError)
}
