//! mend-sbom-export - SBOM export tool for Mend projects
//!
//! This library resolves a set of Mend projects (explicit projects, products,
//! or a whole organization, minus exclusions), then writes one SPDX or
//! CycloneDX report per project, optionally enriched with license text.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Report model, scope and license index
//! - **Application Layer** (`application`): Use cases and the concurrent dispatcher
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//! - **Configuration** (`cli`, `config`): Flags, environment and config file
//!
//! # Example
//!
//! ```no_run
//! use mend_sbom_export::prelude::*;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<()> {
//! let config = ExportConfig::builder()
//!     .user_key(std::env::var("MEND_USERKEY").ok())
//!     .org_token(std::env::var("MEND_APIKEY").ok())
//!     .url(Some("saas.mend.io".to_string()))
//!     .output_dir(Some(PathBuf::from("reports")))
//!     .build()?;
//!
//! // Create adapters
//! let api = Arc::new(MendApiClient::new(&config.url)?);
//! let writer = Arc::new(FileSystemReportWriter::new(config.output_dir.clone()));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case and execute
//! let use_case = ExportSbomUseCase::new(api, writer, progress_reporter);
//! let summary = use_case.execute(Arc::new(config)).await?;
//! println!("{} report(s) written", summary.created());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemReportWriter;
    pub use crate::adapters::outbound::network::MendApiClient;
    pub use crate::application::dispatcher::{DispatchError, DispatchOutcome, Dispatcher};
    pub use crate::application::dto::{ExportConfig, ExportSummary, ReportStatus};
    pub use crate::application::use_cases::{
        CollectLicensesUseCase, ExportSbomUseCase, GenerateReportUseCase, ResolveScopeUseCase,
    };
    pub use crate::ports::outbound::{
        ApiRequest, ApiResponse, MendApi, ProgressReporter, ReportWriter, ResponseMode,
    };
    pub use crate::sbom_generation::domain::{
        ExclusionSet, JobHandle, JobStatus, LicenseIndex, ProjectRef, ProjectScope,
        ReportDocument, ReportFormat,
    };
    pub use crate::sbom_generation::services::{
        AttributionParser, BundleReader, CycloneDxEnricher, SpdxEnricher,
    };
    pub use crate::shared::error::{ExitCode, SbomExportError};
    pub use crate::shared::Result;
}
