/// Use cases module containing application business logic orchestration
mod collect_licenses;
mod export_sbom;
mod generate_report;
mod resolve_scope;

#[cfg(test)]
mod test_support;

pub use collect_licenses::CollectLicensesUseCase;
pub use export_sbom::ExportSbomUseCase;
pub use generate_report::{GenerateReportUseCase, DEFAULT_POLL_INTERVAL};
pub use resolve_scope::ResolveScopeUseCase;
