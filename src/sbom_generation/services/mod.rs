mod attribution_parser;
mod bundle_reader;
mod cyclonedx_enricher;
mod spdx_enricher;

pub use attribution_parser::AttributionParser;
pub use bundle_reader::BundleReader;
pub use cyclonedx_enricher::CycloneDxEnricher;
pub use spdx_enricher::SpdxEnricher;
