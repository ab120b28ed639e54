use crate::sbom_generation::domain::api_model::{AttributionLibrary, AttributionReportResponse};
use crate::sbom_generation::domain::{LicenseIndex, ReportFormat};
use serde_json::Value;

/// Turns a project attribution report into license index entries.
///
/// SPDX exports key one entry per package holding every license text of
/// the package joined by newlines. CycloneDX exports key one entry per
/// package license.
pub struct AttributionParser;

impl AttributionParser {
    /// Extracts `(key, text)` pairs from the report, in report order
    pub fn extract(report: &AttributionReportResponse, format: ReportFormat) -> Vec<(String, String)> {
        let Some(detail) = report.detail.as_ref() else {
            return Vec::new();
        };

        detail
            .iter()
            .flat_map(|(group, libraries)| Self::libraries(group, libraries))
            .flat_map(|library| match format {
                ReportFormat::Spdx => Self::package_entry(&library).into_iter().collect::<Vec<_>>(),
                ReportFormat::CycloneDx => Self::package_license_entries(&library),
            })
            .collect()
    }

    /// Reads one `detail` group; a group with an unexpected shape is skipped
    fn libraries(group: &str, value: &Value) -> Vec<AttributionLibrary> {
        match serde_json::from_value::<Vec<AttributionLibrary>>(value.clone()) {
            Ok(libraries) => libraries,
            Err(e) => {
                log::debug!("Skipping attribution group '{}': {}", group, e);
                Vec::new()
            }
        }
    }

    fn package_entry(library: &AttributionLibrary) -> Option<(String, String)> {
        let text = library
            .licenses
            .iter()
            .map(|license| license.text_or_name())
            .collect::<Vec<_>>()
            .join("\n");

        if text.is_empty() {
            return None;
        }
        Some((LicenseIndex::package_key(&library.library), text))
    }

    fn package_license_entries(library: &AttributionLibrary) -> Vec<(String, String)> {
        library
            .licenses
            .iter()
            .map(|license| {
                (
                    LicenseIndex::package_license_key(&library.library, &license.license),
                    license.text_or_name().to_string(),
                )
            })
            .collect()
    }
}
