use crate::sbom_generation::domain::license_index::{LICENSE_REF_PREFIX, PACKAGE_REF_PREFIX};
use crate::sbom_generation::domain::LicenseIndex;
use serde_json::{json, Value};
use std::collections::HashSet;

const PACKAGES_FIELD: &str = "packages";
const SPDX_ID_FIELD: &str = "SPDXID";
const EXTRACTED_LICENSES_FIELD: &str = "hasExtractedLicensingInfos";

/// Merges collected license text into an SPDX document.
///
/// For each package whose `SPDXID` has an index entry, one
/// `hasExtractedLicensingInfos` item is appended. Packages without an entry
/// are left alone.
pub struct SpdxEnricher;

impl SpdxEnricher {
    /// Returns the number of licensing entries appended
    pub fn enrich(document: &mut Value, licenses: &LicenseIndex) -> usize {
        let entries: Vec<Value> = Self::package_ids(document)
            .into_iter()
            .filter_map(|spdx_id| {
                let text = licenses.get(&spdx_id)?;
                Some(Self::extracted_licensing_info(&spdx_id, &text))
            })
            .collect();

        if entries.is_empty() {
            return 0;
        }

        let Some(object) = document.as_object_mut() else {
            return 0;
        };
        let infos = object
            .entry(EXTRACTED_LICENSES_FIELD)
            .or_insert_with(|| Value::Array(Vec::new()));
        if infos.is_null() {
            *infos = Value::Array(Vec::new());
        }

        match infos.as_array_mut() {
            Some(infos) => {
                let appended = entries.len();
                infos.extend(entries);
                appended
            }
            None => {
                log::debug!(
                    "'{}' is not a list; license text not merged",
                    EXTRACTED_LICENSES_FIELD
                );
                0
            }
        }
    }

    /// Distinct package identifiers in document order
    fn package_ids(document: &Value) -> Vec<String> {
        let mut seen = HashSet::new();
        document
            .get(PACKAGES_FIELD)
            .and_then(Value::as_array)
            .map(|packages| {
                packages
                    .iter()
                    .filter_map(|package| package.get(SPDX_ID_FIELD)?.as_str())
                    .filter(|id| seen.insert(id.to_string()))
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn extracted_licensing_info(spdx_id: &str, text: &str) -> Value {
        let license_ref = spdx_id.replace(PACKAGE_REF_PREFIX, LICENSE_REF_PREFIX);
        json!({
            "licenseId": license_ref,
            "extractedText": text,
            "name": license_ref,
        })
    }
}
