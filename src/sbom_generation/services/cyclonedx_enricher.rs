use crate::sbom_generation::domain::LicenseIndex;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};

/// Attaches collected license text to CycloneDX components as license
/// evidence.
///
/// For every component license whose text is in the index, an evidence
/// entry carrying the base64 encoded text is added under
/// `component.evidence.licenses`.
pub struct CycloneDxEnricher;

impl CycloneDxEnricher {
    /// Returns the number of evidence entries attached
    pub fn enrich(document: &mut Value, licenses: &LicenseIndex) -> usize {
        let Some(components) = document
            .get_mut("components")
            .and_then(Value::as_array_mut)
        else {
            return 0;
        };

        components
            .iter_mut()
            .map(|component| Self::enrich_component(component, licenses))
            .sum()
    }

    fn enrich_component(component: &mut Value, licenses: &LicenseIndex) -> usize {
        let Some(name) = component.get("name").and_then(Value::as_str) else {
            return 0;
        };

        let evidence: Vec<Value> = component
            .get("licenses")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| {
                        let license_name = Self::license_name(entry);
                        let text = licenses.lookup_license(name, &license_name)?;
                        Some(Self::evidence_entry(&license_name, &text))
                    })
                    .collect()
            })
            .unwrap_or_default();

        if evidence.is_empty() {
            return 0;
        }

        let attached = evidence.len();
        if let Some(object) = component.as_object_mut() {
            object.insert("evidence".to_string(), json!({ "licenses": evidence }));
        }
        attached
    }

    /// `license.id`, then `license.name`, then empty
    pub fn license_name(entry: &Value) -> String {
        let license = entry.get("license");
        license
            .and_then(|l| l.get("id"))
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .or_else(|| license.and_then(|l| l.get("name")).and_then(Value::as_str))
            .unwrap_or_default()
            .to_string()
    }

    fn evidence_entry(license_name: &str, text: &str) -> Value {
        json!({
            "license": {
                "name": license_name,
                "text": {
                    "contentType": "text/plain",
                    "encoding": "base64",
                    "content": STANDARD.encode(text.as_bytes()),
                }
            }
        })
    }
}
