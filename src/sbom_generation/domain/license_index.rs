use dashmap::DashMap;
use std::sync::Arc;

/// Prefix of package identifiers in SPDX documents and of index keys
pub const PACKAGE_REF_PREFIX: &str = "SPDXRef-PACKAGE-";

/// Prefix of extracted license identifiers written into SPDX documents
pub const LICENSE_REF_PREFIX: &str = "LicenseRef-";

/// Separator between package and license in CycloneDX index keys
const LICENSE_KEY_SEPARATOR: &str = "::";

/// License texts collected from attribution reports.
///
/// Keys are `SPDXRef-PACKAGE-<library>` for SPDX exports and
/// `SPDXRef-PACKAGE-<library>::<license>` for CycloneDX exports.
///
/// Clones share the same underlying map, so worker tasks can insert
/// concurrently while the collector keeps a handle to the result.
#[derive(Debug, Clone, Default)]
pub struct LicenseIndex {
    entries: Arc<DashMap<String, String>>,
}

impl LicenseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for a package in an SPDX export
    pub fn package_key(library: &str) -> String {
        format!("{}{}", PACKAGE_REF_PREFIX, library)
    }

    /// Key for a package license in a CycloneDX export
    pub fn package_license_key(library: &str, license: &str) -> String {
        format!(
            "{}{}{}{}",
            PACKAGE_REF_PREFIX, library, LICENSE_KEY_SEPARATOR, license
        )
    }

    /// Replaces identifier separators with spaces, e.g. `Apache-2.0` becomes `Apache 2.0`
    pub fn normalize_license_id(license: &str) -> String {
        license.replace(['-', '_'], " ")
    }

    pub fn insert(&self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Looks up the text of one license of a package, first by the exact
    /// license identifier, then by its normalized form.
    pub fn lookup_license(&self, library: &str, license: &str) -> Option<String> {
        self.get(&Self::package_license_key(library, license))
            .or_else(|| {
                let normalized = Self::normalize_license_id(license);
                self.get(&Self::package_license_key(library, &normalized))
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
