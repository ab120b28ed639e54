use crate::sbom_generation::domain::ReportDocument;
use crate::shared::Result;
use anyhow::Context;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Opens a downloaded report bundle in memory.
///
/// The bundle holds a single JSON report. Its first member supplies both
/// the document and the output file name.
pub struct BundleReader;

impl BundleReader {
    pub fn read(bytes: &[u8]) -> Result<ReportDocument> {
        let mut archive =
            ZipArchive::new(Cursor::new(bytes)).context("Downloaded report is not a zip bundle")?;

        if archive.len() == 0 {
            anyhow::bail!("Downloaded report bundle is empty");
        }
        if archive.len() > 1 {
            log::debug!(
                "Report bundle has {} members, using the first one",
                archive.len()
            );
        }

        let mut member = archive
            .by_index(0)
            .context("Failed to open report bundle member")?;
        let file_name = member.name().to_string();

        let mut content = String::new();
        member
            .read_to_string(&mut content)
            .with_context(|| format!("Failed to read '{}' from report bundle", file_name))?;

        let document = serde_json::from_str(&content)
            .with_context(|| format!("'{}' in report bundle is not valid JSON", file_name))?;

        Ok(ReportDocument::new(file_name, document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn bundle(members: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in members {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_read_single_member() {
        let bytes = bundle(&[("web-cyclonedx.json", r#"{"bomFormat": "CycloneDX"}"#)]);
        let document = BundleReader::read(&bytes).unwrap();

        assert_eq!(document.file_name(), "web-cyclonedx.json");
        assert_eq!(document.content()["bomFormat"], "CycloneDX");
    }

    #[test]
    fn test_read_uses_first_member() {
        let bytes = bundle(&[("first.json", r#"{"n": 1}"#), ("second.json", r#"{"n": 2}"#)]);
        let document = BundleReader::read(&bytes).unwrap();

        assert_eq!(document.file_name(), "first.json");
        assert_eq!(document.content()["n"], 1);
    }

    #[test]
    fn test_read_rejects_non_zip() {
        let result = BundleReader::read(b"{\"not\": \"a zip\"}");
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("not a zip bundle"));
    }

    #[test]
    fn test_read_rejects_empty_bundle() {
        let result = BundleReader::read(&bundle(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_rejects_invalid_json() {
        let result = BundleReader::read(&bundle(&[("bom.json", "not json")]));
        assert!(format!("{:#}", result.unwrap_err()).contains("not valid JSON"));
    }
}
