use serde_json::Value;

/// Report flavour requested for every project of a run
///
/// `Spdx` is fetched synchronously; `CycloneDx` is produced by an
/// asynchronous job that is polled until it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Spdx,
    CycloneDx,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spdx" => Ok(ReportFormat::Spdx),
            "cdx" | "cyclonedx" => Ok(ReportFormat::CycloneDx),
            _ => Err(format!(
                "Invalid report type: {}. Please specify 'spdx' or 'cdx'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Spdx => write!(f, "spdx"),
            ReportFormat::CycloneDx => write!(f, "cdx"),
        }
    }
}

/// A parsed report and the file name it will be written under.
///
/// One instance per project per run. The content is mutated in place when
/// license text is merged in, then serialized as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    file_name: String,
    content: Value,
}

impl ReportDocument {
    pub fn new(file_name: impl Into<String>, content: Value) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut Value {
        &mut self.content
    }

    pub fn into_content(self) -> Value {
        self.content
    }
}
