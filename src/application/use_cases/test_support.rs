//! Test doubles shared by the use case tests

use crate::application::dto::ExportConfig;
use crate::ports::outbound::{ApiRequest, ApiResponse, MendApi, ProgressReporter, ReportWriter, ResponseMode};
use crate::sbom_generation::domain::ReportFormat;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub const USER_KEY: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ01";
pub const ORG_TOKEN: &str = "5f0c8a2e-1b3d-4c6e-9f7a-2d4b6c8e0a1f";

type Handler = Box<dyn Fn(&ApiRequest) -> ApiResponse + Send + Sync>;

/// MendApi double answering from a handler and recording every request
pub struct ScriptedMendApi {
    handler: Handler,
    calls: Mutex<Vec<ApiRequest>>,
}

impl ScriptedMendApi {
    pub fn new(handler: impl Fn(&ApiRequest) -> ApiResponse + Send + Sync + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_of(&self, request_type: &str) -> Vec<ApiRequest> {
        self.calls()
            .into_iter()
            .filter(|call| call.request_type() == request_type)
            .collect()
    }
}

#[async_trait]
impl MendApi for ScriptedMendApi {
    async fn call(&self, request: &ApiRequest, _mode: ResponseMode) -> ApiResponse {
        self.calls.lock().unwrap().push(request.clone());
        (self.handler)(request)
    }
}

pub fn json(value: Value) -> ApiResponse {
    ApiResponse::Text(value.to_string())
}

/// ReportWriter double keeping documents in memory
#[derive(Default)]
pub struct MemoryReportWriter {
    pub reports: Mutex<HashMap<String, Value>>,
}

impl MemoryReportWriter {
    pub fn report(&self, file_name: &str) -> Option<Value> {
        self.reports.lock().unwrap().get(file_name).cloned()
    }

    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.reports.lock().unwrap().keys().cloned().collect();
        names.sort();
        names
    }
}

impl ReportWriter for MemoryReportWriter {
    fn prepare(&self) -> Result<()> {
        Ok(())
    }

    fn write_report(&self, file_name: &str, document: &Value) -> Result<PathBuf> {
        self.reports
            .lock()
            .unwrap()
            .insert(file_name.to_string(), document.clone());
        Ok(PathBuf::from("out").join(file_name))
    }
}

#[derive(Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, _message: &str) {}
    fn report_completion(&self, _message: &str) {}
}

/// 64 character token derived from a short tag, e.g. `token("p1")`
pub fn token(tag: &str) -> String {
    format!("{:0>64}", tag)
}

pub fn config(format: ReportFormat) -> ExportConfig {
    ExportConfig {
        user_key: USER_KEY.to_string(),
        org_token: ORG_TOKEN.to_string(),
        url: "saas.mend.io".to_string(),
        product_tokens: Vec::new(),
        project_tokens: Vec::new(),
        exclude_tokens: Vec::new(),
        output_dir: PathBuf::from("out"),
        format,
        include_license_text: false,
        threads: 4,
    }
}

pub fn shared(api: ScriptedMendApi) -> Arc<ScriptedMendApi> {
    Arc::new(api)
}
