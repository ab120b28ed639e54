use async_trait::async_trait;
use mend_sbom_export::prelude::*;
use std::sync::Mutex;

type Handler = Box<dyn Fn(&ApiRequest) -> ApiResponse + Send + Sync>;

/// Mock MendApi for testing that answers from a handler and records requests
pub struct MockMendApi {
    handler: Handler,
    calls: Mutex<Vec<ApiRequest>>,
}

impl MockMendApi {
    pub fn new(handler: impl Fn(&ApiRequest) -> ApiResponse + Send + Sync + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every request fails as if the service were unreachable
    pub fn unreachable() -> Self {
        Self::new(|_| ApiResponse::Empty)
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_of(&self, request_type: &str) -> Vec<ApiRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.request_type() == request_type)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl MendApi for MockMendApi {
    async fn call(&self, request: &ApiRequest, _mode: ResponseMode) -> ApiResponse {
        self.calls.lock().unwrap().push(request.clone());
        (self.handler)(request)
    }
}
