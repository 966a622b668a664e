//! In-memory transport for tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::models::{ApiRequest, RawOutcome};
use super::transport::Transport;

/// Answers requests from a fixed path table and records what was sent.
/// Unknown paths answer with a 404 failure.
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, RawOutcome>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, path: &str, outcome: RawOutcome) -> Self {
        self.routes.insert(path.to_string(), outcome);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> RawOutcome {
        let outcome = self
            .routes
            .get(&request.path)
            .cloned()
            .unwrap_or(RawOutcome::HttpFailure {
                status: Some(404),
                message: Some("Request failed with status code 404".to_string()),
            });
        self.requests.lock().unwrap().push(request);
        outcome
    }
}
