use reqwest::{Method, Url};
use serde_json::Value;
use tracing::debug;

use super::models::{ApiRequest, RawOutcome};
use super::response::ApiResponse;
use super::transport::Transport;

/// Client for the money-graph backend
///
/// Every operation resolves to an [`ApiResponse`]; transport errors are
/// never returned directly.
pub struct FinanceClient<T: Transport> {
    transport: T,
}

impl<T: Transport> FinanceClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET /api/dbinfo
    ///
    /// Name and other aggregate information about the loaded database.
    pub async fn get_db_info(&self) -> ApiResponse {
        self.get("/api/dbinfo").await
    }

    /// GET /api/groups
    pub async fn get_groups(&self) -> ApiResponse {
        self.get("/api/groups").await
    }

    /// GET /api/groups/{group_id}/entries
    pub async fn get_group_entries(&self, group_id: &str) -> ApiResponse {
        if group_id.is_empty() {
            return ApiResponse::from_error("Group id must not be empty");
        }
        match group_entries_path(group_id) {
            Some(path) => self.get(&path).await,
            None => ApiResponse::from_error(format!("Invalid group id: {}", group_id)),
        }
    }

    pub async fn get(&self, path: &str) -> ApiResponse {
        self.handle(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn post(&self, path: &str, body: Value) -> ApiResponse {
        self.handle(ApiRequest::new(Method::POST, path).with_body(body))
            .await
    }

    pub async fn put(&self, path: &str, body: Value) -> ApiResponse {
        self.handle(ApiRequest::new(Method::PUT, path).with_body(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> ApiResponse {
        self.handle(ApiRequest::new(Method::DELETE, path)).await
    }

    async fn handle(&self, request: ApiRequest) -> ApiResponse {
        let method = request.method.clone();
        let path = request.path.clone();

        let outcome: RawOutcome = self.transport.send(request).await;
        let response = ApiResponse::from_outcome(outcome);
        debug!("{} {} -> {}", method, path, response.message());
        response
    }
}

/// Path of a group's entries with the id percent-encoded as one segment.
/// `.` and `..` would be dropped by URL normalization and are rejected.
fn group_entries_path(group_id: &str) -> Option<String> {
    if group_id == "." || group_id == ".." {
        return None;
    }
    let mut url = Url::parse("http://localhost/").ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(["api", "groups", group_id, "entries"]);
    Some(url.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_groups_success() {
        let transport = FakeTransport::new().route(
            "/api/groups",
            RawOutcome::HttpSuccess {
                status: 200,
                data: Some(json!([{"id": 1, "name": "Checking"}])),
            },
        );
        let client = FinanceClient::new(transport);

        let response = client.get_groups().await;
        assert!(response.is_success());
        assert_eq!(response.payload().unwrap()[0]["name"], "Checking");

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].path, "/api/groups");
    }

    #[tokio::test]
    async fn test_get_db_info_forbidden() {
        let transport = FakeTransport::new().route(
            "/api/dbinfo",
            RawOutcome::HttpFailure {
                status: Some(403),
                message: Some("Request failed with status code 403".to_string()),
            },
        );
        let client = FinanceClient::new(transport);

        let response = client.get_db_info().await;
        assert_eq!(response.code(), Some(403));
        assert!(response.is_forbidden());
        assert!(response.is_error());
        assert_eq!(response.message(), "Forbidden");
    }

    #[tokio::test]
    async fn test_transport_failure_is_envelope() {
        let transport = FakeTransport::new().route(
            "/api/dbinfo",
            RawOutcome::transport_failure("Request failed: connection refused"),
        );
        let client = FinanceClient::new(transport);

        let response = client.get_db_info().await;
        assert!(response.is_error());
        assert_eq!(response.code(), None);
        assert_eq!(response.message(), "Request failed: connection refused");
    }

    #[tokio::test]
    async fn test_group_entries_path_is_encoded() {
        let client = FinanceClient::new(FakeTransport::new());

        let response = client.get_group_entries("Giro Konto/1").await;
        assert_eq!(response.code(), Some(404));

        let requests = client.transport().requests();
        assert_eq!(requests[0].path, "/api/groups/Giro%20Konto%2F1/entries");
    }

    #[tokio::test]
    async fn test_empty_group_id_skips_request() {
        let client = FinanceClient::new(FakeTransport::new());

        let response = client.get_group_entries("").await;
        assert!(response.result().is_none());
        assert_eq!(response.message(), "Group id must not be empty");
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_write_helpers_send_body() {
        let client = FinanceClient::new(FakeTransport::new());

        client.post("/api/groups", json!({"name": "Savings"})).await;
        client.put("/api/groups/2", json!({"name": "Savings"})).await;
        client.delete("/api/groups/2").await;

        let requests = client.transport().requests();
        let methods: Vec<Method> = requests.iter().map(|r| r.method.clone()).collect();
        assert_eq!(methods, vec![Method::POST, Method::PUT, Method::DELETE]);
        assert_eq!(requests[0].body, Some(json!({"name": "Savings"})));
        assert!(requests[2].body.is_none());
    }

    #[test]
    fn test_group_entries_path() {
        assert_eq!(
            group_entries_path("abc-1_2.3~").as_deref(),
            Some("/api/groups/abc-1_2.3~/entries")
        );
        assert_eq!(
            group_entries_path("a b?#").as_deref(),
            Some("/api/groups/a%20b%3F%23/entries")
        );
        assert_eq!(
            group_entries_path("50%").as_deref(),
            Some("/api/groups/50%25/entries")
        );
        assert_eq!(group_entries_path(".."), None);
    }

    #[tokio::test]
    async fn test_dot_group_id_skips_request() {
        let client = FinanceClient::new(FakeTransport::new());

        let response = client.get_group_entries("..").await;
        assert!(response.result().is_none());
        assert_eq!(response.message(), "Invalid group id: ..");
        assert!(client.transport().requests().is_empty());
    }
}
