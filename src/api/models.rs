use reqwest::Method;
use serde_json::Value;
use thiserror::Error;

/// A single request handed to a [`Transport`](super::Transport)
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// What the transport observed for one request
#[derive(Debug, Clone, PartialEq)]
pub enum RawOutcome {
    /// The server answered and the transport accepted the response
    HttpSuccess { status: u16, data: Option<Value> },
    /// The request was rejected. `status` is the server's status code when a
    /// response was received at all, `None` for connection-level failures.
    /// The error body is never kept as data; only its message survives.
    HttpFailure {
        status: Option<u16>,
        message: Option<String>,
    },
    /// Error raised by the application rather than by HTTP
    PlainError(String),
}

impl RawOutcome {
    pub fn status(&self) -> Option<u16> {
        match self {
            RawOutcome::HttpSuccess { status, .. } => Some(*status),
            RawOutcome::HttpFailure { status, .. } => *status,
            RawOutcome::PlainError(_) => None,
        }
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            RawOutcome::HttpSuccess { data, .. } => data.as_ref(),
            RawOutcome::HttpFailure { .. } | RawOutcome::PlainError(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            RawOutcome::HttpSuccess { .. } => None,
            RawOutcome::HttpFailure { message, .. } => message.as_deref(),
            RawOutcome::PlainError(message) => Some(message),
        }
    }

    /// Transport failure with no response from the server
    pub fn transport_failure(message: impl Into<String>) -> Self {
        RawOutcome::HttpFailure {
            status: None,
            message: Some(message.into()),
        }
    }
}

/// Typed error for callers that want `?` instead of inspecting an envelope
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401 Unauthorized
    #[error("Unauthorized")]
    Unauthorized,
    /// 403 Forbidden
    #[error("Forbidden")]
    Forbidden,
    /// Any other non-200 status
    #[error("Server returned code {0}")]
    Status(u16),
    /// Network/request error, or an application error string
    #[error("{0}")]
    Request(String),
    /// Successful response without a body
    #[error("Server returned no data")]
    MissingPayload,
    /// Body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Deserialization(String),
}
