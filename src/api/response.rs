//! Normalized result of a single backend call
//!
//! Every client operation hands back an [`ApiResponse`] whether the request
//! succeeded, the server returned an error status, or the request never
//! reached the server. Callers classify it with the `is_*` methods and show
//! [`ApiResponse::message`] to the user.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::{ApiError, RawOutcome};

const STATUS_OK: u16 = 200;
const STATUS_UNAUTHORIZED: u16 = 401;
const STATUS_FORBIDDEN: u16 = 403;
const GENERIC_ERROR: &str = "An error occurred";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    message: Option<String>,
    result: Option<RawOutcome>,
    code: Option<u16>,
    payload: Option<Value>,
}

impl ApiResponse {
    /// Envelope for an application-supplied error string. Carries no result,
    /// so it never classifies as success, unauthorized or forbidden.
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            result: None,
            code: None,
            payload: None,
        }
    }

    /// Envelope for anything the transport produced
    pub fn from_outcome(outcome: RawOutcome) -> Self {
        let code = outcome.status();
        let payload = outcome.data().cloned();
        let message = outcome.message().map(str::to_string);

        Self {
            message,
            result: Some(outcome),
            code,
            payload,
        }
    }

    pub fn result(&self) -> Option<&RawOutcome> {
        self.result.as_ref()
    }

    pub fn code(&self) -> Option<u16> {
        self.code
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Message carried by the error itself, if any. See [`Self::message`]
    /// for the user-facing summary.
    pub fn raw_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.has_status(STATUS_OK)
    }

    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    pub fn is_unauthorized(&self) -> bool {
        self.has_status(STATUS_UNAUTHORIZED)
    }

    pub fn is_forbidden(&self) -> bool {
        self.has_status(STATUS_FORBIDDEN)
    }

    fn has_status(&self, status: u16) -> bool {
        self.result.is_some() && self.code == Some(status)
    }

    /// Human-readable summary of the outcome
    pub fn message(&self) -> String {
        if self.is_success() {
            return "OK".to_string();
        }
        match self.error() {
            Some(err) => err.to_string(),
            None => GENERIC_ERROR.to_string(),
        }
    }

    /// The outcome as a typed error, `None` on success
    pub fn error(&self) -> Option<ApiError> {
        if self.is_success() {
            None
        } else if self.is_unauthorized() {
            Some(ApiError::Unauthorized)
        } else if self.is_forbidden() {
            Some(ApiError::Forbidden)
        } else if let Some(code) = self.code {
            Some(ApiError::Status(code))
        } else {
            let message = self.message.as_deref().unwrap_or(GENERIC_ERROR);
            Some(ApiError::Request(message.to_string()))
        }
    }

    /// Payload of a successful call, or the error it represents
    pub fn into_result(self) -> Result<Option<Value>, ApiError> {
        match self.error() {
            Some(err) => Err(err),
            None => Ok(self.payload),
        }
    }

    /// Deserialize the payload of a successful call
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if let Some(err) = self.error() {
            return Err(err);
        }
        let payload = self.payload.as_ref().ok_or(ApiError::MissingPayload)?;
        T::deserialize(payload).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

impl From<RawOutcome> for ApiResponse {
    fn from(outcome: RawOutcome) -> Self {
        Self::from_outcome(outcome)
    }
}

impl From<String> for ApiResponse {
    fn from(message: String) -> Self {
        Self::from_error(message)
    }
}

impl From<&str> for ApiResponse {
    fn from(message: &str) -> Self {
        Self::from_error(message)
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn success(data: Value) -> ApiResponse {
        RawOutcome::HttpSuccess {
            status: 200,
            data: Some(data),
        }
        .into()
    }

    fn failure(status: Option<u16>, message: Option<&str>) -> ApiResponse {
        RawOutcome::HttpFailure {
            status,
            message: message.map(str::to_string),
        }
        .into()
    }

    #[test]
    fn test_success_with_payload() {
        let response = success(json!({"foo": 1}));
        assert!(response.is_success());
        assert!(!response.is_error());
        assert_eq!(response.message(), "OK");
        assert_eq!(response.code(), Some(200));
        assert_eq!(response.payload().unwrap()["foo"], 1);
    }

    #[test]
    fn test_unauthorized_and_forbidden() {
        let unauthorized = failure(Some(401), None);
        assert!(unauthorized.is_error());
        assert!(unauthorized.is_unauthorized());
        assert!(!unauthorized.is_forbidden());
        assert_eq!(unauthorized.message(), "Unauthorized");

        let forbidden = failure(Some(403), None);
        assert!(forbidden.is_error());
        assert!(forbidden.is_forbidden());
        assert!(!forbidden.is_unauthorized());
        assert_eq!(forbidden.code(), Some(403));
        assert_eq!(forbidden.message(), "Forbidden");
    }

    #[test]
    fn test_server_error_code() {
        let response = failure(Some(500), None);
        assert!(response.is_error());
        assert_eq!(response.message(), "Server returned code 500");
    }

    #[test]
    fn test_code_takes_precedence_over_message() {
        let response = failure(Some(404), Some("Request failed with status code 404"));
        assert_eq!(response.message(), "Server returned code 404");
        assert_eq!(
            response.raw_message(),
            Some("Request failed with status code 404")
        );
    }

    #[test]
    fn test_non_200_success_status_is_error() {
        let response: ApiResponse = RawOutcome::HttpSuccess {
            status: 204,
            data: None,
        }
        .into();
        assert!(response.is_error());
        assert_eq!(response.message(), "Server returned code 204");
    }

    #[test]
    fn test_plain_string() {
        let response = ApiResponse::from("Network down");
        assert!(!response.is_success());
        assert!(response.result().is_none());
        assert!(response.code().is_none());
        assert!(response.payload().is_none());
        assert_eq!(response.message(), "Network down");
    }

    #[test]
    fn test_plain_error_outcome_sets_result() {
        let response = ApiResponse::from_outcome(RawOutcome::PlainError("boom".to_string()));
        assert!(response.result().is_some());
        assert!(response.is_error());
        assert_eq!(response.message(), "boom");
    }

    #[test]
    fn test_transport_failure_message() {
        let response: ApiResponse = RawOutcome::transport_failure("Request failed: connection refused").into();
        assert!(response.is_error());
        assert!(response.code().is_none());
        assert_eq!(response.message(), "Request failed: connection refused");
    }

    #[test]
    fn test_no_status_no_message() {
        let response = failure(None, None);
        assert_eq!(response.message(), "An error occurred");
    }

    #[test]
    fn test_failure_has_no_payload() {
        let unauthorized = failure(Some(401), Some("x"));
        assert!(unauthorized.payload().is_none());
        assert_eq!(unauthorized.raw_message(), Some("x"));
        assert_eq!(unauthorized.message(), "Unauthorized");

        let invalid = failure(Some(422), Some("invalid group"));
        assert!(invalid.payload().is_none());
        assert_eq!(
            invalid.into_result().unwrap_err(),
            ApiError::Status(422)
        );
    }

    #[test]
    fn test_classification_is_repeatable() {
        let response = failure(Some(401), None);
        for _ in 0..2 {
            assert!(response.is_unauthorized());
            assert!(response.is_error());
            assert_eq!(response.message(), "Unauthorized");
        }
    }

    #[test]
    fn test_decode() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Named {
            name: String,
        }

        let response = success(json!([{"id": 1, "name": "Checking"}]));
        let groups: Vec<Named> = response.decode().unwrap();
        assert_eq!(groups[0].name, "Checking");

        let err = success(json!({"nope": true})).decode::<Named>().unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));

        let err = failure(Some(403), None).decode::<Named>().unwrap_err();
        assert_eq!(err, ApiError::Forbidden);

        let empty: ApiResponse = RawOutcome::HttpSuccess {
            status: 200,
            data: None,
        }
        .into();
        assert_eq!(empty.decode::<Named>().unwrap_err(), ApiError::MissingPayload);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(
            success(json!(1)).into_result().unwrap(),
            Some(json!(1))
        );
        assert_eq!(
            ApiResponse::from_error("offline").into_result().unwrap_err(),
            ApiError::Request("offline".to_string())
        );
    }
}
