//! Response interpretation: status-code classification and body decoding.
//!
//! Every operation declares the set of statuses it expects. A response with
//! an expected status is decoded into an [`ApiOutcome`]; anything else becomes
//! [`ClientError::UnexpectedStatus`] carrying the status and raw body.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Statuses for endpoints that report authorization failures as bodies.
pub(crate) const OK_OR_FORBIDDEN: &[StatusCode] = &[StatusCode::OK, StatusCode::FORBIDDEN];

/// Statuses for the readiness endpoint, which answers 503 with a full report.
pub(crate) const OK_OR_UNAVAILABLE: &[StatusCode] =
    &[StatusCode::OK, StatusCode::SERVICE_UNAVAILABLE];

/// An expected answer from the Kitchen API.
///
/// The Kitchen reports authorization denial as a 403 with a structured body
/// rather than as a failure, so a denial is a normal outcome that callers
/// inspect instead of an error they catch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    /// The request was accepted.
    Ok(T),
    /// The service refused the credentials (HTTP 403).
    Forbidden(T),
    /// The service is up but not ready (HTTP 503).
    Unavailable(T),
}

impl<T> ApiOutcome<T> {
    fn classify(status: StatusCode, body: T) -> Self {
        match status {
            StatusCode::FORBIDDEN => Self::Forbidden(body),
            StatusCode::SERVICE_UNAVAILABLE => Self::Unavailable(body),
            _ => Self::Ok(body),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    /// The decoded body, regardless of classification.
    pub fn body(&self) -> &T {
        match self {
            Self::Ok(body) | Self::Forbidden(body) | Self::Unavailable(body) => body,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Ok(body) | Self::Forbidden(body) | Self::Unavailable(body) => body,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiOutcome<U> {
        match self {
            Self::Ok(body) => ApiOutcome::Ok(f(body)),
            Self::Forbidden(body) => ApiOutcome::Forbidden(f(body)),
            Self::Unavailable(body) => ApiOutcome::Unavailable(f(body)),
        }
    }
}

/// Classify `response` against `expected` and decode its body as `T`.
///
/// `model` names the expected payload in validation errors.
pub(crate) async fn interpret<T: DeserializeOwned>(
    response: Response,
    expected: &[StatusCode],
    model: &'static str,
) -> ClientResult<ApiOutcome<T>> {
    let status = response.status();
    let body = response.text().await?;
    debug!(status = status.as_u16(), bytes = body.len(), "Received response");
    decode(status, &body, expected, model)
}

fn decode<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    expected: &[StatusCode],
    model: &'static str,
) -> ClientResult<ApiOutcome<T>> {
    if !expected.contains(&status) {
        return Err(ClientError::unexpected_status(status.as_u16(), body));
    }

    let decoded = serde_json::from_str(body).map_err(|e| ClientError::validation(model, e))?;
    Ok(ApiOutcome::classify(status, decoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthStatus, SystemStatus};
    use serde_json::{json, Value};

    #[test]
    fn test_ok_body_is_returned() {
        let outcome: ApiOutcome<Value> =
            decode(StatusCode::OK, r#"{"runs": []}"#, OK_OR_FORBIDDEN, "json").unwrap();
        assert_eq!(outcome, ApiOutcome::Ok(json!({"runs": []})));
    }

    #[test]
    fn test_forbidden_is_an_outcome_not_an_error() {
        let outcome: ApiOutcome<Value> = decode(
            StatusCode::FORBIDDEN,
            r#"{"authorized": false}"#,
            OK_OR_FORBIDDEN,
            "json",
        )
        .unwrap();
        assert!(outcome.is_forbidden());
        assert_eq!(outcome.body()["authorized"], json!(false));
    }

    #[test]
    fn test_unavailable_is_decoded_when_expected() {
        let outcome: ApiOutcome<SystemStatus> = decode(
            StatusCode::SERVICE_UNAVAILABLE,
            r#"{"kitchen_api_ready": true}"#,
            OK_OR_UNAVAILABLE,
            "SystemStatus",
        )
        .unwrap();
        assert!(matches!(outcome, ApiOutcome::Unavailable(_)));
        assert!(outcome.into_inner().kitchen_api_ready);
    }

    #[test]
    fn test_unexpected_status_keeps_body() {
        let err = decode::<Value>(
            StatusCode::INTERNAL_SERVER_ERROR,
            "kitchen on fire",
            OK_OR_FORBIDDEN,
            "json",
        )
        .unwrap_err();
        match err {
            ClientError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "kitchen on fire");
            }
            other => panic!("Expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_503_outside_expected_set_is_an_error() {
        let err = decode::<Value>(StatusCode::SERVICE_UNAVAILABLE, "{}", OK_OR_FORBIDDEN, "json")
            .unwrap_err();
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_malformed_typed_body_is_a_validation_error() {
        let err = decode::<AuthStatus>(
            StatusCode::OK,
            r#"{"authorized": "maybe"}"#,
            OK_OR_FORBIDDEN,
            "AuthStatus",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Validation {
                model: "AuthStatus",
                ..
            }
        ));
    }

    #[test]
    fn test_non_json_body_is_a_validation_error() {
        let err = decode::<Value>(StatusCode::OK, "<html>", OK_OR_FORBIDDEN, "json").unwrap_err();
        assert!(matches!(err, ClientError::Validation { model: "json", .. }));
    }

    #[test]
    fn test_map_preserves_classification() {
        let outcome = ApiOutcome::Forbidden(2).map(|n| n * 10);
        assert_eq!(outcome, ApiOutcome::Forbidden(20));
    }
}
