//! Error Types
//!
//! Provider, use case and API errors with HTTP status code mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Underlying cause of a payment provider failure
#[derive(Debug, Error)]
pub enum UpstreamFault {
    #[error("provider returned server error {status}: {body}")]
    ServerError { status: StatusCode, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("undecodable response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Payment provider errors, already normalized to the local contract
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Missing, blank or rejected credential
    #[error("Unauthorized")]
    Unauthorized,

    /// The provider could not serve the request
    #[error("Payment provider failure")]
    ServiceFailure(#[source] UpstreamFault),

    /// Any other non-success status, passed through as reported
    #[error("Payment provider responded with status {status}")]
    Upstream { status: StatusCode, body: String },
}

impl ProviderError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::ServiceFailure(_) => StatusCode::BAD_GATEWAY,
            Self::Upstream { status, .. } => *status,
        }
    }

    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::ServiceFailure(_) => "BAD_GATEWAY",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
        }
    }
}

impl From<UpstreamFault> for ProviderError {
    fn from(fault: UpstreamFault) -> Self {
        Self::ServiceFailure(fault)
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Provider(err) => err.status_code(),
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Provider(err) => err.error_code(),
        }
    }

    /// Message safe to show to the caller
    fn public_message(&self) -> String {
        match self {
            Self::Provider(ProviderError::Upstream { status, body }) if !body.is_empty() => {
                format!("Payment provider responded with status {status}: {body}")
            }
            other => other.to_string(),
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Missing or malformed Authorization header")]
    MissingAuthorization,
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        ApiError::UseCase(UseCaseError::Provider(err))
    }
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(uc_error) => {
                if let UseCaseError::Provider(ProviderError::ServiceFailure(fault)) = uc_error {
                    tracing::error!(error = %fault, "Payment provider failure");
                }
                let details = if let UseCaseError::Validation(errors) = uc_error {
                    Some(
                        errors
                            .iter()
                            .map(|e| {
                                let (field, message) = e.split_once(": ").unwrap_or(("", e.as_str()));
                                FieldError {
                                    field: field.to_string(),
                                    message: message.to_string(),
                                }
                            })
                            .collect(),
                    )
                } else {
                    None
                };
                (uc_error.status_code(), uc_error.error_code().to_string(), uc_error.public_message(), details)
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), msg.clone(), None)
            }
            ApiError::MissingAuthorization => (
                StatusCode::BAD_REQUEST,
                "MISSING_AUTHORIZATION".to_string(),
                self.to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code,
                message,
                details,
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn server_error() -> ProviderError {
        ProviderError::ServiceFailure(UpstreamFault::ServerError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        })
    }

    #[test]
    fn test_provider_error_status_mapping() {
        assert_eq!(ProviderError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(server_error().status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            ProviderError::Upstream {
                status: StatusCode::BAD_REQUEST,
                body: String::new(),
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProviderError::Upstream {
                status: StatusCode::NOT_FOUND,
                body: String::new(),
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_service_failure_keeps_cause() {
        let err = server_error();
        let source = err.source().expect("service failure has a source");

        assert!(source.to_string().contains("500"));
        assert!(source.to_string().contains("boom"));
    }

    #[test]
    fn test_service_failure_message_hides_cause() {
        let err = UseCaseError::Provider(server_error());

        assert_eq!(err.public_message(), "Payment provider failure");
    }

    #[test]
    fn test_upstream_message_includes_body() {
        let err = UseCaseError::Provider(ProviderError::Upstream {
            status: StatusCode::BAD_REQUEST,
            body: "{\"errors\":[\"name taken\"]}".to_string(),
        });

        assert!(err.public_message().contains("name taken"));
        assert_eq!(err.error_code(), "UPSTREAM_ERROR");
    }

    #[test]
    fn test_api_error_statuses() {
        assert_eq!(
            ApiError::MissingAuthorization.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ProviderError::Unauthorized).into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(server_error()).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::UseCase(UseCaseError::Validation(vec!["name: required".to_string()]))
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
