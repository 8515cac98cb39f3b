//! Authorization Header Extraction
//!
//! Pulls the caller's Coolpay session token out of the `Authorization` header.
//! The token is not checked here; the payment provider decides whether it is
//! valid.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::shared::errors::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

/// Session token presented by the caller
///
/// The canonical form is the raw session token as the whole header value,
/// which is what callers of the Coolpay login flow send. A standard
/// `Authorization: Bearer <token>` header is accepted as well. A missing or non-UTF-8 header is rejected with
/// `400 Bad Request`; a blank token is forwarded and rejected downstream
/// as unauthorized.
#[derive(Debug, Clone)]
pub struct AuthorizationToken(String);

impl AuthorizationToken {
    /// Get the token as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthorizationToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::MissingAuthorization)?;

        let token = header.strip_prefix(BEARER_PREFIX).unwrap_or(header);

        Ok(Self(token.to_string()))
    }
}
