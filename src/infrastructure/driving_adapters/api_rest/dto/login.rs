//! Login DTOs
//!
//! Data transfer objects for the login endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::models::{Credential, Session};

/// DTO for a login request
///
/// Deliberately not `Debug`: it carries the API key.
#[derive(Deserialize)]
pub struct LoginRequestDto {
    pub username: String,
    pub apikey: String,
}

impl From<LoginRequestDto> for Credential {
    fn from(dto: LoginRequestDto) -> Self {
        Credential::new(dto.username, dto.apikey)
    }
}

/// Session response DTO
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponseDto {
    pub token: String,
}

impl From<Session> for SessionResponseDto {
    fn from(session: Session) -> Self {
        Self {
            token: session.into_token(),
        }
    }
}
