//! Credential and Session Models
//!
//! Login input and the opaque bearer session it yields.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Username and API key presented to the payment provider on login.
///
/// The API key is wiped from memory on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credential {
    username: String,
    apikey: String,
}

impl Credential {
    /// Create a new Credential
    #[must_use]
    pub fn new(username: impl Into<String>, apikey: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            apikey: apikey.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn apikey(&self) -> &str {
        &self.apikey
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("apikey", &"[REDACTED]")
            .finish()
    }
}

/// Opaque bearer token returned by a successful login.
///
/// The gateway hands it back to the caller and never stores it. The token is
/// wiped from memory on drop.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Session {
    token: String,
}

impl Session {
    /// Create a new Session from the token issued upstream
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn into_token(mut self) -> String {
        std::mem::take(&mut self.token)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("token", &"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_debug_redacts_apikey() {
        let credential = Credential::new("user", "super-secret");
        let debug = format!("{credential:?}");

        assert!(debug.contains("user"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_credential_zeroize_clears_fields() {
        let mut credential = Credential::new("user", "super-secret");
        credential.zeroize();

        assert!(credential.username().is_empty());
        assert!(credential.apikey().is_empty());
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let session = Session::new("abc123");

        assert_eq!(session.token(), "abc123");
        assert!(!format!("{session:?}").contains("abc123"));
    }

    #[test]
    fn test_session_zeroize_clears_token() {
        let mut session = Session::new("abc123");
        session.zeroize();

        assert!(session.token().is_empty());
    }

    #[test]
    fn test_session_into_token_moves_value_out() {
        assert_eq!(Session::new("abc123").into_token(), "abc123");
    }
}
