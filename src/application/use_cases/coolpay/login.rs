//! Login Use Case
//!
//! Exchanges a Coolpay credential for a session token.

use std::sync::Arc;

use crate::domain::gateways::PaymentProvider;
use crate::domain::models::{Credential, Session};
use crate::shared::errors::UseCaseError;

/// Use case for logging in to the payment provider
pub struct LoginUseCase {
    payment_provider: Arc<dyn PaymentProvider>,
}

impl LoginUseCase {
    /// Create a new LoginUseCase
    #[must_use]
    pub fn new(payment_provider: Arc<dyn PaymentProvider>) -> Self {
        Self { payment_provider }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Unauthorized` if the provider rejects the credential.
    /// Returns `ProviderError::ServiceFailure` if the provider is unavailable.
    pub async fn execute(&self, credential: Credential) -> Result<Session, UseCaseError> {
        tracing::info!(username = %credential.username(), "Logging in to payment provider");

        let session = self.payment_provider.login(&credential).await.map_err(|e| {
            tracing::warn!(username = %credential.username(), error = %e, "Login failed");
            e
        })?;

        tracing::info!(username = %credential.username(), "Login succeeded");
        Ok(session)
    }
}
