//! List Recipients Use Case
//!
//! Retrieves the caller's recipients from the payment provider.

use std::sync::Arc;

use crate::domain::gateways::PaymentProvider;
use crate::domain::models::Recipient;
use crate::shared::errors::UseCaseError;

/// Use case for listing recipients
pub struct ListRecipientsUseCase {
    payment_provider: Arc<dyn PaymentProvider>,
}

impl ListRecipientsUseCase {
    /// Create a new ListRecipientsUseCase
    #[must_use]
    pub fn new(payment_provider: Arc<dyn PaymentProvider>) -> Self {
        Self { payment_provider }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Unauthorized` if the token is blank or rejected.
    /// Returns `ProviderError::ServiceFailure` if the provider is unavailable.
    pub async fn execute(&self, token: Option<&str>) -> Result<Vec<Recipient>, UseCaseError> {
        tracing::debug!("Listing recipients");

        let recipients = self.payment_provider.list_recipients(token).await?;

        tracing::debug!(count = recipients.len(), "Found recipients");
        Ok(recipients)
    }
}
