//! Create Recipient Use Case
//!
//! Registers a new recipient with the payment provider.

use std::sync::Arc;

use crate::domain::gateways::PaymentProvider;
use crate::domain::models::Recipient;
use crate::shared::errors::UseCaseError;

/// Use case for creating a recipient
pub struct CreateRecipientUseCase {
    payment_provider: Arc<dyn PaymentProvider>,
}

impl CreateRecipientUseCase {
    /// Create a new CreateRecipientUseCase
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
    /// Returns `ProviderError::Upstream` if the provider refuses the recipient.
    pub async fn execute(
        &self,
        token: Option<&str>,
        recipient: Recipient,
    ) -> Result<Recipient, UseCaseError> {
        tracing::info!(name = %recipient.name, "Creating recipient");

        let created = self.payment_provider.create_recipient(token, &recipient).await?;

        tracing::info!(
            recipient_id = ?created.id.as_ref().map(|id| id.as_str()),
            "Recipient created"
        );
        Ok(created)
    }
}
