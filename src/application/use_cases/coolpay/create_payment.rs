//! Create Payment Use Case
//!
//! Submits a payment to a recipient through the payment provider.

use std::sync::Arc;

use crate::domain::gateways::PaymentProvider;
use crate::domain::models::Payment;
use crate::shared::errors::UseCaseError;

/// Use case for creating a payment
pub struct CreatePaymentUseCase {
    payment_provider: Arc<dyn PaymentProvider>,
}

impl CreatePaymentUseCase {
    /// Create a new CreatePaymentUseCase
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
    /// Returns `ProviderError::Upstream` if the provider refuses the payment.
    pub async fn execute(&self, token: Option<&str>, payment: Payment) -> Result<Payment, UseCaseError> {
        tracing::info!(
            recipient_id = ?payment.recipient_id.as_ref().map(|id| id.as_str()),
            currency = ?payment.currency,
            amount = %payment.amount,
            "Creating payment"
        );

        let created = self.payment_provider.create_payment(token, &payment).await?;

        tracing::info!(
            payment_id = ?created.id.as_ref().map(|id| id.as_str()),
            status = ?created.status,
            "Payment created"
        );
        Ok(created)
    }
}
