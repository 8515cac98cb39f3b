//! List Payments Use Case
//!
//! Retrieves the caller's payments from the payment provider.

use std::sync::Arc;

use crate::domain::gateways::PaymentProvider;
use crate::domain::models::Payment;
use crate::shared::errors::UseCaseError;

/// Use case for listing payments
pub struct ListPaymentsUseCase {
    payment_provider: Arc<dyn PaymentProvider>,
}

impl ListPaymentsUseCase {
    /// Create a new ListPaymentsUseCase
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
    pub async fn execute(&self, token: Option<&str>) -> Result<Vec<Payment>, UseCaseError> {
        tracing::debug!("Listing payments");

        let payments = self.payment_provider.list_payments(token).await?;

        tracing::debug!(count = payments.len(), "Found payments");
        Ok(payments)
    }
}
