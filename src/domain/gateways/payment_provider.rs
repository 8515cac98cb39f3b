//! Payment Provider Gateway
//!
//! Abstract trait defining the contract for talking to the payment provider.

use async_trait::async_trait;

use crate::domain::models::{Credential, Payment, Recipient, Session};
use crate::shared::errors::ProviderError;

/// Port for the upstream payment provider
///
/// Authenticated operations take the bearer token as presented by the caller.
/// An absent or blank token must be rejected with `ProviderError::Unauthorized`
/// without contacting the provider.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Exchange a credential for a session token
    async fn login(&self, credential: &Credential) -> Result<Session, ProviderError>;

    /// List recipients, in provider order
    async fn list_recipients(&self, token: Option<&str>) -> Result<Vec<Recipient>, ProviderError>;

    /// Register a new recipient
    async fn create_recipient(
        &self,
        token: Option<&str>,
        recipient: &Recipient,
    ) -> Result<Recipient, ProviderError>;

    /// List payments, in provider order
    async fn list_payments(&self, token: Option<&str>) -> Result<Vec<Payment>, ProviderError>;

    /// Submit a new payment
    async fn create_payment(
        &self,
        token: Option<&str>,
        payment: &Payment,
    ) -> Result<Payment, ProviderError>;
}
