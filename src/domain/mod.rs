//! Domain Layer
//!
//! Contains the value objects and the payment provider gateway trait (port).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::payment_provider::PaymentProvider;
pub use models::{
    Credential, Currency, Payment, PaymentId, PaymentStatus, Recipient, RecipientId, Session,
};
