//! Payment Domain Model
//!
//! A payment to a recipient, as tracked by the payment provider.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::recipient::RecipientId;

/// Identifier assigned to a payment by the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaymentId(String);

impl PaymentId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PaymentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PaymentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Lifecycle state reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Paid,
    Failed,
}

/// Currencies accepted by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "USD")]
    Usd,
}

/// Payment record
///
/// Fields the provider leaves out of a response stay `None` (or zero for the
/// amount) rather than being guessed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payment {
    pub id: Option<PaymentId>,
    pub status: Option<PaymentStatus>,
    pub recipient_id: Option<RecipientId>,
    pub currency: Option<Currency>,
    pub amount: Decimal,
}
