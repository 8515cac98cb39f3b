//! Domain Models
//!
//! Plain value objects exchanged with the payment provider.

pub mod credential;
pub mod payment;
pub mod recipient;

pub use credential::{Credential, Session};
pub use payment::{Currency, Payment, PaymentId, PaymentStatus};
pub use recipient::{Recipient, RecipientId};
