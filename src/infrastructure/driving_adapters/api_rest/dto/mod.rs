//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod login;
pub mod payment;
pub mod recipient;

pub use login::{LoginRequestDto, SessionResponseDto};
pub use payment::{CreatePaymentDto, PaymentResponseDto};
pub use recipient::{CreateRecipientDto, RecipientResponseDto};
