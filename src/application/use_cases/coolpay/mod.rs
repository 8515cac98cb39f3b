//! Coolpay Use Cases
//!
//! One use case per provider operation. Each delegates to the payment
//! provider and hands its errors back untranslated.

mod create_payment;
mod create_recipient;
mod list_payments;
mod list_recipients;
mod login;

pub use create_payment::CreatePaymentUseCase;
pub use create_recipient::CreateRecipientUseCase;
pub use list_payments::ListPaymentsUseCase;
pub use list_recipients::ListRecipientsUseCase;
pub use login::LoginUseCase;
