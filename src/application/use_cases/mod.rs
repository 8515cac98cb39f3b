//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod coolpay;

pub use coolpay::{
    CreatePaymentUseCase, CreateRecipientUseCase, ListPaymentsUseCase, ListRecipientsUseCase,
    LoginUseCase,
};
