//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use crate::application::use_cases::coolpay::{
    CreatePaymentUseCase, CreateRecipientUseCase, ListPaymentsUseCase, ListRecipientsUseCase,
    LoginUseCase,
};
use crate::domain::gateways::PaymentProvider;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub login_use_case: Arc<LoginUseCase>,
    pub list_recipients_use_case: Arc<ListRecipientsUseCase>,
    pub create_recipient_use_case: Arc<CreateRecipientUseCase>,
    pub list_payments_use_case: Arc<ListPaymentsUseCase>,
    pub create_payment_use_case: Arc<CreatePaymentUseCase>,
}

impl AppState {
    /// Wire every use case to the same payment provider
    #[must_use]
    pub fn new(payment_provider: Arc<dyn PaymentProvider>) -> Self {
        Self {
            login_use_case: Arc::new(LoginUseCase::new(payment_provider.clone())),
            list_recipients_use_case: Arc::new(ListRecipientsUseCase::new(payment_provider.clone())),
            create_recipient_use_case: Arc::new(CreateRecipientUseCase::new(payment_provider.clone())),
            list_payments_use_case: Arc::new(ListPaymentsUseCase::new(payment_provider.clone())),
            create_payment_use_case: Arc::new(CreatePaymentUseCase::new(payment_provider)),
        }
    }
}
