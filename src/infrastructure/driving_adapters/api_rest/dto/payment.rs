//! Payment DTOs
//!
//! Data transfer objects for payment endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::{Currency, Payment, PaymentStatus};

/// Validates that an amount is strictly positive
fn validate_positive_amount(amount: &Decimal) -> Result<(), validator::ValidationError> {
    if amount.is_sign_positive() && !amount.is_zero() {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("amount");
        error.message = Some("amount must be greater than 0".into());
        Err(error)
    }
}

/// DTO for creating a payment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePaymentDto {
    #[validate(required(message = "status is required"))]
    pub status: Option<PaymentStatus>,

    #[validate(required(message = "recipient_id is required"))]
    pub recipient_id: Option<String>,

    #[validate(required(message = "currency is required"))]
    pub currency: Option<Currency>,

    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_positive_amount"))]
    pub amount: Decimal,
}

impl From<CreatePaymentDto> for Payment {
    fn from(dto: CreatePaymentDto) -> Self {
        Self {
            id: None,
            status: dto.status,
            recipient_id: dto.recipient_id.map(Into::into),
            currency: dto.currency,
            amount: dto.amount,
        }
    }
}

/// Payment response DTO
#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponseDto {
    pub id: Option<String>,
    pub status: Option<PaymentStatus>,
    pub recipient_id: Option<String>,
    pub currency: Option<Currency>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl From<Payment> for PaymentResponseDto {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id.map(|id| id.into_inner()),
            status: payment.status,
            recipient_id: payment.recipient_id.map(|id| id.into_inner()),
            currency: payment.currency,
            amount: payment.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_validate_positive_amount() {
        assert!(validate_positive_amount(&dec!(10.99)).is_ok());
        assert!(validate_positive_amount(&dec!(0)).is_err());
        assert!(validate_positive_amount(&dec!(-1)).is_err());
    }

    #[test]
    fn test_create_dto_requires_status_currency_and_recipient() {
        let dto: CreatePaymentDto = serde_json::from_str(r#"{"amount":10.99}"#).unwrap();
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("status"));
        assert!(fields.contains_key("currency"));
        assert!(fields.contains_key("recipient_id"));
    }

    #[test]
    fn test_create_dto_keeps_exact_amount() {
        let dto: CreatePaymentDto = serde_json::from_str(
            r#"{"status":"paid","recipient_id":"recipient","currency":"GBP","amount":10.99}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());

        let payment = Payment::from(dto);
        assert_eq!(payment.amount, dec!(10.99));
        assert_eq!(payment.currency, Some(Currency::Gbp));
        assert!(payment.id.is_none());
    }

    #[test]
    fn test_response_dto_shape() {
        let dto = PaymentResponseDto::from(Payment {
            id: Some("1".into()),
            status: Some(PaymentStatus::Paid),
            recipient_id: Some("recipient".into()),
            currency: Some(Currency::Gbp),
            amount: dec!(10.99),
        });

        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            json!({
                "id": "1",
                "status": "paid",
                "recipient_id": "recipient",
                "currency": "GBP",
                "amount": 10.99
            })
        );
    }
}
