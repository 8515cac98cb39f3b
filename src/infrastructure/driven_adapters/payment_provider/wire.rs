//! Coolpay wire format
//!
//! Envelope and entity shapes exactly as the Coolpay API sends and expects
//! them. Nothing outside the adapter sees these types.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::models::{
    Credential, Currency, Payment, PaymentStatus, Recipient, Session,
};

/// Coolpay sends `null` where a field has no value; decode it like an absent key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn amount_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(rust_decimal::serde::float_option::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize)]
pub(super) struct LoginRequest<'a> {
    username: &'a str,
    apikey: &'a str,
}

impl<'a> From<&'a Credential> for LoginRequest<'a> {
    fn from(credential: &'a Credential) -> Self {
        Self {
            username: credential.username(),
            apikey: credential.apikey(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct LoginResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    token: String,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Session::new(response.token)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RecipientWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_src: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    number_of_friends: u32,
}

impl From<&Recipient> for RecipientWire {
    fn from(recipient: &Recipient) -> Self {
        Self {
            id: recipient.id.as_ref().map(|id| id.as_str().to_string()),
            name: recipient.name.clone(),
            bio: recipient.bio.clone(),
            image_src: recipient.image_src.clone(),
            number_of_friends: recipient.number_of_friends,
        }
    }
}

impl From<RecipientWire> for Recipient {
    fn from(wire: RecipientWire) -> Self {
        Self {
            id: wire.id.map(Into::into),
            name: wire.name,
            bio: wire.bio,
            image_src: wire.image_src,
            number_of_friends: wire.number_of_friends,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct PaymentWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default)]
    status: Option<PaymentStatus>,
    #[serde(default)]
    recipient_id: Option<String>,
    #[serde(default)]
    currency: Option<Currency>,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "amount_or_zero"
    )]
    amount: Decimal,
}

impl From<&Payment> for PaymentWire {
    fn from(payment: &Payment) -> Self {
        Self {
            id: payment.id.as_ref().map(|id| id.as_str().to_string()),
            status: payment.status,
            recipient_id: payment.recipient_id.as_ref().map(|id| id.as_str().to_string()),
            currency: payment.currency,
            amount: payment.amount,
        }
    }
}

impl From<PaymentWire> for Payment {
    fn from(wire: PaymentWire) -> Self {
        Self {
            id: wire.id.map(Into::into),
            status: wire.status,
            recipient_id: wire.recipient_id.map(Into::into),
            currency: wire.currency,
            amount: wire.amount,
        }
    }
}

/// `{"recipient": {...}}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct RecipientEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipient: RecipientWire,
}

/// `{"recipients": [...]}`
#[derive(Debug, Default, Deserialize)]
pub(super) struct RecipientsEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipients: Vec<RecipientWire>,
}

/// `{"payment": {...}}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct PaymentEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment: PaymentWire,
}

/// `{"payments": [...]}`
#[derive(Debug, Default, Deserialize)]
pub(super) struct PaymentsEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub payments: Vec<PaymentWire>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_payment_envelope_serializes_provider_shape() {
        let payment = Payment {
            id: None,
            status: Some(PaymentStatus::Paid),
            recipient_id: Some("recipient".into()),
            currency: Some(Currency::Eur),
            amount: dec!(10.99),
        };
        let envelope = PaymentEnvelope {
            payment: PaymentWire::from(&payment),
        };

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "payment": {
                    "status": "paid",
                    "recipient_id": "recipient",
                    "currency": "EUR",
                    "amount": 10.99
                }
            })
        );
    }

    #[test]
    fn test_payment_amount_decodes_exactly() {
        let envelope: PaymentEnvelope = serde_json::from_str(
            r#"{"payment":{"id":"1","status":"paid","recipient_id":"r","currency":"EUR","amount":10.99}}"#,
        )
        .unwrap();

        assert_eq!(Payment::from(envelope.payment).amount, dec!(10.99));
    }

    #[test]
    fn test_recipient_uses_camel_case_fields() {
        let envelope: RecipientEnvelope = serde_json::from_str(
            r#"{"recipient":{"id":"7","name":"Joe Cool","imageSrc":"joe.png","numberOfFriends":3}}"#,
        )
        .unwrap();
        let recipient = Recipient::from(envelope.recipient);

        assert_eq!(recipient.id.unwrap().as_str(), "7");
        assert_eq!(recipient.image_src.as_deref(), Some("joe.png"));
        assert_eq!(recipient.number_of_friends, 3);
        assert!(recipient.bio.is_none());
    }

    #[test]
    fn test_missing_envelope_fields_decode_to_defaults() {
        let recipients: RecipientsEnvelope = serde_json::from_str("{}").unwrap();
        let payments: PaymentsEnvelope = serde_json::from_str(r#"{"payments":[]}"#).unwrap();
        let payment: PaymentEnvelope = serde_json::from_str("{}").unwrap();

        assert!(recipients.recipients.is_empty());
        assert!(payments.payments.is_empty());
        assert_eq!(Payment::from(payment.payment), Payment::default());
    }

    #[test]
    fn test_null_fields_decode_to_defaults() {
        let recipients: RecipientsEnvelope = serde_json::from_str(r#"{"recipients":null}"#).unwrap();
        let payment: PaymentEnvelope = serde_json::from_str(r#"{"payment":null}"#).unwrap();
        let recipient: RecipientEnvelope = serde_json::from_str(
            r#"{"recipient":{"id":"1","name":null,"bio":null,"imageSrc":null,"numberOfFriends":null}}"#,
        )
        .unwrap();
        let priced: PaymentEnvelope =
            serde_json::from_str(r#"{"payment":{"id":"1","status":null,"amount":null}}"#).unwrap();

        assert!(recipients.recipients.is_empty());
        assert_eq!(Payment::from(payment.payment), Payment::default());

        let recipient = Recipient::from(recipient.recipient);
        assert_eq!(recipient.id.unwrap().as_str(), "1");
        assert!(recipient.name.is_empty());
        assert_eq!(recipient.number_of_friends, 0);

        let priced = Payment::from(priced.payment);
        assert!(priced.status.is_none());
        assert!(priced.amount.is_zero());
    }
}
