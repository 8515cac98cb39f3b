//! Coolpay Payment Provider Implementation
//!
//! Implements the PaymentProvider trait over the Coolpay REST API using reqwest.
//!
//! Status handling for every call:
//! - 401 becomes `ProviderError::Unauthorized`
//! - 5xx becomes `ProviderError::ServiceFailure` with the status and body kept as the cause
//! - any other non-2xx status is passed through as `ProviderError::Upstream`
//! - 2xx bodies are unwrapped from their envelope; missing fields decode to defaults
//!
//! `/login` additionally treats 404 as `Unauthorized`, which is how Coolpay
//! reports an unknown username or API key.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use super::wire::{
    LoginRequest, LoginResponse, PaymentEnvelope, PaymentWire, PaymentsEnvelope, RecipientEnvelope,
    RecipientWire, RecipientsEnvelope,
};
use crate::domain::gateways::PaymentProvider;
use crate::domain::models::{Credential, Payment, Recipient, Session};
use crate::shared::errors::{ProviderError, UpstreamFault};

const LOGIN_PATH: &str = "/login";
const RECIPIENTS_PATH: &str = "/recipients";
const PAYMENTS_PATH: &str = "/payments";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Coolpay implementation of PaymentProvider
pub struct CoolpayPaymentProvider {
    client: Client,
    base_uri: String,
}

impl CoolpayPaymentProvider {
    /// Create a new CoolpayPaymentProvider
    ///
    /// A trailing slash on `base_uri` is ignored.
    #[must_use]
    pub fn new(client: Client, base_uri: impl Into<String>) -> Self {
        Self {
            client,
            base_uri: base_uri.into().trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_uri, path))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
    }

    fn authorized_request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> Result<RequestBuilder, ProviderError> {
        let token = bearer_token(token)?;
        Ok(self
            .request(method, path)
            .header(AUTHORIZATION, format!("Bearer {token}")))
    }

    async fn exchange<T>(&self, method: Method, path: &str, request: RequestBuilder) -> Result<T, ProviderError>
    where
        T: DeserializeOwned + Default,
    {
        let response = request.send().await.map_err(|e| {
            tracing::error!(%method, path, error = %e, "Coolpay request failed");
            UpstreamFault::Transport(e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(UpstreamFault::Transport)?;

        if !status.is_success() {
            return Err(map_status_error(&method, path, status, &body));
        }

        tracing::debug!(%method, path, status = status.as_u16(), "Coolpay request succeeded");
        decode_body(&body)
    }
}

#[async_trait]
impl PaymentProvider for CoolpayPaymentProvider {
    async fn login(&self, credential: &Credential) -> Result<Session, ProviderError> {
        let request = self
            .request(Method::POST, LOGIN_PATH)
            .json(&LoginRequest::from(credential));

        let response: LoginResponse = self
            .exchange(Method::POST, LOGIN_PATH, request)
            .await
            .map_err(|err| match err {
                ProviderError::Upstream {
                    status: StatusCode::NOT_FOUND,
                    ..
                } => ProviderError::Unauthorized,
                other => other,
            })?;

        Ok(response.into())
    }

    async fn list_recipients(&self, token: Option<&str>) -> Result<Vec<Recipient>, ProviderError> {
        let request = self.authorized_request(Method::GET, RECIPIENTS_PATH, token)?;
        let envelope: RecipientsEnvelope = self.exchange(Method::GET, RECIPIENTS_PATH, request).await?;

        Ok(envelope.recipients.into_iter().map(Recipient::from).collect())
    }

    async fn create_recipient(
        &self,
        token: Option<&str>,
        recipient: &Recipient,
    ) -> Result<Recipient, ProviderError> {
        let request = self
            .authorized_request(Method::POST, RECIPIENTS_PATH, token)?
            .json(&RecipientEnvelope {
                recipient: RecipientWire::from(recipient),
            });
        let envelope: RecipientEnvelope = self.exchange(Method::POST, RECIPIENTS_PATH, request).await?;

        Ok(envelope.recipient.into())
    }

    async fn list_payments(&self, token: Option<&str>) -> Result<Vec<Payment>, ProviderError> {
        let request = self.authorized_request(Method::GET, PAYMENTS_PATH, token)?;
        let envelope: PaymentsEnvelope = self.exchange(Method::GET, PAYMENTS_PATH, request).await?;

        Ok(envelope.payments.into_iter().map(Payment::from).collect())
    }

    async fn create_payment(
        &self,
        token: Option<&str>,
        payment: &Payment,
    ) -> Result<Payment, ProviderError> {
        let request = self
            .authorized_request(Method::POST, PAYMENTS_PATH, token)?
            .json(&PaymentEnvelope {
                payment: PaymentWire::from(payment),
            });
        let envelope: PaymentEnvelope = self.exchange(Method::POST, PAYMENTS_PATH, request).await?;

        Ok(envelope.payment.into())
    }
}

/// Reject absent or whitespace-only tokens; anything else is sent as-is
fn bearer_token(token: Option<&str>) -> Result<&str, ProviderError> {
    match token {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(ProviderError::Unauthorized),
    }
}

fn map_status_error(method: &Method, path: &str, status: StatusCode, body: &[u8]) -> ProviderError {
    let body = body_preview(body);

    if status == StatusCode::UNAUTHORIZED {
        tracing::debug!(%method, path, status = status.as_u16(), "Coolpay rejected the token");
        ProviderError::Unauthorized
    } else if status.is_server_error() {
        tracing::error!(%method, path, status = status.as_u16(), body = %body, "Coolpay returned server error");
        ProviderError::ServiceFailure(UpstreamFault::ServerError { status, body })
    } else {
        tracing::debug!(%method, path, status = status.as_u16(), "Coolpay returned client error");
        ProviderError::Upstream { status, body }
    }
}

/// Empty bodies decode to the envelope's default
fn decode_body<T>(body: &[u8]) -> Result<T, ProviderError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| UpstreamFault::Decode(e).into())
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 200;

    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    if trimmed.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{}...", trimmed.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>())
    } else {
        trimmed.to_string()
    }
}
