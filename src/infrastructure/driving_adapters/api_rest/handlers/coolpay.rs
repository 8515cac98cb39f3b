//! Coolpay Handlers
//!
//! HTTP handlers proxying login, recipient and payment operations to Coolpay.
//! Every endpoint except login requires an `Authorization` header.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreatePaymentDto, CreateRecipientDto, LoginRequestDto, PaymentResponseDto,
    RecipientResponseDto, SessionResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::AuthorizationToken;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for Coolpay endpoints
///
/// | Method | Path          | Handler            | Authorization |
/// |--------|---------------|--------------------|---------------|
/// | POST   | `/login`      | `login`            | no            |
/// | GET    | `/recipients` | `list_recipients`  | yes           |
/// | POST   | `/recipients` | `create_recipient` | yes           |
/// | GET    | `/payments`   | `list_payments`    | yes           |
/// | POST   | `/payments`   | `create_payment`   | yes           |
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/recipients", get(list_recipients).post(create_recipient))
        .route("/payments", get(list_payments).post(create_payment))
}

/// POST /coolpay/login - Exchange a credential for a session token
///
/// # Responses
///
/// * 200 OK - Session token
/// * 400 Bad Request - Malformed body
/// * 401 Unauthorized - Credential rejected by Coolpay
/// * 502 Bad Gateway - Coolpay unavailable
#[axum::debug_handler]
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequestDto>, JsonRejection>,
) -> Result<Json<SessionResponseDto>, ApiError> {
    let Json(dto) = payload?;
    let session = state.login_use_case.execute(dto.into()).await?;

    Ok(Json(SessionResponseDto::from(session)))
}

/// GET /coolpay/recipients - List recipients
///
/// # Responses
///
/// * 200 OK - Recipients in Coolpay order
/// * 400 Bad Request - Missing Authorization header
/// * 401 Unauthorized - Blank or rejected token
/// * 502 Bad Gateway - Coolpay unavailable
#[axum::debug_handler]
async fn list_recipients(
    token: AuthorizationToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<RecipientResponseDto>>, ApiError> {
    let recipients = state
        .list_recipients_use_case
        .execute(Some(token.as_str()))
        .await?;

    let response: Vec<RecipientResponseDto> = recipients.into_iter().map(RecipientResponseDto::from).collect();
    Ok(Json(response))
}

/// POST /coolpay/recipients - Create a recipient
///
/// # Responses
///
/// * 200 OK - Recipient as created by Coolpay
/// * 400 Bad Request - Missing Authorization header, malformed body or validation error
/// * 401 Unauthorized - Blank or rejected token
/// * 502 Bad Gateway - Coolpay unavailable
#[axum::debug_handler]
async fn create_recipient(
    token: AuthorizationToken,
    State(state): State<AppState>,
    payload: Result<Json<CreateRecipientDto>, JsonRejection>,
) -> Result<Json<RecipientResponseDto>, ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let recipient = state
        .create_recipient_use_case
        .execute(Some(token.as_str()), dto.into())
        .await?;

    Ok(Json(RecipientResponseDto::from(recipient)))
}

/// GET /coolpay/payments - List payments
///
/// # Responses
///
/// * 200 OK - Payments in Coolpay order
/// * 400 Bad Request - Missing Authorization header
/// * 401 Unauthorized - Blank or rejected token
/// * 502 Bad Gateway - Coolpay unavailable
#[axum::debug_handler]
async fn list_payments(
    token: AuthorizationToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentResponseDto>>, ApiError> {
    let payments = state
        .list_payments_use_case
        .execute(Some(token.as_str()))
        .await?;

    let response: Vec<PaymentResponseDto> = payments.into_iter().map(PaymentResponseDto::from).collect();
    Ok(Json(response))
}

/// POST /coolpay/payments - Create a payment
///
/// # Responses
///
/// * 200 OK - Payment as created by Coolpay
/// * 400 Bad Request - Missing Authorization header, malformed body or validation error
/// * 401 Unauthorized - Blank or rejected token
/// * 502 Bad Gateway - Coolpay unavailable
#[axum::debug_handler]
async fn create_payment(
    token: AuthorizationToken,
    State(state): State<AppState>,
    payload: Result<Json<CreatePaymentDto>, JsonRejection>,
) -> Result<Json<PaymentResponseDto>, ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let payment = state
        .create_payment_use_case
        .execute(Some(token.as_str()), dto.into())
        .await?;

    Ok(Json(PaymentResponseDto::from(payment)))
}
