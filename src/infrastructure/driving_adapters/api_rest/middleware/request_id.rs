//! Request ID Middleware
//!
//! Tags every request with an `x-request-id`. A caller-supplied value is kept,
//! otherwise a UUID v4 is generated. The id is echoed on the response and
//! recorded on the `request` span, so the outbound Coolpay call and any
//! provider failure logged while serving it carry the same id.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the request id in both directions
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

fn incoming_or_new(request: &Request<Body>) -> HeaderValue {
    request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .filter(|value| value.to_str().is_ok_and(|id| !id.trim().is_empty()))
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        })
}

pub async fn request_id_middleware(request: Request<Body>, next: Next) -> Response {
    let request_id = incoming_or_new(&request);

    let span = tracing::info_span!(
        "request",
        request_id = request_id.to_str().unwrap_or_default(),
        method = %request.method(),
        path = request.uri().path(),
    );

    let mut response = async move {
        tracing::debug!("Forwarding request");
        next.run(request).await
    }
    .instrument(span)
    .await;

    response.headers_mut().insert(REQUEST_ID_HEADER.clone(), request_id);
    response
}
