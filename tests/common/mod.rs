//! Common test utilities for integration tests
//!
//! Provides a wiremock server standing in for the Coolpay API, a provider
//! pointed at it, and a test application wired exactly like the binary.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    middleware, Router,
};
use serde_json::Value;
use tower::util::ServiceExt;
use tower_http::trace::TraceLayer;
use wiremock::MockServer;

use coolpay_gateway::infrastructure::driven_adapters::config::AppConfig;
use coolpay_gateway::infrastructure::driven_adapters::http_client::create_client;
use coolpay_gateway::infrastructure::driven_adapters::payment_provider::CoolpayPaymentProvider;
use coolpay_gateway::infrastructure::driving_adapters::api_rest::handlers::coolpay;
use coolpay_gateway::infrastructure::driving_adapters::api_rest::middleware::request_id_middleware;
use coolpay_gateway::infrastructure::driving_adapters::api_rest::AppState;

/// Path prefix of the fake Coolpay API, mirroring the real `/api` base
pub const API_PREFIX: &str = "/api";

/// Token the fake Coolpay API hands out
pub const COOLPAY_TOKEN: &str = "someToken";

/// Build the test configuration for a running mock server
pub fn create_test_config(upstream: &MockServer) -> AppConfig {
    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[coolpay]
base_uri = "{}{}"
timeout_secs = 5
"#,
        upstream.uri(),
        API_PREFIX
    );

    AppConfig::from_toml(&config_str).expect("Failed to build test config")
}

/// Create a Coolpay provider talking to the mock server
pub fn create_provider(upstream: &MockServer) -> CoolpayPaymentProvider {
    let config = create_test_config(upstream);
    let client = create_client(&config.coolpay).expect("Failed to build HTTP client");
    CoolpayPaymentProvider::new(client, config.coolpay.base_uri)
}

/// Path on the mock server for a Coolpay endpoint
pub fn api_path(endpoint: &str) -> String {
    format!("{API_PREFIX}{endpoint}")
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub upstream: MockServer,
}

impl TestApp {
    /// Create a new test application backed by a fresh mock Coolpay API
    pub async fn new() -> Self {
        let upstream = MockServer::start().await;
        let payment_provider = Arc::new(create_provider(&upstream));
        let app_state = AppState::new(payment_provider);

        let router = Router::new()
            .nest("/coolpay", coolpay::router())
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        Self { router, upstream }
    }

    /// Send a request through the router and decode the JSON response body
    ///
    /// An empty body decodes to `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed to respond");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        (status, json)
    }

    /// Number of requests the mock Coolpay API has received
    pub async fn upstream_request_count(&self) -> usize {
        self.upstream
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }
}
