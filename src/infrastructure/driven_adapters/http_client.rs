//! Outbound HTTP Client
//!
//! Builds the shared reqwest client used for calls to the payment provider.

use std::time::Duration;

use reqwest::Client;

use super::config::CoolpayConfig;

/// Create the outbound HTTP client from configuration
///
/// The client is cheap to clone and safe to share between requests.
pub fn create_client(config: &CoolpayConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
}
