//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Configuration
//! - Outbound HTTP client
//! - Payment provider clients

pub mod config;
pub mod http_client;
pub mod payment_provider;

pub use config::AppConfig;
pub use payment_provider::CoolpayPaymentProvider;
