//! Payment Provider Adapters
//!
//! Implementations of the PaymentProvider gateway.

mod coolpay;
mod wire;

pub use coolpay::CoolpayPaymentProvider;
