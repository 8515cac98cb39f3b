//! HTTP Handlers
//!
//! Request handlers grouped by resource.

pub mod coolpay;
