//! Coolpay Gateway
//!
//! A Rust-based HTTP gateway that logs users in to the Coolpay payment API and
//! proxies recipient and payment operations to it, following Clean/Hexagonal
//! Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
