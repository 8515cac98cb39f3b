//! Application Layer
//!
//! Contains use cases that orchestrate calls to the payment provider.
//! Use cases depend on domain gateways (abstractions), not concrete implementations.

pub mod use_cases;
