//! Outgoing HTTP helpers shared by module adapters.

pub mod client;
pub mod simple_otel;
