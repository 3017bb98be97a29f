//! Fetches a single user record from the demo user service
//! (`GET /api/users/{id}`) and classifies every failure into one of four
//! error kinds.

// === PUBLIC CONTRACT ===
pub mod contract;
pub use contract::{client, error, model};

pub mod module;
pub use module::UserFetch;

#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod infra;
