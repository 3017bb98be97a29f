//! Static catalog of the 16 BTI taste-personality cards.

// === PUBLIC CONTRACT ===
pub mod contract;
pub use contract::{client, error, model};

pub mod module;
pub use module::BtiCatalog;

#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod gateways;
