//! # ModKit
//!
//! Small wiring kit shared by UMai modules:
//!
//! - [`Module`]: a module reads its config and publishes its API during `init`
//! - [`ModuleCtx`]: scoped access to configuration, the [`ClientHub`] and the
//!   process cancellation token
//! - [`ClientHub`]: consumers fetch module APIs by interface type
//! - [`TracedClient`]: outgoing HTTP with a span and `traceparent` per request

pub use anyhow::Result;
pub use async_trait::async_trait;

pub mod client_hub;
pub mod context;
pub mod contracts;
pub mod http;
pub mod registry;
pub mod shutdown;

pub use client_hub::{ClientHub, ClientHubError};
pub use context::{ConfigProvider, ModuleCtx, ModuleCtxBuilder};
pub use contracts::Module;
pub use http::client::TracedClient;
pub use registry::ModuleRegistry;
pub use shutdown::wait_for_shutdown;
