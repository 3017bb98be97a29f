use std::sync::Arc;

use async_trait::async_trait;
use modkit::{Module, ModuleCtx, TracedClient};
use tracing::info;

use crate::config::UserFetchConfig;
use crate::contract::client::UserFetchApi;
use crate::infra::http::HttpUserFetchClient;

pub const MODULE_NAME: &str = "user_fetch";

/// Publishes the HTTP-backed [`UserFetchApi`] to the `ClientHub`.
///
/// The transport is injected by the host so that every module shares one
/// connection pool.
#[derive(Clone, Default)]
pub struct UserFetch {
    transport: TracedClient,
}

impl UserFetch {
    pub fn new(transport: TracedClient) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl Module for UserFetch {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    async fn init(&self, ctx: &ModuleCtx) -> anyhow::Result<()> {
        let cfg: UserFetchConfig = ctx.module_config()?;
        let client = HttpUserFetchClient::from_config(self.transport.clone(), &cfg)?;
        info!(base_url = %client.base_url(), "user_fetch client configured");

        let api: Arc<dyn UserFetchApi> = Arc::new(client);
        ctx.client_hub().register::<dyn UserFetchApi>(api);
        Ok(())
    }
}
