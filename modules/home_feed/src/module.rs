use std::sync::Arc;

use async_trait::async_trait;
use bti_catalog::client::BtiCatalogApi;
use modkit::{Module, ModuleCtx};
use tracing::{debug, info};

use crate::config::HomeFeedConfig;
use crate::contract::{client::HomeFeedApi, model::FeedTab};
use crate::gateways::local::HomeFeedLocalClient;

pub const MODULE_NAME: &str = "home_feed";

/// Publishes [`HomeFeedApi`]. When the catalog is already registered, init
/// also checks that the featured banner points at an existing card.
#[derive(Clone, Default)]
pub struct HomeFeed;

#[async_trait]
impl Module for HomeFeed {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    async fn init(&self, ctx: &ModuleCtx) -> anyhow::Result<()> {
        let cfg: HomeFeedConfig = ctx.module_config()?;
        let default_tab: FeedTab = cfg.default_tab.parse()?;
        let client = HomeFeedLocalClient::new(default_tab);

        let featured = client.featured().type_code;
        match ctx.client_hub().get::<dyn BtiCatalogApi>() {
            Ok(catalog) => {
                if catalog.get_card(featured).is_none() {
                    anyhow::bail!("featured card {featured} is not in the catalog");
                }
            }
            Err(e) => debug!(error = %e, "catalog not registered, featured card unchecked"),
        }
        info!(%default_tab, %featured, "home feed ready");

        let api: Arc<dyn HomeFeedApi> = Arc::new(client);
        ctx.client_hub().register::<dyn HomeFeedApi>(api);
        Ok(())
    }
}
