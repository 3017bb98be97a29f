use std::sync::Arc;

use async_trait::async_trait;
use modkit::{Module, ModuleCtx};
use tracing::info;

use crate::contract::client::BtiCatalogApi;
use crate::domain::catalog::Catalog;
use crate::gateways::local::BtiCatalogLocalClient;

pub const MODULE_NAME: &str = "bti_catalog";

/// Builds the built-in catalog once, validates it and publishes
/// [`BtiCatalogApi`] to the `ClientHub`. An invalid catalog fails init.
#[derive(Clone, Default)]
pub struct BtiCatalog;

#[async_trait]
impl Module for BtiCatalog {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    async fn init(&self, ctx: &ModuleCtx) -> anyhow::Result<()> {
        let catalog = Catalog::builtin()?;
        catalog.validate()?;
        info!(cards = catalog.cards().len(), "bti catalog loaded");

        let api: Arc<dyn BtiCatalogApi> = Arc::new(BtiCatalogLocalClient::new(Arc::new(catalog)));
        ctx.client_hub().register::<dyn BtiCatalogApi>(api);
        Ok(())
    }
}
