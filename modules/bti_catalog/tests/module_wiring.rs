use std::sync::Arc;

use bti_catalog::client::BtiCatalogApi;
use bti_catalog::BtiCatalog;
use modkit::{ModuleCtxBuilder, ModuleRegistry};
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn init_publishes_validated_catalog() {
    let ctx = ModuleCtxBuilder::new(CancellationToken::new()).build();
    let mut registry = ModuleRegistry::new();
    registry.register(Arc::new(BtiCatalog)).unwrap();

    registry.init_all(&ctx).await.unwrap();

    let api = ctx.client_hub().get::<dyn BtiCatalogApi>().unwrap();
    assert_eq!(api.list_cards().len(), 16);
    assert_eq!(api.find_card("FTSV").unwrap().title, "Soft Spice Economist");
}
