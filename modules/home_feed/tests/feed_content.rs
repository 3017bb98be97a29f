use std::collections::HashMap;
use std::sync::Arc;

use bti_catalog::client::BtiCatalogApi;
use bti_catalog::BtiCatalog;
use home_feed::client::HomeFeedApi;
use home_feed::gateways::local::HomeFeedLocalClient;
use home_feed::model::FeedTab;
use home_feed::HomeFeed;
use modkit::{ConfigProvider, ModuleCtxBuilder, ModuleRegistry};
use rust_decimal_macros::dec;
use tokio_util::sync::CancellationToken;

struct StaticConfig(HashMap<String, serde_json::Value>);

impl ConfigProvider for StaticConfig {
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value> {
        self.0.get(module_name)
    }
}

fn titles(api: &dyn HomeFeedApi, tab: FeedTab) -> Vec<String> {
    api.recommendations(tab).into_iter().map(|i| i.title).collect()
}

#[test]
fn tabs_are_in_display_order() {
    let api = HomeFeedLocalClient::default();
    assert_eq!(api.tabs(), [FeedTab::Msfp, FeedTab::Local, FeedTab::Popular]);
    assert_eq!(api.default_tab(), FeedTab::Msfp);
}

#[test]
fn every_tab_has_three_items() {
    let api = HomeFeedLocalClient::default();
    assert_eq!(titles(&api, FeedTab::Msfp), ["Hot Pot", "ramen", "deopbap"]);
    assert_eq!(titles(&api, FeedTab::Local), ["Omurice", "rice cake", "Sashimi"]);
    assert_eq!(titles(&api, FeedTab::Popular), ["Yakisoba", "Yukhoe", "Sushi"]);

    for tab in api.tabs() {
        let items = api.recommendations(tab);
        let prices: Vec<_> = items.iter().map(|i| i.price).collect();
        let ratings: Vec<_> = items.iter().map(|i| i.rating).collect();
        assert_eq!(prices, [dec!(25.00), dec!(18.00), dec!(15.00)]);
        assert_eq!(ratings, [dec!(4.8), dec!(4.9), dec!(4.7)]);
        assert!(items.iter().all(|i| i.title == i.title.trim()));
    }
}

#[test]
fn featured_banner_is_the_clean_aristocrat() {
    let banner = HomeFeedLocalClient::default().featured();
    assert_eq!(banner.type_code.to_string(), "CTSP");
    assert_eq!(banner.image, "deopbap");
    assert!(banner.tagline.starts_with("The food is familiar and upscale"));
}

#[tokio::test]
async fn init_after_catalog_checks_featured_card_and_reads_default_tab() {
    let mut modules = HashMap::new();
    modules.insert(
        "home_feed".to_string(),
        serde_json::json!({ "default_tab": "popular" }),
    );
    let ctx = ModuleCtxBuilder::new(CancellationToken::new())
        .with_config_provider(Arc::new(StaticConfig(modules)))
        .build();

    let mut registry = ModuleRegistry::new();
    registry.register(Arc::new(BtiCatalog)).unwrap();
    registry.register(Arc::new(HomeFeed)).unwrap();
    registry.init_all(&ctx).await.unwrap();

    let feed = ctx.client_hub().get::<dyn HomeFeedApi>().unwrap();
    let catalog = ctx.client_hub().get::<dyn BtiCatalogApi>().unwrap();
    assert_eq!(feed.default_tab(), FeedTab::Popular);

    let card = catalog.get_card(feed.featured().type_code).unwrap();
    assert_eq!(card.title, "The Clean Aristocrat");
}

#[tokio::test]
async fn init_rejects_unknown_default_tab() {
    let mut modules = HashMap::new();
    modules.insert(
        "home_feed".to_string(),
        serde_json::json!({ "default_tab": "trending" }),
    );
    let ctx = ModuleCtxBuilder::new(CancellationToken::new())
        .with_config_provider(Arc::new(StaticConfig(modules)))
        .build();

    let mut registry = ModuleRegistry::new();
    registry.register(Arc::new(HomeFeed)).unwrap();
    let err = registry.init_all(&ctx).await.unwrap_err();

    assert!(format!("{err:#}").contains("Unknown feed tab 'trending'"));
    assert!(ctx.client_hub().get::<dyn HomeFeedApi>().is_err());
}

#[tokio::test]
async fn init_rejects_unknown_config_key() {
    let mut modules = HashMap::new();
    modules.insert("home_feed".to_string(), serde_json::json!({ "tab": "Local" }));
    let ctx = ModuleCtxBuilder::new(CancellationToken::new())
        .with_config_provider(Arc::new(StaticConfig(modules)))
        .build();

    let mut registry = ModuleRegistry::new();
    registry.register(Arc::new(HomeFeed)).unwrap();
    let err = registry.init_all(&ctx).await.unwrap_err();

    assert!(format!("{err:#}").contains("invalid home_feed config"));
    assert!(ctx.client_hub().get::<dyn HomeFeedApi>().is_err());
}
