use std::sync::Arc;

use crate::contract::{
    client::BtiCatalogApi,
    error::CatalogError,
    model::{Card, PatternStyle, TypeCode},
};
use crate::domain::catalog::Catalog;

/// Local implementation of [`BtiCatalogApi`] backed by an in-memory catalog.
#[derive(Clone)]
pub struct BtiCatalogLocalClient {
    catalog: Arc<Catalog>,
}

impl BtiCatalogLocalClient {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl BtiCatalogApi for BtiCatalogLocalClient {
    fn list_cards(&self) -> Vec<Card> {
        self.catalog.cards().to_vec()
    }

    fn get_card(&self, code: TypeCode) -> Option<Card> {
        self.catalog.get(code).cloned()
    }

    fn find_card(&self, code: &str) -> Result<Card, CatalogError> {
        self.catalog.find(code).cloned()
    }

    fn cards_by_pattern(&self, style: PatternStyle) -> Vec<Card> {
        self.catalog.by_pattern(style).cloned().collect()
    }
}
