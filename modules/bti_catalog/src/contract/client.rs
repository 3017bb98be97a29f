use crate::contract::{
    error::CatalogError,
    model::{Card, PatternStyle, TypeCode},
};

/// Public API of the bti_catalog module.
///
/// The catalog is immutable once built, so every call is synchronous and
/// returns owned copies.
pub trait BtiCatalogApi: Send + Sync {
    /// All cards in catalog order.
    fn list_cards(&self) -> Vec<Card>;

    fn get_card(&self, code: TypeCode) -> Option<Card>;

    /// Parse `code` and look it up.
    fn find_card(&self, code: &str) -> Result<Card, CatalogError>;

    /// Cards drawn with `style`, in catalog order.
    fn cards_by_pattern(&self, style: PatternStyle) -> Vec<Card>;
}
