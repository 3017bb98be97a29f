//! Catalog behavior as seen through the published API.

use std::collections::HashSet;
use std::sync::Arc;

use bti_catalog::client::BtiCatalogApi;
use bti_catalog::domain::catalog::Catalog;
use bti_catalog::error::CatalogError;
use bti_catalog::gateways::local::BtiCatalogLocalClient;
use bti_catalog::model::{PatternStyle, TypeCode};

fn api() -> BtiCatalogLocalClient {
    BtiCatalogLocalClient::new(Arc::new(Catalog::builtin().unwrap()))
}

#[test]
fn every_combination_has_exactly_one_card() {
    let cards = api().list_cards();
    assert_eq!(cards.len(), 16);

    let codes: HashSet<TypeCode> = cards.iter().map(|c| c.type_code).collect();
    let all: HashSet<TypeCode> = TypeCode::all().collect();
    assert_eq!(codes, all);
}

#[test]
fn list_is_in_catalog_order() {
    let codes: Vec<String> = api()
        .list_cards()
        .iter()
        .map(|c| c.type_code.to_string())
        .collect();
    assert_eq!(
        codes,
        [
            "FAHV", "FAHP", "FASV", "FASP", "FTHV", "FTHP", "FTSV", "FTSP", "CAHV", "CAHP", "CASV",
            "CASP", "CTHV", "CTHP", "CTSV", "CTSP",
        ]
    );
}

#[test]
fn cards_follow_their_type_code() {
    for card in api().list_cards() {
        assert_eq!(card.pattern_style, card.type_code.pattern_style(), "{}", card.type_code);
        assert_eq!(card.tags.len(), 4);
        assert!(card.tags.iter().all(|t| !t.is_empty()));
        assert_eq!(card.gradient.len(), 2);
        for stop in card.gradient {
            assert!((0.0..=1.0).contains(&stop.opacity));
        }
        assert!(!card.title.trim().is_empty());
    }
}

#[test]
fn get_card_returns_the_clean_aristocrat() {
    let code: TypeCode = "CTSP".parse().unwrap();
    let card = api().get_card(code).unwrap();
    assert_eq!(card.title, "The Clean Aristocrat");
    assert_eq!(card.description, "깔끔한 맛의 귀족");
    assert_eq!(card.pattern_style, PatternStyle::Classic);
    assert_eq!(card.tags, ["깔끔한", "보수적인", "말캉한", "품격"]);
    assert_eq!(card.gradient[0].to_rgba_hex(), "#30B0C780");
}

#[test]
fn lookups_return_the_same_card_every_time() {
    let api = api();
    let code: TypeCode = "FAHV".parse().unwrap();
    let first = api.get_card(code).unwrap();
    let again = api.find_card("FAHV").unwrap();
    assert_eq!(first, again);
    assert_eq!(first.title, "The Spice Hunter");
}

#[test]
fn find_card_distinguishes_malformed_codes() {
    let api = api();
    assert!(matches!(
        api.find_card("ctsp"),
        Err(CatalogError::InvalidTypeCode { .. })
    ));
    assert!(matches!(
        api.find_card("CTSPP"),
        Err(CatalogError::InvalidTypeCode { .. })
    ));
}

#[test]
fn find_card_reports_unknown_code_on_partial_catalog() {
    let cards = api().list_cards().into_iter().take(15).collect();
    let partial = BtiCatalogLocalClient::new(Arc::new(Catalog::from_cards(cards)));
    assert_eq!(
        partial.find_card("CTSP"),
        Err(CatalogError::unknown_type_code("CTSP"))
    );
}

#[test]
fn pattern_groups_partition_the_catalog() {
    let api = api();
    let mut total = 0;
    for style in PatternStyle::ALL {
        let group = api.cards_by_pattern(style);
        assert_eq!(group.len(), 4, "{style}");
        assert!(group.iter().all(|c| c.pattern_style == style));
        total += group.len();
    }
    assert_eq!(total, 16);

    let minimal: Vec<String> = api
        .cards_by_pattern(PatternStyle::Minimal)
        .iter()
        .map(|c| c.type_code.to_string())
        .collect();
    assert_eq!(minimal, ["CAHV", "CAHP", "CASV", "CASP"]);
}
