use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::contract::{
    error::CatalogError,
    model::{Card, GradientStop, PatternStyle, TypeCode},
};
use crate::domain::data::{CardSeed, BUILTIN_CARDS};

const EXPECTED_CARDS: usize = 16;

/// In-memory card catalog with a type-code index.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
    by_code: HashMap<TypeCode, usize>,
}

impl Catalog {
    /// Build from seed records, assigning a fresh id to each card.
    ///
    /// Only malformed type codes fail here; everything else is left to
    /// [`Catalog::validate`]. On duplicate codes the first card wins the index.
    pub fn from_seeds(seeds: &[CardSeed]) -> Result<Self, CatalogError> {
        let cards = seeds
            .iter()
            .map(|seed| {
                Ok(Card {
                    id: Uuid::new_v4(),
                    type_code: seed.code.parse()?,
                    title: seed.title.to_string(),
                    description: seed.description.to_string(),
                    tags: seed.tags.map(str::to_string),
                    gradient: seed.gradient.map(|(c, o)| GradientStop::new(c, o)),
                    pattern_style: seed.pattern,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;
        Ok(Self::from_cards(cards))
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut by_code = HashMap::with_capacity(cards.len());
        for (idx, card) in cards.iter().enumerate() {
            by_code.entry(card.type_code).or_insert(idx);
        }
        Self { cards, by_code }
    }

    /// The built-in 16-card catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_seeds(&BUILTIN_CARDS)
    }

    /// Check every catalog invariant and report all violations at once.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut violations = Vec::new();

        if self.cards.len() != EXPECTED_CARDS {
            violations.push(format!(
                "expected {EXPECTED_CARDS} cards, found {}",
                self.cards.len()
            ));
        }

        let mut seen = HashMap::new();
        for card in &self.cards {
            *seen.entry(card.type_code).or_insert(0usize) += 1;
        }
        for (code, n) in &seen {
            if *n > 1 {
                violations.push(format!("type code {code} appears {n} times"));
            }
        }
        for code in TypeCode::all() {
            if !seen.contains_key(&code) {
                violations.push(format!("no card for type code {code}"));
            }
        }

        for card in &self.cards {
            let code = card.type_code;
            let expected = code.pattern_style();
            if card.pattern_style != expected {
                violations.push(format!(
                    "{code}: pattern style is {}, expected {expected}",
                    card.pattern_style
                ));
            }
            if card.tags.iter().map(String::as_str).ne(code.tags()) {
                violations.push(format!(
                    "{code}: tags {:?} do not match axis labels {:?}",
                    card.tags,
                    code.tags()
                ));
            }
            for stop in &card.gradient {
                if !(0.0..=1.0).contains(&stop.opacity) {
                    violations.push(format!(
                        "{code}: gradient opacity {} is outside [0, 1]",
                        stop.opacity
                    ));
                }
            }
        }

        if violations.is_empty() {
            debug!(cards = self.cards.len(), "catalog validated");
            Ok(())
        } else {
            violations.sort();
            Err(CatalogError::Invariant { violations })
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, code: TypeCode) -> Option<&Card> {
        self.by_code.get(&code).map(|&idx| &self.cards[idx])
    }

    pub fn find(&self, code: &str) -> Result<&Card, CatalogError> {
        let parsed: TypeCode = code.parse()?;
        self.get(parsed)
            .ok_or_else(|| CatalogError::unknown_type_code(code))
    }

    pub fn by_pattern(&self, style: PatternStyle) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.pattern_style == style)
    }
}
