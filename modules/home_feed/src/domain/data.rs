use bti_catalog::model::{Disposition, Intensity, Texture, TypeCode, ValueOrientation};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::contract::model::{FeaturedBanner, FeedTab, FoodItem};

pub const FEATURED_CODE: TypeCode = TypeCode::new(
    Intensity::Clean,
    Disposition::Traditional,
    Texture::Soft,
    ValueOrientation::Premium,
);
pub const FEATURED_TAGLINE: &str = "The food is familiar and upscale, with an emphasis on quality.";
pub const FEATURED_IMAGE: &str = "deopbap";

/// Price and rating per slot; every tab shares them.
const SLOTS: [(Decimal, Decimal); 3] = [
    (dec!(25.00), dec!(4.8)),
    (dec!(18.00), dec!(4.9)),
    (dec!(15.00), dec!(4.7)),
];

fn titles(tab: FeedTab) -> [&'static str; 3] {
    match tab {
        FeedTab::Msfp => ["Hot Pot", "ramen", "deopbap"],
        FeedTab::Local => ["Omurice", "rice cake", "Sashimi"],
        FeedTab::Popular => ["Yakisoba", "Yukhoe", "Sushi"],
    }
}

pub fn recommendations(tab: FeedTab) -> Vec<FoodItem> {
    titles(tab)
        .into_iter()
        .zip(SLOTS)
        .map(|(title, (price, rating))| FoodItem {
            title: title.trim().to_string(),
            price,
            rating,
        })
        .collect()
}

pub fn featured() -> FeaturedBanner {
    FeaturedBanner {
        type_code: FEATURED_CODE,
        tagline: FEATURED_TAGLINE.to_string(),
        image: FEATURED_IMAGE.to_string(),
    }
}
