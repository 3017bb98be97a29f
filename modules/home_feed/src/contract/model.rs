use std::fmt;
use std::str::FromStr;

use bti_catalog::model::TypeCode;
use rust_decimal::Decimal;

use crate::contract::error::FeedError;

/// Recommendation tab on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeedTab {
    #[default]
    Msfp,
    Local,
    Popular,
}

impl FeedTab {
    /// Display order.
    pub const ALL: [Self; 3] = [Self::Msfp, Self::Local, Self::Popular];

    pub fn label(self) -> &'static str {
        match self {
            Self::Msfp => "MSFP",
            Self::Local => "Local",
            Self::Popular => "Popular",
        }
    }
}

impl fmt::Display for FeedTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for FeedTab {
    type Err = FeedError;

    /// Case-insensitive match on the label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FeedError::unknown_tab(s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodItem {
    pub title: String,
    /// USD.
    pub price: Decimal,
    /// 0.0 to 5.0.
    pub rating: Decimal,
}

impl FoodItem {
    /// `$25.00`
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// `4.8`
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Banner promoting one BTI card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedBanner {
    pub type_code: TypeCode,
    pub tagline: String,
    /// Asset key of the banner image.
    pub image: String,
}
