use crate::contract::model::{FeaturedBanner, FeedTab, FoodItem};

/// Public API of the home_feed module. All content is static.
pub trait HomeFeedApi: Send + Sync {
    /// Tabs in display order.
    fn tabs(&self) -> Vec<FeedTab>;

    /// Tab selected when the caller names none.
    fn default_tab(&self) -> FeedTab;

    fn recommendations(&self, tab: FeedTab) -> Vec<FoodItem>;

    fn featured(&self) -> FeaturedBanner;
}
