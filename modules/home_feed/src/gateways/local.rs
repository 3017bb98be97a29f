use crate::contract::{
    client::HomeFeedApi,
    model::{FeaturedBanner, FeedTab, FoodItem},
};
use crate::domain::data;

/// Local implementation of [`HomeFeedApi`] serving the built-in feed.
#[derive(Clone, Debug, Default)]
pub struct HomeFeedLocalClient {
    default_tab: FeedTab,
}

impl HomeFeedLocalClient {
    pub fn new(default_tab: FeedTab) -> Self {
        Self { default_tab }
    }
}

impl HomeFeedApi for HomeFeedLocalClient {
    fn tabs(&self) -> Vec<FeedTab> {
        FeedTab::ALL.to_vec()
    }

    fn default_tab(&self) -> FeedTab {
        self.default_tab
    }

    fn recommendations(&self, tab: FeedTab) -> Vec<FoodItem> {
        data::recommendations(tab)
    }

    fn featured(&self) -> FeaturedBanner {
        data::featured()
    }
}
