use serde::Deserialize;

use crate::contract::model::FeedTab;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HomeFeedConfig {
    /// Tab label, matched case-insensitively.
    #[serde(default = "default_tab")]
    pub default_tab: String,
}

impl Default for HomeFeedConfig {
    fn default() -> Self {
        Self {
            default_tab: default_tab(),
        }
    }
}

fn default_tab() -> String {
    FeedTab::default().label().to_string()
}
