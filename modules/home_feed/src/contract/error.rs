use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Unknown feed tab '{value}' (expected MSFP, Local or Popular)")]
    UnknownTab { value: String },
}

impl FeedError {
    pub fn unknown_tab(value: impl Into<String>) -> Self {
        Self::UnknownTab {
            value: value.into(),
        }
    }
}
