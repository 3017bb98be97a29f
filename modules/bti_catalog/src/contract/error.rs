use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid BTI type code '{code}': {reason}")]
    InvalidTypeCode { code: String, reason: String },

    #[error("No card for BTI type code '{code}'")]
    UnknownTypeCode { code: String },

    #[error("Unknown pattern style '{value}' (expected dynamic, elegant, minimal or classic)")]
    UnknownPatternStyle { value: String },

    #[error("Catalog invariants violated: {}", violations.join("; "))]
    Invariant { violations: Vec<String> },
}

impl CatalogError {
    pub fn invalid_type_code(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTypeCode {
            code: code.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_type_code(code: impl Into<String>) -> Self {
        Self::UnknownTypeCode { code: code.into() }
    }
}
