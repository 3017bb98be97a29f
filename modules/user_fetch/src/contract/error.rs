use thiserror::Error;

/// Outcome classification of a failed fetch. The set is closed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserFetchError {
    /// The endpoint could not be constructed; no request was sent.
    #[error("Invalid URL: {message}")]
    InvalidUrl { message: String },

    /// The transport did not produce a well-formed HTTP response.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// The server answered with a status outside 200..300.
    #[error("Request failed with HTTP status {status}")]
    RequestFailed { status: u16 },

    /// A 2xx body could not be decoded into a user response.
    #[error("Decoding failed: {message}")]
    DecodingFailed { message: String },
}

impl UserFetchError {
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    pub fn request_failed(status: u16) -> Self {
        Self::RequestFailed { status }
    }

    pub fn decoding_failed(message: impl Into<String>) -> Self {
        Self::DecodingFailed {
            message: message.into(),
        }
    }

    /// Stable short name of the error kind, for logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "invalid_url",
            Self::InvalidResponse { .. } => "invalid_response",
            Self::RequestFailed { .. } => "request_failed",
            Self::DecodingFailed { .. } => "decoding_failed",
        }
    }
}
