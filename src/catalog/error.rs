//! Upstream error module
//!
//! Every catalog failure funnels through this type before it reaches a response

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The client could not be constructed at startup
    #[error("catalog client not available: {0}")]
    Unavailable(String),

    #[error("{endpoint} request failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} request returned HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("unexpected {endpoint} response: {message}")]
    Decode {
        endpoint: &'static str,
        message: String,
    },
}

impl CatalogError {
    pub fn decode(endpoint: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            endpoint,
            message: message.into(),
        }
    }

    /// Whether a second attempt may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_timeout() || source.is_connect(),
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Unavailable(_) | Self::Decode { .. } => false,
        }
    }
}
