//! Error types and result aliases for Sprout operations.
//!
//! Provides a unified error type that covers all failure modes of a registry
//! call with actionable error messages.

use thiserror::Error;

/// Unified error type for all Sprout operations
#[derive(Error, Debug)]
pub enum SproutError {
    // Transport errors
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Protocol errors
    #[error("Registry returned status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    // Decode errors
    #[error("Failed to decode registry response: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for Sprout operations
pub type SproutResult<T> = Result<T, SproutError>;

impl SproutError {
    /// Create a transport error from any error type
    pub fn transport<E>(message: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message,
            source: Some(Box::new(source)),
        }
    }

    /// Create a decode error from any error type
    pub fn decode<E>(message: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message,
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error is recoverable by retrying at the call site
    pub fn is_recoverable(&self) -> bool {
        match self {
            SproutError::Transport { .. } => true,
            SproutError::UnexpectedStatus { status, .. } => *status >= 500,
            SproutError::Decode { .. } => false,
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            SproutError::Transport { .. } => {
                Some("Check your internet connection and try again")
            },
            SproutError::UnexpectedStatus { status: 404, .. } => {
                Some("Check the package name spelling or try searching the registry")
            },
            SproutError::UnexpectedStatus { status, .. } if *status >= 500 => {
                Some("The registry is having trouble, try again later")
            },
            _ => None,
        }
    }
}
