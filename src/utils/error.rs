//! Error handling for the scraper client
//!
//! This module defines the error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Main error type for the scraper client
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or missing parameters for the active operation variant
    #[error("Validation error for item {item_index}: {message}")]
    Validation { item_index: usize, message: String },

    /// Non-recoverable dispatch failure, aborts the whole batch
    #[error("Request failed for item {item_index}: {message}")]
    Request { item_index: usize, message: String },

    /// Credential verification errors
    #[error("Credential verification failed: {0}")]
    Credentials(String),
}

impl ScrapeError {
    /// Create a validation error attributed to an item
    pub fn validation(item_index: usize, message: impl Into<String>) -> Self {
        Self::Validation {
            item_index,
            message: message.into(),
        }
    }

    /// Create a request error attributed to an item
    pub fn request(item_index: usize, message: impl Into<String>) -> Self {
        Self::Request {
            item_index,
            message: message.into(),
        }
    }

    /// The originating item index, if the error is attributed to one
    pub fn item_index(&self) -> Option<usize> {
        match self {
            Self::Validation { item_index, .. } | Self::Request { item_index, .. } => {
                Some(*item_index)
            }
            Self::Config(_) | Self::Credentials(_) => None,
        }
    }
}
