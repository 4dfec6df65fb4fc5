//! Error types for Sitescout

use thiserror::Error;

/// Result type alias using Sitescout's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Sitescout error types with helpful messages and suggestions
#[derive(Error, Debug)]
pub enum Error {
    // Content errors (E001-E099)
    #[error("Content source '{0}' is unavailable: {1}")]
    SourceUnavailable(String, String),

    #[error("Content catalog could not be parsed: {0}")]
    CatalogParse(#[from] serde_json::Error),

    // Network errors (E100-E199)
    #[error("Network error: {0}. Check your internet connection.")]
    NetworkError(#[from] reqwest::Error),

    #[error("Blog API returned HTTP {status}: {message}")]
    BlogApi { status: u16, message: String },

    #[error("Blog API is not configured. Set it with `sitescout config set blog.api_base_url <url>`.")]
    BlogApiNotConfigured,

    // Config errors (E600-E699)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // Input errors (E800-E899)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Generic errors
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::SourceUnavailable(..) => "E001",
            Self::CatalogParse(_) => "E002",
            Self::NetworkError(_) => "E100",
            Self::BlogApi { .. } => "E101",
            Self::BlogApiNotConfigured => "E102",
            Self::ConfigError(_) => "E600",
            Self::InvalidInput(_) => "E800",
            Self::Other(_) | Self::Io(_) => "E9999",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::CatalogParse(_) => Some("Check the catalog file is valid JSON".to_string()),
            Self::NetworkError(_) => Some("Check internet connection".to_string()),
            Self::BlogApi { status, .. } if *status >= 500 => {
                Some("The blog service is failing; try again later".to_string())
            }
            Self::BlogApiNotConfigured => {
                Some("sitescout config set blog.api_base_url <url>".to_string())
            }
            Self::ConfigError(_) => Some("sitescout config list".to_string()),
            _ => None,
        }
    }

    /// Whether a retry could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::NetworkError(_) | Self::SourceUnavailable(..) => true,
            Self::BlogApi { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}
