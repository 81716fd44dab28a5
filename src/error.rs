//! Error types for the football data fetcher

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API key not provided: {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid season: {value} (expected a four-digit year)")]
    InvalidSeason { value: String },

    #[error("Invalid rival: {value} (expected ID:LABEL)")]
    InvalidRival { value: String },

    #[error("API returned errors for {endpoint}: {errors}")]
    Api { endpoint: String, errors: String },

    #[error("Unexpected response shape: {context}")]
    UnexpectedShape { context: String },
}

impl FetchError {
    pub(crate) fn shape(context: impl Into<String>) -> Self {
        FetchError::UnexpectedShape {
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests;
