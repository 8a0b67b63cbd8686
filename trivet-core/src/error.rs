use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Request aborted: the window elapsed before the response was read")]
    Aborted,

    #[error("Invalid JSON in response: {0}")]
    InvalidJson(String),
}

impl FetchError {
    /// Aborts are expected and discarded quietly; everything else is a real
    /// failure worth surfacing in the logs.
    pub fn is_abort(&self) -> bool {
        matches!(self, FetchError::Aborted)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
