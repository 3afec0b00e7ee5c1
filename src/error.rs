use std::io;
use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("API invalid data: {0}")]
    ApiInvalidData(String),
    #[error("API invalid format: {0}")]
    ApiInvalidFormat(String),
    #[error("API authentication failed: {0}")]
    ApiAuthFailed(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Whether this error came out of a quote fetch, as opposed to
    /// local validation, configuration, or IO.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Error::ApiError(_)
                | Error::ApiInvalidData(_)
                | Error::ApiInvalidFormat(_)
                | Error::ApiAuthFailed(_)
                | Error::NetworkError(_)
        )
    }

    /// The single user-visible message for a failed refresh cycle.
    /// Transport, authentication and malformed-response failures all
    /// collapse into one reported kind; everything else renders as-is.
    pub fn user_message(&self) -> String {
        if self.is_fetch_error() {
            format!("quote fetch failed: {}", self)
        } else {
            self.to_string()
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Error::NetworkError(err.to_string())
        } else if err.is_decode() {
            Error::ApiInvalidFormat(err.to_string())
        } else {
            Error::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ApiInvalidFormat(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::InternalError(err.to_string())
    }
}

impl From<prometheus::Error> for Error {
    fn from(err: prometheus::Error) -> Self {
        Error::InternalError(err.to_string())
    }
}

pub type Result<T> = StdResult<T, Error>;
