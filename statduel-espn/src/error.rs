use std::time::Duration;

use statduel_core::StatduelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EspnError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
    #[error("transport failure for {url}: {message}")]
    Transport { url: String, message: String },
    #[error("espn returned HTTP {status} for {url}")]
    Api { status: u16, url: String },
    #[error("malformed response from {url}: {message}")]
    Malformed { url: String, message: String },
}

impl From<EspnError> for StatduelError {
    fn from(value: EspnError) -> Self {
        match value {
            EspnError::Config(message) => StatduelError::InvalidConfig(message),
            EspnError::Api { status, url } => StatduelError::HttpStatus { status, url },
            EspnError::Malformed { .. } => StatduelError::Malformed(value.to_string()),
            other => StatduelError::Transport(other.to_string()),
        }
    }
}
