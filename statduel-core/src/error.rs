use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatduelError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("upstream returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("completion service failed: {0}")]
    Completion(String),
    #[error("Serialization/deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
