// Error types

use thiserror::Error;

/// Failure to produce a value from a decodable stream
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("stream is exhausted")]
    Exhausted,

    #[error("failed to read stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed TOML payload: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Error returned by the stream assertions when the test case must stop
#[derive(Debug, Error)]
pub enum ExpectError {
    #[error("failed to decode actual value: {0}")]
    Decode(#[from] DecodeError),
}

/// Failures aggregated by a finished test context
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("test '{name}' failed:\n{}", .messages.join("\n"))]
pub struct Failures {
    pub name: String,
    pub fatal: bool,
    pub messages: Vec<String>,
}
