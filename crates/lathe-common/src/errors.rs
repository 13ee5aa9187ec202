use std::path::PathBuf;

/// Failures surfaced by the host request bridge.
///
/// Only `Query` corresponds to an answer from the host; the other variants
/// are local conditions. Decode problems on a success payload are not
/// errors at all — the bridge degrades to returning the raw text.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The host answered through its failure callback.
    #[error("host query failed ({code}): {message}")]
    Query { code: i32, message: String },

    /// The transport discarded the query without ever answering it.
    #[error("host dropped query without responding")]
    Disconnected,

    /// The request envelope could not be serialized.
    #[error("request encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config invalid value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
