//! Error types for config loading, mutation and persistence.

use thiserror::Error;

/// Errors returned by the strict store APIs.
///
/// `ConfigStore::load` and `ConfigStore::save` downgrade these to a logged
/// fallback; the `try_*` variants return them to the caller.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading a config file failed.
    #[error("failed to read config: {0}")]
    ReadFailed(#[source] std::io::Error),
    /// Writing a config file failed.
    #[error("failed to write config: {0}")]
    WriteFailed(#[source] std::io::Error),
    /// Parsing config JSON failed.
    #[error("failed to parse config: {0}")]
    ParseFailed(#[from] serde_json::Error),
    /// Serializing the mapping to JSON failed.
    #[error("failed to encode config: {0}")]
    EncodeFailed(#[source] serde_json::Error),
    /// The top-level JSON value was not an object.
    #[error("invalid config: top-level value must be an object")]
    InvalidRoot,
    /// `set` was called with no keys.
    #[error("config path must contain at least one key")]
    EmptyPath,
    /// An intermediate value on a `set` path is not an object.
    #[error("cannot descend into {path}: value is not an object")]
    NotAnObject { path: String },
    /// A stored value did not match the typed record it was read as.
    #[error("invalid config at {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
