use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the LuxeMarket crates.
#[derive(Error, Debug)]
pub enum MarketError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A catalog document parsed but violates a catalog rule.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Session state was accessed before a session store was provided.
    #[error("Session state accessed outside of an initialised session context")]
    SessionNotInitialized,

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the market crates.
pub type Result<T> = std::result::Result<T, MarketError>;
