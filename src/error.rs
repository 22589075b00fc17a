use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration or mention sources
#[derive(Debug, Error)]
pub enum MentionsError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid mention source: {0}")]
    SourceParse(#[from] serde_json::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
