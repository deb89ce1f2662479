//! Error types for the core library

use std::path::PathBuf;

use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicitly named file does not exist
    #[error("config file not found: {path}")]
    Missing { path: PathBuf },

    /// File exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File could not be parsed as TOML
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level error type for folio-core
#[derive(Debug, Error)]
pub enum FolioError {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Project catalogue could not be loaded
    #[error("catalogue error: {0}")]
    Catalogue(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
