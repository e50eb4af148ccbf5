// src/errors.rs

//! Crate-wide error taxonomy and helpers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZbuildError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The executable behind a command could not be launched at all.
    /// Distinct from a command that ran and exited non-zero.
    #[error("failed to spawn `{command}`: {source}")]
    SpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("compilation failed for {}: {diagnostic}", source_path.display())]
    CompileError {
        source_path: PathBuf,
        diagnostic: String,
    },

    #[error("linking failed: {diagnostic}")]
    LinkError { diagnostic: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ZbuildError>;
