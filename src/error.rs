//! Errors for everything around the core: loading, configuration, sessions.
//!
//! Rendering and the variable store never fail; these are the surfaces that can.

use std::{io, path::PathBuf};

/// Errors that can occur outside the render and store core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid chapter at {}: {source}", path.display())]
    Chapter {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no config file found at {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("invalid config at {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },

    #[error("chapter has no entry {0}")]
    EntryNotFound(usize),

    #[error("entry {index} is of type '{kind}', not a variable")]
    NotAVariable { index: usize, kind: String },

    #[error("no variable entry named '{0}'")]
    UnknownVariable(String),

    #[error("invalid assignment '{0}': expected NAME=VALUE")]
    InvalidAssignment(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
