//! Error types shared by the menu pipeline and the cart session.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid menu document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl MenuError {
    /// `true` when the error means the source file does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            MenuError::Read { source, .. } | MenuError::Io(source) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("invalid size tier {0}, expected 0, 1 or 2")]
    InvalidTier(u8),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

pub type Result<T, E = MenuError> = core::result::Result<T, E>;
