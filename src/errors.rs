// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::maze::MazeError;
use crate::types::NodeId;

#[derive(Error, Debug)]
pub enum MazewalkError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),

    /// The predecessor chain from `goal` does not lead back to `start`.
    ///
    /// Only raised when the ledger invariants were broken somewhere else.
    #[error("Broken predecessor chain from {goal} to {start}: {reason}")]
    Structural {
        start: NodeId,
        goal: NodeId,
        reason: String,
    },

    #[error("Search task panicked: {0}")]
    TaskPanicked(String),

    #[error("Search task was cancelled before completing")]
    TaskCancelled,

    #[error("Worker pool error: {0}")]
    Runtime(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MazewalkError {
    /// Fatal errors abort the whole search instead of being contained to the
    /// branch that raised them.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MazewalkError::Structural { .. })
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, MazewalkError>;
