// src/maze/mod.rs

//! The maze collaborator the search core calls into.
//!
//! The core never inspects topology or goal definitions directly; it only
//! asks a [`Maze`] for neighbours and goal membership, and drives its
//! visualization markers. [`GraphMaze`] is an in-memory implementation used
//! by callers that already hold the graph, and by the test suite.

pub mod graph;

pub use graph::GraphMaze;

use std::fmt::Debug;

use thiserror::Error;

use crate::types::{NodeId, PlayerId};

/// Failures reported by a [`Maze`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("maze backend failure: {0}")]
    Backend(String),
}

/// Abstract maze interface.
///
/// `neighbors` and `has_goal` must be pure and callable from many workers at
/// once. The player methods exist for visualization only: the search never
/// uses them to decide anything and keeps going when they fail.
pub trait Maze: Send + Sync + Debug {
    /// Adjacent nodes of `node`. Treated as a set; duplicates are harmless.
    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, MazeError>;

    fn has_goal(&self, node: NodeId) -> bool;

    /// Register a visualization marker at `node`.
    fn new_player(&self, node: NodeId) -> Result<PlayerId, MazeError>;

    /// Move a visualization marker. Must be idempotent.
    fn move_player(&self, player: PlayerId, node: NodeId) -> Result<(), MazeError>;
}
