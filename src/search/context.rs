// src/search/context.rs

//! Per-search shared state.
//!
//! One [`SearchContext`] is created by every `solve` call and handed to its
//! tasks behind an `Arc`. Nothing here is global, so independent searches
//! (even concurrent ones on the same maze) never see each other's claims.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::exec::TaskScheduler;
use crate::maze::{Maze, MazeError};
use crate::search::ledger::ClaimableNodeSet;
use crate::types::{NodeId, PlayerId};

/// A task-local fault that was contained to its branch.
///
/// The nodes behind a failure stay claimed and unexplored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFailure {
    /// The maze could not enumerate a node's neighbours.
    Maze { node: NodeId, error: MazeError },
    /// The task rooted at `node` panicked.
    Panicked { node: NodeId, message: String },
    /// The task rooted at `node` ended without producing a result.
    Aborted { node: NodeId, message: String },
}

impl TaskFailure {
    pub fn node(&self) -> NodeId {
        match self {
            TaskFailure::Maze { node, .. }
            | TaskFailure::Panicked { node, .. }
            | TaskFailure::Aborted { node, .. } => *node,
        }
    }
}

#[derive(Debug)]
pub struct SearchContext {
    maze: Arc<dyn Maze>,
    scheduler: TaskScheduler,
    ledger: ClaimableNodeSet,
    start: NodeId,
    visualize: bool,
    cancelled: AtomicBool,
    failures: Mutex<Vec<TaskFailure>>,
    tasks_started: AtomicUsize,
    forks: AtomicUsize,
}

impl SearchContext {
    pub fn new(
        maze: Arc<dyn Maze>,
        scheduler: TaskScheduler,
        start: NodeId,
        visualize: bool,
    ) -> Self {
        Self {
            maze,
            scheduler,
            ledger: ClaimableNodeSet::new(),
            start,
            visualize,
            cancelled: AtomicBool::new(false),
            failures: Mutex::new(Vec::new()),
            tasks_started: AtomicUsize::new(0),
            forks: AtomicUsize::new(0),
        }
    }

    pub fn maze(&self) -> &dyn Maze {
        self.maze.as_ref()
    }

    pub fn scheduler(&self) -> &TaskScheduler {
        &self.scheduler
    }

    pub fn ledger(&self) -> &ClaimableNodeSet {
        &self.ledger
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Stop claiming and forking everywhere; a path is already known.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub fn record_failure(&self, failure: TaskFailure) {
        warn!(node = failure.node(), ?failure, "search branch failed; treating it as not found");
        self.failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(failure);
    }

    pub fn failures(&self) -> Vec<TaskFailure> {
        self.failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub(crate) fn note_task_started(&self) {
        self.tasks_started.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn note_forks(&self, count: usize) {
        self.forks.fetch_add(count, Ordering::Relaxed);
    }

    pub fn tasks_started(&self) -> usize {
        self.tasks_started.load(Ordering::Relaxed)
    }

    pub fn forks(&self) -> usize {
        self.forks.load(Ordering::Relaxed)
    }

    pub fn claimed_nodes(&self) -> HashSet<NodeId> {
        self.ledger.snapshot()
    }

    /// Register a visualization marker; failures are logged and ignored.
    pub(crate) fn spawn_player(&self, node: NodeId) -> Option<PlayerId> {
        if !self.visualize {
            return None;
        }
        match self.maze.new_player(node) {
            Ok(player) => Some(player),
            Err(error) => {
                warn!(node, %error, "could not create player; continuing without visualization");
                None
            }
        }
    }

    pub(crate) fn move_player(&self, player: Option<PlayerId>, node: NodeId) {
        let Some(player) = player else {
            return;
        };
        if let Err(error) = self.maze.move_player(player, node) {
            warn!(player, node, %error, "player move failed");
        }
    }
}
