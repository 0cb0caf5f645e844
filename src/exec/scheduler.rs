// src/exec/scheduler.rs

use std::any::Any;

use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::task::{self, JoinError, JoinHandle};
use tracing::trace;

use crate::errors::{MazewalkError, Result};
use crate::search::SearchTask;
use crate::types::{NodeId, SearchResult};

/// Spawns search tasks onto a Tokio runtime.
///
/// Cheap to clone; every clone schedules onto the same runtime.
#[derive(Debug, Clone)]
pub struct TaskScheduler {
    handle: Handle,
}

impl TaskScheduler {
    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }

    /// Scheduler for the runtime the caller is running on.
    pub fn current() -> Result<Self> {
        Handle::try_current()
            .map(Self::from_handle)
            .map_err(|e| MazewalkError::Runtime(e.to_string()))
    }

    /// Queue `task` for execution on any worker.
    pub fn spawn(&self, task: SearchTask) -> TaskHandle {
        let node = task.origin();
        trace!(node, "spawning search task");
        TaskHandle {
            node,
            join: self.handle.spawn(task.run()),
        }
    }

    /// Run a CPU-bound closure without stalling the runtime's other tasks.
    ///
    /// On a multi-threaded runtime the current worker hands its queue to
    /// another thread (`block_in_place`); elsewhere the closure moves to the
    /// blocking pool. Must be called from a task running on this runtime.
    pub async fn run_blocking<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        match self.handle.runtime_flavor() {
            RuntimeFlavor::MultiThread => Ok(task::block_in_place(f)),
            _ => self.handle.spawn_blocking(f).await.map_err(join_error),
        }
    }
}

/// Join side of a spawned [`SearchTask`].
///
/// Dropping a handle detaches the task; the search always joins instead.
#[derive(Debug)]
pub struct TaskHandle {
    node: NodeId,
    join: JoinHandle<Result<SearchResult>>,
}

impl TaskHandle {
    /// Origin node of the task behind this handle.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Wait for the task to finish and take its result.
    ///
    /// A panic inside the task surfaces as [`MazewalkError::TaskPanicked`].
    pub async fn join(self) -> Result<SearchResult> {
        self.join.await.map_err(join_error)?
    }
}

fn join_error(err: JoinError) -> MazewalkError {
    if err.is_panic() {
        MazewalkError::TaskPanicked(panic_message(err.into_panic()))
    } else {
        MazewalkError::TaskCancelled
    }
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
