// src/exec/pool.rs

use std::future::Future;

use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::errors::{MazewalkError, Result};
use crate::exec::scheduler::TaskScheduler;

/// Dedicated multi-threaded runtime for callers outside of Tokio.
#[derive(Debug)]
pub struct WorkerPool {
    runtime: Runtime,
}

impl WorkerPool {
    /// Build a pool with `workers` threads, or one per available core.
    pub fn new(workers: Option<usize>) -> Result<Self> {
        if workers == Some(0) {
            return Err(MazewalkError::ConfigError(
                "worker pool needs at least one worker".to_string(),
            ));
        }

        let mut builder = Builder::new_multi_thread();
        builder.thread_name("mazewalk-worker").enable_all();
        if let Some(count) = workers {
            builder.worker_threads(count);
        }

        let runtime = builder
            .build()
            .map_err(|e| MazewalkError::Runtime(e.to_string()))?;
        debug!(?workers, "worker pool started");
        Ok(Self { runtime })
    }

    pub fn scheduler(&self) -> TaskScheduler {
        TaskScheduler::from_handle(self.runtime.handle().clone())
    }

    /// Drive `future` to completion on this pool.
    ///
    /// Panics if called from inside another Tokio runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
