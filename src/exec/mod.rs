// src/exec/mod.rs

//! Fork/join execution layer.
//!
//! Search tasks run on a Tokio multi-threaded runtime, whose workers steal
//! queued tasks from each other. Joining a child only suspends the awaiting
//! task, so its worker is free to run other pending tasks meanwhile.
//!
//! - [`scheduler`] provides `spawn`/`join` over a runtime handle.
//! - [`pool`] owns a dedicated runtime for blocking callers.

pub mod pool;
pub mod scheduler;

pub use pool::WorkerPool;
pub use scheduler::{TaskHandle, TaskScheduler};
