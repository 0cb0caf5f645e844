// src/lib.rs

pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod maze;
pub mod search;
pub mod types;

use std::sync::Arc;

use crate::config::SolverConfig;
use crate::engine::Solver;
use crate::errors::Result;
use crate::maze::Maze;
use crate::types::{NodeId, Path};

pub use crate::engine::SearchReport;
pub use crate::errors::MazewalkError;
pub use crate::types::SearchResult;

/// Find a path from `start` to any goal of `maze`.
///
/// `fork_after <= 0` runs a single sequential task; a positive value forks
/// child tasks at branching nodes at most every `fork_after` expansions.
/// Runs on its own worker pool and blocks the calling thread, so it must not
/// be called from inside a Tokio runtime (use [`Solver::solve`] there).
///
/// Returns `Ok(None)` when no goal is reachable.
pub fn solve(maze: Arc<dyn Maze>, start: NodeId, fork_after: i64) -> Result<Option<Path>> {
    let solver = Solver::new(SolverConfig::default().with_fork_after(fork_after));
    let report = solver.solve_blocking(maze, start)?;
    Ok(report.result.into_path())
}
