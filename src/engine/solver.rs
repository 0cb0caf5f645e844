// src/engine/solver.rs

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{Instrument, info, info_span, warn};

use crate::config::SolverConfig;
use crate::errors::{MazewalkError, Result};
use crate::exec::{TaskScheduler, WorkerPool};
use crate::maze::Maze;
use crate::search::{ForkPolicy, SearchContext, SearchTask, TaskFailure};
use crate::types::{NodeId, SearchResult};

/// Everything a finished search leaves behind.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub result: SearchResult,
    /// Nodes claimed during the search, start included.
    pub claimed: HashSet<NodeId>,
    /// Number of predecessor links recorded.
    pub predecessor_links: usize,
    /// Child tasks forked (the root task is not counted).
    pub forks: usize,
    /// Tasks that started running, root included.
    pub tasks: usize,
    /// Branches that failed and were treated as not found.
    pub failures: Vec<TaskFailure>,
}

#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search from `start` on the current Tokio runtime.
    ///
    /// Must be awaited inside a Tokio runtime. A multi-threaded runtime runs
    /// branches in parallel; on a current-thread runtime each task's walk
    /// moves to the blocking pool, so the caller's other tasks and timers
    /// (e.g. `tokio::time::timeout`) keep running either way.
    pub async fn solve(&self, maze: Arc<dyn Maze>, start: NodeId) -> Result<SearchResult> {
        Ok(self.solve_with_report(maze, start).await?.result)
    }

    /// Like [`Solver::solve`], but also returns ledger and task statistics.
    ///
    /// Same runtime requirements as [`Solver::solve`].
    pub async fn solve_with_report(
        &self,
        maze: Arc<dyn Maze>,
        start: NodeId,
    ) -> Result<SearchReport> {
        let scheduler = TaskScheduler::current()?;
        let span = info_span!("solve", start, fork_after = self.config.fork_after);

        async move {
            let ctx = Arc::new(SearchContext::new(
                maze,
                scheduler,
                start,
                self.config.visualize,
            ));
            ctx.ledger().try_claim(start);
            self.run_root(ctx).await
        }
        .instrument(span)
        .await
    }

    /// Run the root task on an already prepared context and build the report.
    async fn run_root(&self, ctx: Arc<SearchContext>) -> Result<SearchReport> {
        let start = ctx.start();
        let policy = ForkPolicy::from_fork_after(self.config.fork_after);

        let root = ctx
            .scheduler()
            .spawn(SearchTask::root(Arc::clone(&ctx), policy));
        let result = match root.join().await {
            Ok(result) => result,
            Err(err) if err.is_fatal() => return Err(err),
            Err(MazewalkError::TaskPanicked(message)) => {
                ctx.record_failure(TaskFailure::Panicked {
                    node: start,
                    message,
                });
                SearchResult::NotFound
            }
            Err(err) => {
                ctx.record_failure(TaskFailure::Aborted {
                    node: start,
                    message: err.to_string(),
                });
                SearchResult::NotFound
            }
        };

        let report = SearchReport {
            claimed: ctx.claimed_nodes(),
            predecessor_links: ctx.ledger().predecessor_count(),
            forks: ctx.forks(),
            tasks: ctx.tasks_started(),
            failures: ctx.failures(),
            result,
        };

        if !report.failures.is_empty() {
            warn!(
                failures = report.failures.len(),
                "search finished with failed branches"
            );
        }
        info!(
            found = report.result.is_found(),
            claimed = report.claimed.len(),
            forks = report.forks,
            tasks = report.tasks,
            "search finished"
        );
        Ok(report)
    }

    /// Run a search on a dedicated worker pool and block until it finishes.
    ///
    /// Panics if called from inside a Tokio runtime.
    pub fn solve_blocking(&self, maze: Arc<dyn Maze>, start: NodeId) -> Result<SearchReport> {
        let pool = WorkerPool::new(self.config.workers)?;
        pool.block_on(self.solve_with_report(maze, start))
    }
}
