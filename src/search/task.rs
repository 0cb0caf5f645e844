// src/search/task.rs

//! The unit of exploration.
//!
//! A [`SearchTask`] walks depth-first from its origin using a private stack.
//! Every neighbour it reaches goes through [`ClaimableNodeSet::claim_from`];
//! only the winner of that claim ever expands the node. When the
//! [`ForkPolicy`] says so, the freshly claimed neighbours of a branching node
//! are handed to child tasks instead of the local stack. Children are joined
//! in spawn order once the local walk ends, and the first path wins.
//!
//! [`ClaimableNodeSet::claim_from`]: crate::search::ClaimableNodeSet::claim_from

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, info, trace};

use crate::errors::{MazewalkError, Result};
use crate::exec::TaskHandle;
use crate::exec::scheduler::panic_message;
use crate::search::context::{SearchContext, TaskFailure};
use crate::search::policy::ForkPolicy;
use crate::types::{NodeId, SearchResult};

pub struct SearchTask {
    ctx: Arc<SearchContext>,
    origin: NodeId,
    policy: ForkPolicy,
}

impl SearchTask {
    /// Task rooted at the search's start node. The caller claims the start.
    pub fn root(ctx: Arc<SearchContext>, policy: ForkPolicy) -> Self {
        let origin = ctx.start();
        Self {
            ctx,
            origin,
            policy,
        }
    }

    fn child(&self, origin: NodeId) -> Self {
        Self {
            ctx: Arc::clone(&self.ctx),
            origin,
            policy: self.policy,
        }
    }

    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Explore from the origin and return the first path found in this
    /// branch (locally or by a child), or `NotFound`.
    ///
    /// The walk itself is CPU-bound and goes through
    /// [`TaskScheduler::run_blocking`](crate::exec::TaskScheduler::run_blocking),
    /// so the runtime keeps serving other tasks (and timers) meanwhile.
    ///
    /// Only [`MazewalkError::is_fatal`] errors are returned; everything else,
    /// panics in the maze included, is recorded on the context as a
    /// [`TaskFailure`]. Children forked before a panic are still joined.
    pub async fn run(self) -> Result<SearchResult> {
        self.ctx.note_task_started();

        let walker = self.child(self.origin);
        let (local, children) = match self
            .ctx
            .scheduler()
            .run_blocking(move || walker.walk())
            .await
        {
            Ok(walked) => walked,
            Err(err) => {
                self.ctx.record_failure(TaskFailure::Aborted {
                    node: self.origin,
                    message: err.to_string(),
                });
                (Ok(SearchResult::NotFound), Vec::new())
            }
        };

        let joined = self.join_children(children).await;

        match (local, joined) {
            (Err(fatal), _) | (_, Err(fatal)) => Err(fatal),
            (Ok(SearchResult::Found(path)), Ok(_)) => Ok(SearchResult::Found(path)),
            (Ok(SearchResult::NotFound), Ok(result)) => Ok(result),
        }
    }

    /// Local walk plus the handles of every child it forked, even when the
    /// walk panicked halfway.
    fn walk(&self) -> (Result<SearchResult>, Vec<TaskHandle>) {
        let mut children: Vec<TaskHandle> = Vec::new();
        let local = match panic::catch_unwind(AssertUnwindSafe(|| self.explore(&mut children))) {
            Ok(local) => local,
            Err(payload) => {
                self.ctx.record_failure(TaskFailure::Panicked {
                    node: self.origin,
                    message: panic_message(payload),
                });
                Ok(SearchResult::NotFound)
            }
        };
        (local, children)
    }

    /// Depth-first walk over the task-private frontier.
    fn explore(&self, children: &mut Vec<TaskHandle>) -> Result<SearchResult> {
        let player = self.ctx.spawn_player(self.origin);
        let mut frontier = vec![self.origin];
        let mut steps_since_fork: u64 = 0;

        while let Some(current) = frontier.pop() {
            if self.ctx.is_cancelled() {
                trace!(origin = self.origin, node = current, "search cancelled; unwinding");
                break;
            }
            self.ctx.move_player(player, current);

            if self.ctx.maze().has_goal(current) {
                return self.found(current);
            }

            let neighbors = match self.ctx.maze().neighbors(current) {
                Ok(neighbors) => neighbors,
                Err(error) => {
                    self.ctx.record_failure(TaskFailure::Maze {
                        node: current,
                        error,
                    });
                    continue;
                }
            };

            let mut claimed = Vec::with_capacity(neighbors.len());
            for next in neighbors {
                if self.ctx.is_cancelled() {
                    break;
                }
                if self.ctx.ledger().claim_from(next, current) {
                    claimed.push(next);
                }
            }
            steps_since_fork += 1;

            if self.policy.should_fork(steps_since_fork, claimed.len()) {
                debug!(node = current, forks = claimed.len(), "forking child tasks");
                self.ctx.note_forks(claimed.len());
                for next in claimed {
                    children.push(self.ctx.scheduler().spawn(self.child(next)));
                }
                steps_since_fork = 0;
            } else {
                // Reverse so the first listed neighbour is popped first.
                frontier.extend(claimed.into_iter().rev());
            }
        }

        Ok(SearchResult::NotFound)
    }

    fn found(&self, goal: NodeId) -> Result<SearchResult> {
        // Stop the rest of the tree whether or not the path rebuilds cleanly.
        self.ctx.cancel();
        let path = self.ctx.ledger().reconstruct_path(self.ctx.start(), goal)?;
        let from_end: Vec<String> = path.nodes().iter().rev().map(|n| n.to_string()).collect();
        info!(
            goal,
            length = path.len(),
            claimed = self.ctx.ledger().claimed_count(),
            from_end = %from_end.join(" <- "),
            "found goal"
        );
        Ok(SearchResult::Found(path))
    }

    /// Join every child in spawn order, keeping the first path.
    ///
    /// All children are joined even after a path is known; the shared
    /// cancellation flag makes the late ones return quickly.
    async fn join_children(&self, children: Vec<TaskHandle>) -> Result<SearchResult> {
        let mut result = SearchResult::NotFound;
        let mut fatal: Option<MazewalkError> = None;

        for child in children {
            let node = child.node();
            match child.join().await {
                Ok(SearchResult::Found(path)) => {
                    if result.is_found() {
                        debug!(node, "discarding path from a later sibling");
                    } else {
                        self.ctx.cancel();
                        result = SearchResult::Found(path);
                    }
                }
                Ok(SearchResult::NotFound) => {}
                Err(err) if err.is_fatal() => {
                    fatal.get_or_insert(err);
                }
                Err(MazewalkError::TaskPanicked(message)) => {
                    self.ctx.record_failure(TaskFailure::Panicked { node, message });
                }
                Err(err) => {
                    self.ctx.record_failure(TaskFailure::Aborted {
                        node,
                        message: err.to_string(),
                    });
                }
            }
        }

        match fatal {
            Some(err) => Err(err),
            None => Ok(result),
        }
    }
}
