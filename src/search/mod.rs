// src/search/mod.rs

//! Parallel depth-first reachability search.
//!
//! - [`ledger`] holds the shared claim set and predecessor links.
//! - [`path`] rebuilds the start-to-goal path from those links.
//! - [`policy`] decides when a task forks instead of walking on alone.
//! - [`context`] bundles everything one search shares between its tasks.
//! - [`task`] is the unit of exploration that the scheduler runs.

pub mod context;
pub mod ledger;
pub mod path;
pub mod policy;
pub mod task;

pub use context::{SearchContext, TaskFailure};
pub use ledger::ClaimableNodeSet;
pub use path::PathReconstructor;
pub use policy::ForkPolicy;
pub use task::SearchTask;
