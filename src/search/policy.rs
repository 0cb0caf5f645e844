// src/search/policy.rs

/// When a task splits its claimed neighbours into child tasks.
///
/// The policy is `Copy` and travels with each task, so forked children get
/// their own copy instead of sharing a mutable counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForkPolicy {
    /// Single task, explicit-stack depth-first walk.
    #[default]
    Never,
    /// Fork at a branching node once at least this many nodes were expanded
    /// since the task's last fork (or its start).
    After(u64),
}

impl ForkPolicy {
    /// Map the `fork_after` setting: `<= 0` disables forking.
    pub fn from_fork_after(fork_after: i64) -> Self {
        if fork_after <= 0 {
            ForkPolicy::Never
        } else {
            ForkPolicy::After(fork_after as u64)
        }
    }

    /// Decide whether to fork after expanding a node.
    ///
    /// A lone claimed neighbour never forks: the task just walks on.
    pub fn should_fork(&self, steps_since_fork: u64, newly_claimed: usize) -> bool {
        match *self {
            ForkPolicy::Never => false,
            ForkPolicy::After(every) => newly_claimed > 1 && steps_since_fork >= every,
        }
    }
}
