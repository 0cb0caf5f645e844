// src/search/ledger.rs

//! Concurrency-safe discovery ledger shared by every task of one search.

use std::collections::HashSet;

use dashmap::mapref::entry::Entry;
use dashmap::{DashMap, DashSet};
use tracing::warn;

use crate::errors::Result;
use crate::search::path::PathReconstructor;
use crate::types::{NodeId, Path};

/// Claimed nodes plus the write-once predecessor map.
///
/// Both collections only ever grow. A node is claimed by exactly one task;
/// the claim is a single atomic insert on the owning shard, so two tasks can
/// never both believe they own the same node.
#[derive(Debug, Default)]
pub struct ClaimableNodeSet {
    claimed: DashSet<NodeId>,
    predecessors: DashMap<NodeId, NodeId>,
}

impl ClaimableNodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claim `node`. Returns `true` if the caller now owns it.
    pub fn try_claim(&self, node: NodeId) -> bool {
        self.claimed.insert(node)
    }

    /// Record how `node` was discovered. The first link wins.
    ///
    /// Returns `false` (and leaves the existing link in place) if a
    /// predecessor was already recorded, which only happens when a caller
    /// records without owning the claim.
    pub fn record_predecessor(&self, node: NodeId, predecessor: NodeId) -> bool {
        match self.predecessors.entry(node) {
            Entry::Occupied(existing) => {
                warn!(
                    node,
                    predecessor,
                    existing = *existing.get(),
                    "predecessor already recorded; keeping the first link"
                );
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(predecessor);
                true
            }
        }
    }

    /// Claim `node` on behalf of the task expanding `predecessor`, and record
    /// the link if the claim succeeded.
    pub fn claim_from(&self, node: NodeId, predecessor: NodeId) -> bool {
        if !self.try_claim(node) {
            return false;
        }
        self.record_predecessor(node, predecessor);
        true
    }

    pub fn is_claimed(&self, node: NodeId) -> bool {
        self.claimed.contains(&node)
    }

    pub fn predecessor_of(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).map(|entry| *entry.value())
    }

    pub fn claimed_count(&self) -> usize {
        self.claimed.len()
    }

    pub fn predecessor_count(&self) -> usize {
        self.predecessors.len()
    }

    /// Point-in-time copy of the claimed nodes.
    pub fn snapshot(&self) -> HashSet<NodeId> {
        self.claimed.iter().map(|node| *node).collect()
    }

    /// Walk predecessor links from `goal` back to `start`.
    pub fn reconstruct_path(&self, start: NodeId, goal: NodeId) -> Result<Path> {
        PathReconstructor::new(self).reconstruct(start, goal)
    }
}
