// src/search/path.rs

use tracing::error;

use crate::errors::{MazewalkError, Result};
use crate::search::ledger::ClaimableNodeSet;
use crate::types::{NodeId, Path};

/// Rebuilds the discovered path by following predecessor links.
pub struct PathReconstructor<'a> {
    ledger: &'a ClaimableNodeSet,
}

impl<'a> PathReconstructor<'a> {
    pub fn new(ledger: &'a ClaimableNodeSet) -> Self {
        Self { ledger }
    }

    /// Path from `start` to `goal`, both inclusive.
    ///
    /// Fails with [`MazewalkError::Structural`] if the chain from `goal`
    /// stops before reaching `start` or loops.
    pub fn reconstruct(&self, start: NodeId, goal: NodeId) -> Result<Path> {
        let max_hops = self.ledger.predecessor_count();
        let mut nodes = vec![goal];
        let mut current = goal;

        while current != start {
            let Some(previous) = self.ledger.predecessor_of(current) else {
                return Err(broken(start, goal, format!("node {current} has no predecessor")));
            };
            if nodes.len() > max_hops {
                return Err(broken(start, goal, "predecessor chain loops".to_string()));
            }
            nodes.push(previous);
            current = previous;
        }

        nodes.reverse();
        Ok(Path::from_nodes(nodes))
    }
}

fn broken(start: NodeId, goal: NodeId, reason: String) -> MazewalkError {
    error!(start, goal, %reason, "cannot reconstruct path");
    MazewalkError::Structural {
        start,
        goal,
        reason,
    }
}
