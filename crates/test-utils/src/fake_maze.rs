use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use mazewalk::maze::{GraphMaze, Maze, MazeError};
use mazewalk::types::{NodeId, PlayerId};

/// Wraps a `GraphMaze` and counts how often each node is expanded.
///
/// A correct search expands every node at most once.
#[derive(Debug)]
pub struct CountingMaze {
    inner: GraphMaze,
    expansions: Mutex<HashMap<NodeId, usize>>,
}

impl CountingMaze {
    pub fn new(inner: GraphMaze) -> Self {
        Self {
            inner,
            expansions: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &GraphMaze {
        &self.inner
    }

    pub fn expansions(&self) -> HashMap<NodeId, usize> {
        self.expansions.lock().unwrap().clone()
    }

    pub fn max_expansions(&self) -> usize {
        self.expansions.lock().unwrap().values().copied().max().unwrap_or(0)
    }
}

impl Maze for CountingMaze {
    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, MazeError> {
        *self.expansions.lock().unwrap().entry(node).or_insert(0) += 1;
        self.inner.neighbors(node)
    }

    fn has_goal(&self, node: NodeId) -> bool {
        self.inner.has_goal(node)
    }

    fn new_player(&self, node: NodeId) -> Result<PlayerId, MazeError> {
        self.inner.new_player(node)
    }

    fn move_player(&self, player: PlayerId, node: NodeId) -> Result<(), MazeError> {
        self.inner.move_player(player, node)
    }
}

/// How a `FaultyMaze` misbehaves on its faulty nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// `neighbors` returns a backend error.
    Error,
    /// `neighbors` panics.
    Panic,
}

/// Wraps a `GraphMaze` and fails `neighbors` for selected nodes.
#[derive(Debug)]
pub struct FaultyMaze {
    inner: GraphMaze,
    faulty: HashSet<NodeId>,
    fault: Fault,
}

impl FaultyMaze {
    pub fn new(inner: GraphMaze, fault: Fault, faulty: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            inner,
            faulty: faulty.into_iter().collect(),
            fault,
        }
    }
}

impl Maze for FaultyMaze {
    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, MazeError> {
        if self.faulty.contains(&node) {
            match self.fault {
                Fault::Error => {
                    return Err(MazeError::Backend(format!("injected failure at {node}")));
                }
                Fault::Panic => panic!("injected panic at {node}"),
            }
        }
        self.inner.neighbors(node)
    }

    fn has_goal(&self, node: NodeId) -> bool {
        self.inner.has_goal(node)
    }

    fn new_player(&self, node: NodeId) -> Result<PlayerId, MazeError> {
        self.inner.new_player(node)
    }

    fn move_player(&self, player: PlayerId, node: NodeId) -> Result<(), MazeError> {
        self.inner.move_player(player, node)
    }
}

/// A maze whose visualization always fails; the search must not care.
#[derive(Debug)]
pub struct BrokenDisplayMaze {
    inner: GraphMaze,
}

impl BrokenDisplayMaze {
    pub fn new(inner: GraphMaze) -> Self {
        Self { inner }
    }
}

impl Maze for BrokenDisplayMaze {
    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, MazeError> {
        self.inner.neighbors(node)
    }

    fn has_goal(&self, node: NodeId) -> bool {
        self.inner.has_goal(node)
    }

    fn new_player(&self, _node: NodeId) -> Result<PlayerId, MazeError> {
        Err(MazeError::Backend("display offline".to_string()))
    }

    fn move_player(&self, player: PlayerId, _node: NodeId) -> Result<(), MazeError> {
        Err(MazeError::UnknownPlayer(player))
    }
}
