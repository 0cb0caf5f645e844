// src/maze/graph.rs

use std::collections::HashSet;
use std::sync::Mutex;

use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Dfs;

use crate::maze::{Maze, MazeError};
use crate::types::{NodeId, PlayerId};

/// Undirected in-memory maze keyed by node id.
///
/// Player trails are recorded so tests and callers can replay what the
/// search visited; they play no part in the search itself.
#[derive(Debug, Default)]
pub struct GraphMaze {
    graph: UnGraphMap<NodeId, ()>,
    goals: HashSet<NodeId>,
    players: Mutex<Vec<Vec<NodeId>>>,
}

impl GraphMaze {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a maze from a list of corridors. Nodes are created on demand.
    pub fn from_edges(edges: impl IntoIterator<Item = (NodeId, NodeId)>) -> Self {
        let mut maze = Self::new();
        for (a, b) in edges {
            maze.add_edge(a, b);
        }
        maze
    }

    pub fn add_node(&mut self, node: NodeId) {
        self.graph.add_node(node);
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        self.graph.add_edge(a, b, ());
    }

    /// Mark `node` as a goal, creating it if needed.
    pub fn add_goal(&mut self, node: NodeId) {
        self.graph.add_node(node);
        self.goals.insert(node);
    }

    pub fn with_goal(mut self, node: NodeId) -> Self {
        self.add_goal(node);
        self
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn goals(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.goals.iter().copied()
    }

    /// Every node reachable from `start`, `start` included.
    ///
    /// Empty if `start` is not part of the maze.
    pub fn reachable_from(&self, start: NodeId) -> HashSet<NodeId> {
        let mut reachable = HashSet::new();
        if !self.graph.contains_node(start) {
            return reachable;
        }

        let mut dfs = Dfs::new(&self.graph, start);
        while let Some(node) = dfs.next(&self.graph) {
            reachable.insert(node);
        }
        reachable
    }

    /// Whether `a` and `b` share a corridor.
    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.graph.contains_edge(a, b)
    }

    pub fn player_count(&self) -> usize {
        self.players.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Nodes a player was placed on, in order.
    pub fn player_trail(&self, player: PlayerId) -> Option<Vec<NodeId>> {
        self.players
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(player)
            .cloned()
    }
}

impl Maze for GraphMaze {
    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, MazeError> {
        if !self.graph.contains_node(node) {
            return Err(MazeError::UnknownNode(node));
        }
        Ok(self.graph.neighbors(node).collect())
    }

    fn has_goal(&self, node: NodeId) -> bool {
        self.goals.contains(&node)
    }

    fn new_player(&self, node: NodeId) -> Result<PlayerId, MazeError> {
        if !self.graph.contains_node(node) {
            return Err(MazeError::UnknownNode(node));
        }
        let mut players = self.players.lock().unwrap_or_else(|e| e.into_inner());
        players.push(vec![node]);
        Ok(players.len() - 1)
    }

    fn move_player(&self, player: PlayerId, node: NodeId) -> Result<(), MazeError> {
        let mut players = self.players.lock().unwrap_or_else(|e| e.into_inner());
        let trail = players
            .get_mut(player)
            .ok_or(MazeError::UnknownPlayer(player))?;
        if trail.last() != Some(&node) {
            trail.push(node);
        }
        Ok(())
    }
}
