#![allow(dead_code)]

use std::sync::Arc;

use mazewalk::maze::{GraphMaze, Maze};
use mazewalk::types::NodeId;

/// Builder for `GraphMaze` to simplify test setup.
#[derive(Default)]
pub struct MazeBuilder {
    maze: GraphMaze,
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, node: NodeId) -> Self {
        self.maze.add_node(node);
        self
    }

    pub fn edge(mut self, a: NodeId, b: NodeId) -> Self {
        self.maze.add_edge(a, b);
        self
    }

    pub fn edges(mut self, edges: &[(NodeId, NodeId)]) -> Self {
        for &(a, b) in edges {
            self.maze.add_edge(a, b);
        }
        self
    }

    pub fn goal(mut self, node: NodeId) -> Self {
        self.maze.add_goal(node);
        self
    }

    /// `0 - 1 - ... - (len - 1)`.
    pub fn line(mut self, len: usize) -> Self {
        self.maze.add_node(0);
        for node in 1..len {
            self.maze.add_edge(node - 1, node);
        }
        self
    }

    /// `width x height` grid, node id `y * width + x`.
    pub fn grid(mut self, width: usize, height: usize) -> Self {
        for y in 0..height {
            for x in 0..width {
                let node = y * width + x;
                self.maze.add_node(node);
                if x + 1 < width {
                    self.maze.add_edge(node, node + 1);
                }
                if y + 1 < height {
                    self.maze.add_edge(node, node + width);
                }
            }
        }
        self
    }

    /// Complete binary tree rooted at 0, children of `n` are `2n+1`, `2n+2`.
    pub fn binary_tree(mut self, depth: u32) -> Self {
        let count = (1usize << (depth + 1)) - 1;
        self.maze.add_node(0);
        for node in 1..count {
            self.maze.add_edge((node - 1) / 2, node);
        }
        self
    }

    pub fn build(self) -> GraphMaze {
        self.maze
    }

    pub fn build_shared(self) -> Arc<GraphMaze> {
        Arc::new(self.maze)
    }
}

/// Upcast helper for the solver API.
pub fn as_dyn(maze: &Arc<GraphMaze>) -> Arc<dyn Maze> {
    maze.clone()
}
