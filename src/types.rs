use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Opaque maze location. Only identity and equality matter to the search.
pub type NodeId = usize;

/// Visualization marker handed out by [`crate::maze::Maze::new_player`].
pub type PlayerId = usize;

/// Ordered sequence of nodes from the start node to a goal, both inclusive.
///
/// A `Path` is built once by the path reconstructor and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    pub(crate) fn from_nodes(nodes: Vec<NodeId>) -> Self {
        debug_assert!(!nodes.is_empty(), "a path always holds at least the start node");
        Self { nodes }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn goal(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// Outcome of one search or of one branch of it.
///
/// `NotFound` is a regular answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Found(Path),
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::NotFound => None,
        }
    }
}

impl From<Option<Path>> for SearchResult {
    fn from(path: Option<Path>) -> Self {
        match path {
            Some(path) => SearchResult::Found(path),
            None => SearchResult::NotFound,
        }
    }
}

/// Log verbosity accepted in config files and by [`crate::logging::init_logging`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!(
                "invalid log level: {other} (expected error, warn, info, debug or trace)"
            )),
        }
    }
}
