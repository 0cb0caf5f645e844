#![allow(dead_code)]

pub use mazewalk_test_utils::{builders, fake_maze, init_tracing};

use mazewalk::maze::{GraphMaze, Maze};
use mazewalk::types::{NodeId, Path};

/// Check that `path` starts at `start`, only steps along corridors, and that
/// only its last node is a goal.
pub fn assert_valid_path(maze: &GraphMaze, start: NodeId, path: &Path) {
    let nodes = path.nodes();
    assert_eq!(nodes.first(), Some(&start), "path must begin at start: {path}");

    for pair in nodes.windows(2) {
        assert!(
            maze.is_adjacent(pair[0], pair[1]),
            "{} -> {} is not a corridor in path {path}",
            pair[0],
            pair[1]
        );
    }

    let (last, rest) = nodes.split_last().expect("path is never empty");
    assert!(maze.has_goal(*last), "path must end on a goal: {path}");
    for node in rest {
        assert!(!maze.has_goal(*node), "goal {node} appears before the end of {path}");
    }
}
