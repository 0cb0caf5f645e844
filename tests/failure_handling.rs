// tests/failure_handling.rs

mod common;
use crate::common::builders::MazeBuilder;
use crate::common::fake_maze::{BrokenDisplayMaze, Fault, FaultyMaze};
use crate::common::init_tracing;

use std::error::Error;
use std::sync::Arc;

use tokio::time::{Duration, timeout};

use mazewalk::config::SolverConfig;
use mazewalk::engine::Solver;
use mazewalk::maze::MazeError;
use mazewalk::search::TaskFailure;
use mazewalk::types::SearchResult;

type TestResult = Result<(), Box<dyn Error>>;

const LIMIT: Duration = Duration::from_secs(10);

fn solver(fork_after: i64) -> Solver {
    Solver::new(SolverConfig::default().with_fork_after(fork_after))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn maze_error_is_contained_and_reported() -> TestResult {
    init_tracing();
    let inner = MazeBuilder::new()
        .edges(&[(0, 1), (0, 2), (2, 3)])
        .goal(3)
        .build();
    let maze = Arc::new(FaultyMaze::new(inner, Fault::Error, [2]));

    for fork_after in [0, 1] {
        let report = timeout(LIMIT, solver(fork_after).solve_with_report(maze.clone(), 0)).await??;

        assert_eq!(report.result, SearchResult::NotFound);
        assert_eq!(
            report.failures,
            vec![TaskFailure::Maze {
                node: 2,
                error: MazeError::Backend("injected failure at 2".to_string()),
            }]
        );
        // The failed node stays claimed, its subtree is never reached.
        assert!(report.claimed.contains(&2));
        assert!(!report.claimed.contains(&3));
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn other_routes_survive_a_failed_branch() -> TestResult {
    init_tracing();
    let inner = MazeBuilder::new()
        .edges(&[(0, 1), (0, 2), (1, 3), (2, 3)])
        .goal(3)
        .build();
    let maze = Arc::new(FaultyMaze::new(inner, Fault::Error, [1]));

    for fork_after in [0, 1] {
        let result = timeout(LIMIT, solver(fork_after).solve(maze.clone(), 0)).await??;
        let path = result.into_path().expect("route through 2 still works");
        assert_eq!(path.nodes(), &[0, 2, 3]);
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn panicking_child_is_joined_and_reported() -> TestResult {
    init_tracing();
    let inner = MazeBuilder::new()
        .edges(&[(0, 1), (0, 2), (2, 3), (1, 4)])
        .goal(3)
        .build();
    let maze = Arc::new(FaultyMaze::new(inner, Fault::Panic, [2]));

    let report = timeout(LIMIT, solver(1).solve_with_report(maze, 0)).await??;

    assert_eq!(report.result, SearchResult::NotFound);
    assert_eq!(report.failures.len(), 1);
    match &report.failures[0] {
        TaskFailure::Panicked { node, message } => {
            assert_eq!(*node, 2);
            assert!(message.contains("injected panic"));
        }
        other => panic!("expected a panic failure, got {other:?}"),
    }
    // The sibling branch was still explored to the end.
    assert!(report.claimed.contains(&4));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn panicking_root_yields_not_found() -> TestResult {
    init_tracing();
    let inner = MazeBuilder::new().line(3).goal(2).build();
    let maze = Arc::new(FaultyMaze::new(inner, Fault::Panic, [0]));

    let report = timeout(LIMIT, solver(0).solve_with_report(maze, 0)).await??;

    assert_eq!(report.result, SearchResult::NotFound);
    assert!(matches!(
        report.failures.as_slice(),
        [TaskFailure::Panicked { node: 0, .. }]
    ));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unknown_start_is_a_contained_failure() -> TestResult {
    init_tracing();
    let maze = Arc::new(MazeBuilder::new().line(3).goal(2).build());

    let report = timeout(LIMIT, solver(0).solve_with_report(maze, 42)).await??;

    assert_eq!(report.result, SearchResult::NotFound);
    assert_eq!(
        report.failures,
        vec![TaskFailure::Maze {
            node: 42,
            error: MazeError::UnknownNode(42),
        }]
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn broken_visualization_does_not_abort_the_search() -> TestResult {
    init_tracing();
    let maze = Arc::new(BrokenDisplayMaze::new(
        MazeBuilder::new().grid(4, 4).goal(15).build(),
    ));

    let report = timeout(LIMIT, solver(1).solve_with_report(maze, 0)).await??;

    assert!(report.result.is_found());
    assert!(report.failures.is_empty());
    Ok(())
}
