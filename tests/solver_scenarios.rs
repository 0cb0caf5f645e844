// tests/solver_scenarios.rs

mod common;
use crate::common::builders::{MazeBuilder, as_dyn};
use crate::common::fake_maze::CountingMaze;
use crate::common::{assert_valid_path, init_tracing};

use std::collections::HashSet;
use std::error::Error;
use std::sync::Arc;

use tokio::time::{Duration, timeout};

use mazewalk::config::SolverConfig;
use mazewalk::engine::{SearchReport, Solver};
use mazewalk::maze::Maze;
use mazewalk::types::{NodeId, SearchResult};

type TestResult = Result<(), Box<dyn Error>>;

const LIMIT: Duration = Duration::from_secs(10);

fn solver(fork_after: i64) -> Solver {
    Solver::new(SolverConfig::default().with_fork_after(fork_after))
}

async fn run(solver: &Solver, maze: Arc<dyn Maze>, start: NodeId) -> Result<SearchReport, Box<dyn Error>> {
    Ok(timeout(LIMIT, solver.solve_with_report(maze, start)).await??)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn corridor_is_walked_end_to_end() -> TestResult {
    init_tracing();
    let maze = MazeBuilder::new().line(5).goal(4).build_shared();

    for fork_after in [0, 1, 3] {
        let report = run(&solver(fork_after), as_dyn(&maze), 0).await?;
        let path = report.result.path().expect("goal is reachable");
        assert_eq!(path.nodes(), &[0, 1, 2, 3, 4], "fork_after = {fork_after}");
        assert_eq!(report.forks, 0, "a corridor never forks");
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn dead_end_branch_is_skipped() -> TestResult {
    init_tracing();
    let maze = MazeBuilder::new()
        .edges(&[(0, 1), (0, 2), (2, 3)])
        .goal(3)
        .build_shared();

    for fork_after in [0, 1, 3] {
        let result = solver(fork_after).solve(as_dyn(&maze), 0).await?;
        let path = result.into_path().expect("3 is reachable through 2");
        assert_eq!(path.nodes(), &[0, 2, 3], "fork_after = {fork_after}");
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn unreachable_goal_claims_the_whole_component() -> TestResult {
    init_tracing();
    let maze = MazeBuilder::new()
        .grid(6, 5)
        .edge(100, 101)
        .goal(101)
        .build_shared();
    let reachable = maze.reachable_from(0);

    for fork_after in [0, 1, 2] {
        let report = run(&solver(fork_after), as_dyn(&maze), 0).await?;
        assert_eq!(report.result, SearchResult::NotFound);
        assert_eq!(report.claimed, reachable, "fork_after = {fork_after}");
        assert_eq!(report.predecessor_links, reachable.len() - 1);
        assert!(report.failures.is_empty());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn goal_at_start_claims_nothing_else() -> TestResult {
    init_tracing();
    let maze = MazeBuilder::new().grid(3, 3).goal(4).build_shared();

    let report = run(&solver(1), as_dyn(&maze), 4).await?;
    assert_eq!(report.result.path().map(|p| p.nodes().to_vec()), Some(vec![4]));
    assert_eq!(report.claimed, HashSet::from([4]));
    assert_eq!(report.predecessor_links, 0);
    assert_eq!(report.tasks, 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn sequential_and_forking_both_find_valid_paths() -> TestResult {
    init_tracing();
    let maze = MazeBuilder::new().grid(12, 12).goal(143).goal(60).build_shared();

    let sequential = run(&solver(0), as_dyn(&maze), 0).await?;
    let forking = run(&solver(3), as_dyn(&maze), 0).await?;

    assert_valid_path(&maze, 0, sequential.result.path().expect("sequential path"));
    assert_valid_path(&maze, 0, forking.result.path().expect("forking path"));
    assert_eq!(sequential.forks, 0);
    assert_eq!(sequential.tasks, 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn forking_search_expands_each_node_once() -> TestResult {
    init_tracing();
    let inner = MazeBuilder::new().binary_tree(9).build();
    let total = inner.node_count();
    let maze = Arc::new(CountingMaze::new(inner));

    let report = run(&solver(1), maze.clone(), 0).await?;

    assert_eq!(report.result, SearchResult::NotFound);
    assert_eq!(report.claimed.len(), total);
    assert!(report.forks > 0, "a binary tree with fork_after = 1 must fork");
    assert_eq!(report.tasks, report.forks + 1);
    assert_eq!(maze.max_expansions(), 1);
    assert_eq!(maze.expansions().len(), total);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn search_stops_once_a_goal_is_found() -> TestResult {
    init_tracing();
    // Goal right next to the start of a large tree; cancellation keeps the
    // rest of the tree mostly unclaimed.
    let maze = MazeBuilder::new().binary_tree(14).goal(1).build_shared();

    let report = run(&solver(1), as_dyn(&maze), 0).await?;
    assert_eq!(report.result.path().map(|p| p.nodes().to_vec()), Some(vec![0, 1]));
    assert!(report.claimed.len() < maze.node_count());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn searches_do_not_share_claims() -> TestResult {
    init_tracing();
    let maze = MazeBuilder::new().grid(5, 5).build_shared();
    let solver = solver(2);

    let (first, second) = tokio::join!(
        run(&solver, as_dyn(&maze), 0),
        run(&solver, as_dyn(&maze), 24)
    );
    let (first, second) = (first?, second?);
    assert_eq!(first.claimed.len(), 25);
    assert_eq!(second.claimed.len(), 25);

    let again = run(&solver, as_dyn(&maze), 12).await?;
    assert_eq!(again.claimed.len(), 25);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn players_follow_the_walk() -> TestResult {
    init_tracing();
    let maze = MazeBuilder::new().line(4).goal(3).build_shared();

    run(&solver(0), as_dyn(&maze), 0).await?;
    assert_eq!(maze.player_count(), 1);
    assert_eq!(maze.player_trail(0), Some(vec![0, 1, 2, 3]));

    let quiet = Solver::new(SolverConfig::default().with_visualize(false));
    let hidden = MazeBuilder::new().line(4).goal(3).build_shared();
    run(&quiet, as_dyn(&hidden), 0).await?;
    assert_eq!(hidden.player_count(), 0);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn forked_tasks_get_their_own_players() -> TestResult {
    init_tracing();
    let maze = MazeBuilder::new().binary_tree(3).build_shared();

    let report = run(&solver(1), as_dyn(&maze), 0).await?;
    assert_eq!(maze.player_count(), report.tasks);
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn single_threaded_runtime_still_completes() -> TestResult {
    init_tracing();
    let maze = MazeBuilder::new().grid(8, 8).goal(63).build_shared();

    let report = run(&solver(1), as_dyn(&maze), 0).await?;
    assert_valid_path(&maze, 0, report.result.path().expect("corner is reachable"));
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn timeout_fires_during_a_long_walk_on_a_single_threaded_runtime() {
    init_tracing();
    let maze = MazeBuilder::new().grid(300, 300).build_shared();
    let quiet = Solver::new(SolverConfig::default().with_visualize(false));

    let outcome = timeout(Duration::from_millis(1), quiet.solve_with_report(as_dyn(&maze), 0)).await;
    assert!(outcome.is_err(), "the walk held the executor past its deadline");
}
