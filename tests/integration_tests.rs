//! Integration tests for search-labs
//!
//! Cross-module properties: every graph strategy against a brute-force
//! distance oracle on generated grids, and the two game engines against
//! each other on Kalah positions.

use std::collections::HashMap;

use search_labs::alphabeta::AlphaBeta;
use search_labs::astar::AStarSearch;
use search_labs::game::{GameEngine, GameState, Objective, Player};
use search_labs::grid::{Grid, GridPos};
use search_labs::kalah::Kalah;
use search_labs::minimax::Minimax;
use search_labs::problem::SearchProblem;
use search_labs::search::{PlanReport, SearchStrategy, plan};
use search_labs::uninformed::{BreadthFirstSearch, DepthFirstSearch};

// =============================================================================
// Helpers
// =============================================================================

/// A grid with a wall border and roughly a quarter of the inner cells walled.
fn scattered_grid(seed: u64, width: i32, height: i32) -> Grid {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut grid = Grid::with_border(width, height);
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            if rng.u8(..4) == 0 {
                grid.add_wall(GridPos::new(x, y));
            }
        }
    }
    grid
}

fn free_cells(grid: &Grid) -> Vec<GridPos> {
    let mut cells = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = GridPos::new(x, y);
            if grid.is_valid_position(&pos) {
                cells.push(pos);
            }
        }
    }
    cells
}

/// Step distances from `start` by repeated relaxation over every cell until
/// nothing changes. Unreachable cells are absent.
fn oracle_distances(grid: &Grid, start: GridPos) -> HashMap<GridPos, usize> {
    let cells = free_cells(grid);
    let mut dist = HashMap::from([(start, 0usize)]);
    loop {
        let mut changed = false;
        for cell in &cells {
            let best = grid
                .reachable_positions(cell)
                .iter()
                .filter_map(|n| dist.get(n))
                .min()
                .map(|d| d + 1);
            if let Some(candidate) = best
                && dist.get(cell).is_none_or(|&d| candidate < d)
            {
                dist.insert(*cell, candidate);
                changed = true;
            }
        }
        if !changed {
            return dist;
        }
    }
}

fn assert_valid_path(grid: &Grid, path: &[GridPos], start: GridPos, goal: GridPos) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for pos in path {
        assert!(grid.is_valid_position(pos), "{pos} is not free");
    }
    for pair in path.windows(2) {
        assert_eq!(pair[0].distance_manhattan(&pair[1]), 1, "{} -> {}", pair[0], pair[1]);
    }
}

fn run(
    strategy: &mut dyn SearchStrategy<GridPos>,
    grid: &Grid,
    start: GridPos,
    goal: GridPos,
) -> PlanReport<GridPos> {
    let problem = SearchProblem::new(grid, start, goal);
    plan(strategy, &problem)
}

// =============================================================================
// Graph search
// =============================================================================

#[test]
fn test_border_room_scenario() {
    let grid = Grid::with_border(5, 5);
    let (start, goal) = (GridPos::new(1, 1), GridPos::new(3, 3));

    let bfs = run(&mut BreadthFirstSearch::<GridPos>::new(), &grid, start, goal);
    let astar = run(&mut AStarSearch::<GridPos>::new(), &grid, start, goal);
    let dfs = run(&mut DepthFirstSearch::<GridPos>::new(), &grid, start, goal);

    assert_eq!(bfs.path.len(), 5);
    assert_eq!(astar.path.len(), 5);
    assert!(dfs.path.len() >= 5);
    for report in [&bfs, &astar, &dfs] {
        assert_valid_path(&grid, &report.path, start, goal);
    }
}

#[test]
fn test_strategies_against_oracle() {
    for seed in 0..12 {
        let grid = scattered_grid(seed, 9, 7);
        let cells = free_cells(&grid);
        let Some(&start) = cells.first() else {
            continue;
        };
        let dist = oracle_distances(&grid, start);

        for &goal in cells.iter().step_by(3) {
            let bfs = run(&mut BreadthFirstSearch::<GridPos>::new(), &grid, start, goal);
            let astar = run(&mut AStarSearch::<GridPos>::new(), &grid, start, goal);
            let dfs = run(&mut DepthFirstSearch::<GridPos>::new(), &grid, start, goal);

            match dist.get(&goal) {
                Some(&d) => {
                    assert_eq!(bfs.steps(), d, "bfs, seed {seed}, goal {goal}");
                    assert_eq!(astar.steps(), d, "astar, seed {seed}, goal {goal}");
                    assert_eq!(astar.cost, d as f64, "astar cost, seed {seed}, goal {goal}");
                    assert!(dfs.steps() >= d, "dfs, seed {seed}, goal {goal}");
                    for report in [&bfs, &astar, &dfs] {
                        assert_valid_path(&grid, &report.path, start, goal);
                    }
                }
                None => {
                    assert!(!bfs.found(), "bfs, seed {seed}, goal {goal}");
                    assert!(!astar.found(), "astar, seed {seed}, goal {goal}");
                    assert!(!dfs.found(), "dfs, seed {seed}, goal {goal}");
                }
            }
        }
    }
}

#[test]
fn test_walled_off_goal_has_no_path() {
    let grid = Grid::parse(
        "
#######
#S.#..#
#..#.G#
#######
",
    )
    .unwrap();
    let (start, goal) = (grid.start.unwrap(), grid.goal.unwrap());

    let mut strategies: Vec<Box<dyn SearchStrategy<GridPos>>> = vec![
        Box::new(DepthFirstSearch::<GridPos>::new()),
        Box::new(BreadthFirstSearch::<GridPos>::new()),
        Box::new(AStarSearch::<GridPos>::new()),
    ];
    for strategy in &mut strategies {
        let report = run(strategy.as_mut(), &grid, start, goal);
        assert!(!report.found(), "{}", strategy.name());
        assert!(strategy.path().is_empty(), "{}", strategy.name());
        // The left room has four free cells, all of them explored
        assert_eq!(report.explored, 4, "{}", strategy.name());
        assert_eq!(report.frontier, 0, "{}", strategy.name());
    }
}

#[test]
fn test_start_is_goal() {
    let grid = Grid::with_border(4, 4);
    let pos = GridPos::new(1, 2);
    let bfs = run(&mut BreadthFirstSearch::<GridPos>::new(), &grid, pos, pos);
    let astar = run(&mut AStarSearch::<GridPos>::new(), &grid, pos, pos);
    assert_eq!(bfs.path, vec![pos]);
    assert_eq!(astar.path, vec![pos]);
    assert_eq!(astar.cost, 0.0);
}

// =============================================================================
// Game search
// =============================================================================

/// Positions reached from the opening of `k` by a few seeded random moves.
fn sample_positions(k: Kalah, seed: u64, count: usize) -> Vec<Kalah> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut positions = Vec::new();
    let mut state = k.clone();
    while positions.len() < count {
        if state.is_terminal() {
            state = k.clone();
        }
        positions.push(state.clone());
        let moves = state.available_moves();
        if moves.is_empty() {
            state = k.clone();
            continue;
        }
        state = state.apply_move(moves[rng.usize(..moves.len())]);
    }
    positions
}

#[test]
fn test_alphabeta_agrees_with_minimax() {
    let positions = sample_positions(Kalah::with_config(3, 2), 7, 12);
    for (i, k) in positions.iter().enumerate() {
        let objective = Objective::for_player(k.current_player());
        for depth in 0..=6 {
            let mm = Minimax::new(Some(depth)).best_move(k, objective);
            let ab = AlphaBeta::new(Some(depth)).best_move(k, objective);
            assert_eq!(ab.best_move, mm.best_move, "position {i}, depth {depth}");
            assert_eq!(ab.value, mm.value, "position {i}, depth {depth}");
            assert!(ab.expanded <= mm.expanded, "position {i}, depth {depth}");
            assert_eq!(mm.pruned, 0);
        }
    }
}

#[test]
fn test_exhaustive_search_agrees() {
    for k in sample_positions(Kalah::with_config(3, 1), 3, 6) {
        let objective = Objective::for_player(k.current_player());
        let mm = Minimax::new(None).best_move(&k, objective);
        let ab = AlphaBeta::new(None).best_move(&k, objective);
        assert_eq!(ab.best_move, mm.best_move);
        assert_eq!(ab.value, mm.value);
        assert!(ab.expanded <= mm.expanded);
    }
}

#[test]
fn test_pruning_saves_work_on_full_board() {
    let k = Kalah::new();
    let mm = Minimax::new(Some(4)).best_move(&k, Objective::Max);
    let ab = AlphaBeta::new(Some(4)).best_move(&k, Objective::Max);
    assert_eq!(ab.best_move, mm.best_move);
    assert_eq!(ab.value, mm.value);
    assert!(ab.expanded < mm.expanded);
    assert!(ab.pruned > 0);
}

#[test]
fn test_engines_return_no_move_when_row_is_empty() {
    let board = vec![0, 0, 0, 0, 0, 0, 20, 1, 2, 0, 0, 0, 0, 5];
    let k = Kalah::from_board(board, Player::Zero).unwrap();
    assert!(k.available_moves().is_empty());

    let mm = Minimax::new(Some(3)).best_move(&k, Objective::Max);
    let ab = AlphaBeta::new(Some(3)).best_move(&k, Objective::Max);
    for decision in [mm, ab] {
        assert_eq!(decision.best_move, None);
        assert_eq!(decision.value, None);
        assert_eq!(decision.expanded, 0);
    }
}
