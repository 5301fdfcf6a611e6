//! Search-Labs: graph search and game-tree search over small discrete spaces.
//!
//! Two engines live here. The graph-search engine takes a [`problem::Problem`]
//! (initial state, goal test, successors) and returns a path of states. The
//! game-tree engine takes a [`game::GameState`] and returns a move together
//! with the number of nodes it expanded and pruned.
//!
//! ## Modules
//!
//! - [`constants`] - Step cost, move budgets, and Kalah board defaults
//! - [`node`] - Shared, immutable search tree nodes
//! - [`problem`] - The problem contract and the navigable-space adapter
//! - [`search`] - Strategy interface and planner
//! - [`uninformed`] - Depth-first and breadth-first search
//! - [`random_walk`] - Random walk baseline
//! - [`astar`] - A* search
//! - [`grid`] - 2D grid world with walls
//! - [`game`] - Two-player game contract, objectives, and decisions
//! - [`minimax`] - Minimax engine
//! - [`alphabeta`] - Minimax with alpha-beta pruning
//! - [`kalah`] - Kalah rules
//! - [`play`] - Engine-versus-engine matches
//!
//! ## Example
//!
//! ```
//! use search_labs::alphabeta::AlphaBeta;
//! use search_labs::astar::AStarSearch;
//! use search_labs::game::{GameEngine, Objective};
//! use search_labs::grid::{Grid, GridPos};
//! use search_labs::kalah::Kalah;
//! use search_labs::problem::SearchProblem;
//! use search_labs::search::plan;
//!
//! // Find a shortest path across a walled 5x5 room
//! let grid = Grid::with_border(5, 5);
//! let problem = SearchProblem::new(&grid, GridPos::new(1, 1), GridPos::new(3, 3));
//! let report = plan(&mut AStarSearch::<GridPos>::new(), &problem);
//! assert_eq!(report.steps(), 4);
//!
//! // Pick an opening move in Kalah, looking four plies ahead
//! let decision = AlphaBeta::new(Some(4)).best_move(&Kalah::new(), Objective::Max);
//! assert!(decision.best_move.is_some());
//! ```

pub mod alphabeta;
pub mod astar;
pub mod constants;
pub mod game;
pub mod grid;
pub mod kalah;
pub mod minimax;
pub mod node;
pub mod play;
pub mod problem;
pub mod random_walk;
pub mod search;
pub mod uninformed;
