//! Constants for search costs, step budgets, and Kalah board geometry.
//!
//! Every value here is a default. Strategies and games that need a different
//! value take it through their constructors, and the binary exposes the
//! interesting ones as command-line flags.

// =============================================================================
// Graph Search
// =============================================================================

/// Cost of a single move between two neighbouring states.
pub const STEP_COST: f64 = 1.0;

/// Move budget of the random walk before it gives up.
pub const DEFAULT_MAX_DEPTH: usize = 1_000_000;

// =============================================================================
// Kalah
// =============================================================================

/// Playable pits per player (the store is not counted).
pub const PITS_PER_PLAYER: usize = 6;

/// Seeds placed in every playable pit at the start of a game.
pub const SEEDS: u32 = 4;

// =============================================================================
// Game-Tree Search
// =============================================================================

/// Search depth used by the command line when none is given.
pub const DEFAULT_GAME_DEPTH: usize = 4;
