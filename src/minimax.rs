//! Plain minimax over a [`GameState`].
//!
//! Two value functions, one per role. Which one evaluates a node depends on
//! whose turn it is at that node, not on who called it: player 0 always
//! maximizes and player 1 always minimizes. Games with extra turns (Kalah)
//! therefore chain several max or min levels in a row.
//!
//! With a depth bound, a node at the bound is scored with
//! [`GameState::heuristic_score`], which for Kalah is simply the current
//! store difference. That is a weak static evaluation; it looks at no
//! pending captures or extra turns.

use tracing::debug;

use crate::game::{Decision, GameEngine, GameState, Objective, Player, Score};

/// Exhaustive or depth-bounded minimax.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    max_depth: Option<usize>,
}

impl Minimax {
    /// Search `max_depth` plies below the root's children, or to the end of
    /// the game with `None`.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }
}

/// Per-decision counters.
#[derive(Default)]
struct Stats {
    expanded: u64,
}

impl Stats {
    fn value<G: GameState>(&mut self, state: &G, depth: Option<usize>) -> Score {
        match state.current_player() {
            Player::Zero => self.max_value(state, depth),
            Player::One => self.min_value(state, depth),
        }
    }

    fn max_value<G: GameState>(&mut self, state: &G, depth: Option<usize>) -> Score {
        self.expanded += 1;
        let Some((moves, depth)) = expand(state, depth) else {
            return leaf_score(state);
        };

        let mut best = Objective::Max.worst();
        for mv in moves {
            best = best.max(self.value(&state.apply_move(mv), depth));
        }
        best
    }

    fn min_value<G: GameState>(&mut self, state: &G, depth: Option<usize>) -> Score {
        self.expanded += 1;
        let Some((moves, depth)) = expand(state, depth) else {
            return leaf_score(state);
        };

        let mut best = Objective::Min.worst();
        for mv in moves {
            best = best.min(self.value(&state.apply_move(mv), depth));
        }
        best
    }
}

/// Moves to search below `state` and the depth left for its children, or
/// `None` if `state` is a leaf (game over, depth exhausted, or stuck).
pub(crate) fn expand<G: GameState>(
    state: &G,
    depth: Option<usize>,
) -> Option<(Vec<G::Move>, Option<usize>)> {
    if state.is_terminal() || depth == Some(0) {
        return None;
    }
    let moves = state.available_moves();
    if moves.is_empty() {
        return None;
    }
    Some((moves, depth.map(|d| d - 1)))
}

/// Final score at a terminal state, static evaluation anywhere else.
pub(crate) fn leaf_score<G: GameState>(state: &G) -> Score {
    state
        .terminal_score()
        .unwrap_or_else(|| state.heuristic_score())
}

impl<G: GameState> GameEngine<G> for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn best_move(&mut self, state: &G, objective: Objective) -> Decision<G::Move> {
        let moves = state.available_moves();
        if moves.is_empty() {
            debug!(engine = "minimax", "no legal move");
            return Decision::no_move();
        }

        let mut stats = Stats::default();
        let mut best: Option<(G::Move, Score)> = None;
        for mv in moves {
            let value = stats.value(&state.apply_move(mv), self.max_depth);
            if best.is_none_or(|(_, b)| objective.improves(value, b)) {
                best = Some((mv, value));
            }
        }

        debug!(
            engine = "minimax",
            depth = ?self.max_depth,
            expanded = stats.expanded,
            value = ?best.map(|(_, v)| v),
            "decision made"
        );

        Decision {
            best_move: best.map(|(mv, _)| mv),
            value: best.map(|(_, v)| v),
            expanded: stats.expanded,
            pruned: 0,
        }
    }
}
