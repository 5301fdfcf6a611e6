//! Minimax with alpha-beta pruning.
//!
//! Same recursion as [`Minimax`](crate::minimax::Minimax): the side to move
//! at a node picks the value function. An `(alpha, beta)` window is carried
//! down every call; once `beta <= alpha` the remaining siblings are skipped.
//! For the same state, objective, depth bound and move order the chosen move
//! and its value are the ones plain minimax returns, from a subset of the
//! nodes.
//!
//! `pruned` counts cutoff events, one per `break`, not the number of
//! siblings skipped.

use tracing::debug;

use crate::game::{Decision, GameEngine, GameState, Objective, Player, Score};
use crate::minimax::{expand, leaf_score};

/// Alpha-beta search, exhaustive or depth-bounded.
#[derive(Clone, Debug, Default)]
pub struct AlphaBeta {
    max_depth: Option<usize>,
}

impl AlphaBeta {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }
}

#[derive(Default)]
struct Stats {
    expanded: u64,
    pruned: u64,
}

impl Stats {
    fn value<G: GameState>(
        &mut self,
        state: &G,
        depth: Option<usize>,
        alpha: Score,
        beta: Score,
    ) -> Score {
        match state.current_player() {
            Player::Zero => self.max_value(state, depth, alpha, beta),
            Player::One => self.min_value(state, depth, alpha, beta),
        }
    }

    fn max_value<G: GameState>(
        &mut self,
        state: &G,
        depth: Option<usize>,
        mut alpha: Score,
        beta: Score,
    ) -> Score {
        self.expanded += 1;
        let Some((moves, depth)) = expand(state, depth) else {
            return leaf_score(state);
        };

        let mut best = Objective::Max.worst();
        for mv in moves {
            best = best.max(self.value(&state.apply_move(mv), depth, alpha, beta));
            alpha = alpha.max(best);
            if beta <= alpha {
                self.pruned += 1;
                break;
            }
        }
        best
    }

    fn min_value<G: GameState>(
        &mut self,
        state: &G,
        depth: Option<usize>,
        alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.expanded += 1;
        let Some((moves, depth)) = expand(state, depth) else {
            return leaf_score(state);
        };

        let mut best = Objective::Min.worst();
        for mv in moves {
            best = best.min(self.value(&state.apply_move(mv), depth, alpha, beta));
            beta = beta.min(best);
            if beta <= alpha {
                self.pruned += 1;
                break;
            }
        }
        best
    }
}

impl<G: GameState> GameEngine<G> for AlphaBeta {
    fn name(&self) -> &'static str {
        "alphabeta"
    }

    fn best_move(&mut self, state: &G, objective: Objective) -> Decision<G::Move> {
        let moves = state.available_moves();
        if moves.is_empty() {
            debug!(engine = "alphabeta", "no legal move");
            return Decision::no_move();
        }

        let mut stats = Stats::default();
        let (mut alpha, mut beta) = (Score::MIN, Score::MAX);
        let mut best: Option<(G::Move, Score)> = None;

        // No cutoff at the root: every move is evaluated so that ties resolve
        // exactly as in plain minimax.
        for mv in moves {
            let value = stats.value(&state.apply_move(mv), self.max_depth, alpha, beta);
            if best.is_none_or(|(_, b)| objective.improves(value, b)) {
                best = Some((mv, value));
                match objective {
                    Objective::Max => alpha = alpha.max(value),
                    Objective::Min => beta = beta.min(value),
                }
            }
        }

        debug!(
            engine = "alphabeta",
            depth = ?self.max_depth,
            expanded = stats.expanded,
            pruned = stats.pruned,
            value = ?best.map(|(_, v)| v),
            "decision made"
        );

        Decision {
            best_move: best.map(|(mv, _)| mv),
            value: best.map(|(_, v)| v),
            expanded: stats.expanded,
            pruned: stats.pruned,
        }
    }
}
