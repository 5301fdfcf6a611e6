//! Drive a full game between two engines.

use tracing::{debug, info};

use crate::game::{Decision, GameEngine, GameState, Objective, Player, Score};

/// One move of a finished match.
#[derive(Debug, Clone)]
pub struct Turn<M> {
    pub player: Player,
    pub decision: Decision<M>,
}

/// A finished match: every turn taken and the state it ended in.
#[derive(Debug, Clone)]
pub struct MatchRecord<G: GameState> {
    pub turns: Vec<Turn<G::Move>>,
    pub final_state: G,
}

impl<G: GameState> MatchRecord<G> {
    /// Score of the final state: the terminal score when the game ended,
    /// the static score when it stopped on a side without a move.
    pub fn final_score(&self) -> Score {
        self.final_state
            .terminal_score()
            .unwrap_or_else(|| self.final_state.heuristic_score())
    }

    /// Nodes expanded by `player` across the whole match.
    pub fn expanded_by(&self, player: Player) -> u64 {
        self.turns
            .iter()
            .filter(|t| t.player == player)
            .map(|t| t.decision.expanded)
            .sum()
    }
}

/// Let `player0` and `player1` play from `initial` until the game ends or
/// the side to move has no move. Player 0 maximizes, player 1 minimizes.
pub fn play_match<G: GameState>(
    player0: &mut dyn GameEngine<G>,
    player1: &mut dyn GameEngine<G>,
    initial: G,
) -> MatchRecord<G> {
    let mut state = initial;
    let mut turns = Vec::new();

    while !state.is_terminal() {
        let player = state.current_player();
        let engine: &mut dyn GameEngine<G> = match player {
            Player::Zero => &mut *player0,
            Player::One => &mut *player1,
        };

        let decision = engine.best_move(&state, Objective::for_player(player));
        let Some(mv) = decision.best_move else {
            debug!(%player, engine = engine.name(), "no move, match stops");
            break;
        };

        debug!(
            %player,
            engine = engine.name(),
            mv = ?mv,
            expanded = decision.expanded,
            pruned = decision.pruned,
            "move played"
        );
        state = state.apply_move(mv);
        turns.push(Turn { player, decision });
    }

    let record = MatchRecord {
        turns,
        final_state: state,
    };
    info!(
        turns = record.turns.len(),
        score = record.final_score(),
        "match finished"
    );
    record
}
