//! Two-player game abstraction consumed by the game-tree engines.
//!
//! A [`GameState`] is an immutable ply: applying a move produces a new
//! state. Scores are always from player 0's point of view, so player 0
//! maximizes and player 1 minimizes.

use std::fmt;

/// Game score from player 0's point of view.
pub type Score = i32;

/// One of the two sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Zero,
    One,
}

impl Player {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
        }
    }

    /// 0 or 1.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::Zero => 0,
            Player::One => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.index())
    }
}

/// Whether a decision maximizes or minimizes the resulting score.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Objective {
    Max,
    Min,
}

impl Objective {
    /// Player 0 maximizes, player 1 minimizes.
    pub fn for_player(player: Player) -> Objective {
        match player {
            Player::Zero => Objective::Max,
            Player::One => Objective::Min,
        }
    }

    /// `true` if `candidate` is strictly better than `best` under this
    /// objective.
    #[inline]
    pub fn improves(self, candidate: Score, best: Score) -> bool {
        match self {
            Objective::Max => candidate > best,
            Objective::Min => candidate < best,
        }
    }

    /// The worst possible score under this objective.
    #[inline]
    pub fn worst(self) -> Score {
        match self {
            Objective::Max => Score::MIN,
            Objective::Min => Score::MAX,
        }
    }
}

/// One ply of a two-player, zero-sum, perfect-information game.
pub trait GameState: Clone {
    type Move: Copy + fmt::Debug + PartialEq;

    fn current_player(&self) -> Player;

    /// Legal moves for the side to move. Empty iff the game is over or the
    /// side to move is stuck.
    fn available_moves(&self) -> Vec<Self::Move>;

    /// The state after `mv`. `mv` must be one of [`available_moves`](Self::available_moves).
    fn apply_move(&self, mv: Self::Move) -> Self;

    /// Final score, defined only once the game has ended.
    fn terminal_score(&self) -> Option<Score>;

    /// Score of the position as it stands. Used as-is at terminal states
    /// and as the static evaluation at a depth cutoff.
    fn heuristic_score(&self) -> Score;

    fn is_terminal(&self) -> bool {
        self.terminal_score().is_some()
    }
}

/// The result of one top-level decision, with its diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision<M> {
    /// Chosen move, `None` when the side to move has no legal move
    pub best_move: Option<M>,
    /// Backed-up value of the chosen move
    pub value: Option<Score>,
    /// Game-tree nodes visited (one per value-function call)
    pub expanded: u64,
    /// Cutoff events (alpha-beta only)
    pub pruned: u64,
}

impl<M> Decision<M> {
    /// No legal move: the caller must treat the turn as a pass/terminal.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            value: None,
            expanded: 0,
            pruned: 0,
        }
    }
}

/// Something that picks a move for the side to move.
pub trait GameEngine<G: GameState> {
    fn name(&self) -> &'static str;

    fn best_move(&mut self, state: &G, objective: Objective) -> Decision<G::Move>;
}

/// Uniformly random legal move. The baseline adversary.
pub struct RandomPlayer {
    rng: fastrand::Rng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameState> GameEngine<G> for RandomPlayer {
    fn name(&self) -> &'static str {
        "random"
    }

    fn best_move(&mut self, state: &G, _objective: Objective) -> Decision<G::Move> {
        let moves = state.available_moves();
        if moves.is_empty() {
            return Decision::no_move();
        }
        Decision {
            best_move: Some(moves[self.rng.usize(..moves.len())]),
            value: None,
            expanded: 0,
            pruned: 0,
        }
    }
}
