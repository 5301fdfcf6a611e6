//! Kalah board and rules.
//!
//! The board is a ring of `(pits + 1) * 2` slots. Player 0 owns slots
//! `0..pits` and its store at index `pits`; player 1 owns the next `pits`
//! slots and its store at the last index. Seeds are sown one per slot,
//! counter-clockwise, through every slot including both stores.
//!
//! Special rules:
//! - Last seed in the mover's own store: the mover plays again.
//! - Last seed in an empty pit on the mover's side, facing a non-empty pit:
//!   both pits go to the mover's store.
//! - As soon as either row is empty, every remaining seed goes to the store
//!   of the player whose row still holds seeds, and the game is over.

use std::fmt;

use thiserror::Error;

use crate::constants::{PITS_PER_PLAYER, SEEDS};
use crate::game::{GameState, Player, Score};

/// A pit index into the board ring.
pub type Pit = usize;

/// Errors raised when building a board or validating a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KalahError {
    #[error("board of {0} slots is not two rows of pits plus two stores")]
    InvalidBoard(usize),

    #[error("pit {pit} is outside the board")]
    PitOutOfRange { pit: Pit },

    #[error("pit {pit} is a store")]
    StorePit { pit: Pit },

    #[error("pit {pit} does not belong to {player}")]
    NotYourPit { pit: Pit, player: Player },

    #[error("pit {pit} is empty")]
    EmptyPit { pit: Pit },

    #[error("the game is over")]
    GameOver,
}

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

/// A Kalah position: the board and the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Kalah {
    pits: Vec<u32>,
    current_player: Player,
}

impl Default for Kalah {
    fn default() -> Self {
        Self::new()
    }
}

impl Kalah {
    /// Standard opening position: 6 pits of 4 seeds each, player 0 to move.
    pub fn new() -> Self {
        Self::with_config(PITS_PER_PLAYER, SEEDS)
    }

    /// Opening position with `pits` playable pits per player, each holding
    /// `seeds` seeds.
    pub fn with_config(pits: usize, seeds: u32) -> Self {
        let mut board = vec![seeds; (pits + 1) * 2];
        board[pits] = 0;
        board[2 * pits + 1] = 0;
        Self {
            pits: board,
            current_player: Player::Zero,
        }
    }

    /// Build a position from a raw board ring.
    ///
    /// A board with an empty row is a finished game: the remaining seeds are
    /// swept into the collecting store before the position is returned.
    pub fn from_board(pits: Vec<u32>, current_player: Player) -> Result<Self, KalahError> {
        if pits.len() < 4 || pits.len() % 2 != 0 {
            return Err(KalahError::InvalidBoard(pits.len()));
        }
        let mut k = Self {
            pits,
            current_player,
        };
        if let Some(player) = k.sweeping_player() {
            k.sweep_into_store(player);
        }
        Ok(k)
    }

    #[inline]
    pub fn board(&self) -> &[u32] {
        &self.pits
    }

    /// Playable pits per player.
    #[inline]
    pub fn pits_per_player(&self) -> usize {
        self.pits.len() / 2 - 1
    }

    #[inline]
    fn total_slots(&self) -> usize {
        self.pits.len()
    }

    /// Board index of `player`'s store.
    #[inline]
    pub fn store(&self, player: Player) -> Pit {
        match player {
            Player::Zero => self.pits_per_player(),
            Player::One => self.total_slots() - 1,
        }
    }

    /// Seeds in `player`'s store.
    pub fn store_seeds(&self, player: Player) -> u32 {
        self.pits[self.store(player)]
    }

    fn is_store(&self, pit: Pit) -> bool {
        pit == self.store(Player::Zero) || pit == self.store(Player::One)
    }

    /// Owner of a slot; a store belongs to its player.
    pub fn owner(&self, pit: Pit) -> Player {
        if pit <= self.pits_per_player() {
            Player::Zero
        } else {
            Player::One
        }
    }

    /// The pit facing `pit` across the board.
    pub fn opposite(&self, pit: Pit) -> Pit {
        let total = self.total_slots();
        (2 * total - 2 - pit) % total
    }

    /// Playable pits of `player`, in board order.
    fn row(&self, player: Player) -> std::ops::Range<Pit> {
        let n = self.pits_per_player();
        match player {
            Player::Zero => 0..n,
            Player::One => n + 1..2 * n + 1,
        }
    }

    fn row_is_empty(&self, player: Player) -> bool {
        self.row(player).all(|pit| self.pits[pit] == 0)
    }

    /// The player who collects the remaining seeds, if a row is empty.
    ///
    /// Player 0's row is checked first.
    fn sweeping_player(&self) -> Option<Player> {
        if self.row_is_empty(Player::Zero) {
            Some(Player::One)
        } else if self.row_is_empty(Player::One) {
            Some(Player::Zero)
        } else {
            None
        }
    }

    fn sweep_into_store(&mut self, player: Player) {
        let store = self.store(player);
        for side in [Player::Zero, Player::One] {
            for pit in self.row(side) {
                self.pits[store] += self.pits[pit];
                self.pits[pit] = 0;
            }
        }
    }

    /// Player 0's store minus player 1's store.
    pub fn score(&self) -> Score {
        self.store_seeds(Player::Zero) as Score - self.store_seeds(Player::One) as Score
    }

    pub fn is_over(&self) -> bool {
        self.sweeping_player().is_some()
    }

    /// Winner or tie once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        let zero = self.store_seeds(Player::Zero);
        let one = self.store_seeds(Player::One);
        Some(match zero.cmp(&one) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::Zero),
            std::cmp::Ordering::Less => Outcome::Winner(Player::One),
            std::cmp::Ordering::Equal => Outcome::Tie,
        })
    }

    /// Check that `pit` can be played by the side to move.
    pub fn validate(&self, pit: Pit) -> Result<(), KalahError> {
        if pit >= self.total_slots() {
            return Err(KalahError::PitOutOfRange { pit });
        }
        if self.is_store(pit) {
            return Err(KalahError::StorePit { pit });
        }
        if self.is_over() {
            return Err(KalahError::GameOver);
        }
        if self.owner(pit) != self.current_player {
            return Err(KalahError::NotYourPit {
                pit,
                player: self.current_player,
            });
        }
        if self.pits[pit] == 0 {
            return Err(KalahError::EmptyPit { pit });
        }
        Ok(())
    }

    /// Play `pit` after validating it.
    pub fn try_move(&self, pit: Pit) -> Result<Kalah, KalahError> {
        self.validate(pit)?;
        Ok(self.sow(pit))
    }

    fn sow(&self, pit: Pit) -> Kalah {
        let total = self.total_slots();
        let mut next = self.clone();
        let seeds = next.pits[pit] as usize;
        next.pits[pit] = 0;

        for i in pit + 1..=pit + seeds {
            next.pits[i % total] += 1;
        }
        let last = (pit + seeds) % total;
        let own_store = self.store(self.current_player);

        let opposite = next.opposite(last);
        if next.pits[last] == 1
            && !next.is_store(last)
            && next.owner(last) == self.current_player
            && next.pits[opposite] != 0
        {
            next.pits[own_store] += next.pits[opposite] + next.pits[last];
            next.pits[opposite] = 0;
            next.pits[last] = 0;
        }

        if last != own_store {
            next.current_player = self.current_player.opponent();
        }

        if let Some(player) = next.sweeping_player() {
            next.sweep_into_store(player);
        }

        next
    }
}

impl GameState for Kalah {
    type Move = Pit;

    fn current_player(&self) -> Player {
        self.current_player
    }

    fn available_moves(&self) -> Vec<Pit> {
        if self.is_over() {
            return Vec::new();
        }
        self.row(self.current_player)
            .filter(|&pit| self.pits[pit] > 0)
            .collect()
    }

    fn apply_move(&self, pit: Pit) -> Kalah {
        debug_assert!(self.validate(pit).is_ok(), "illegal move {pit}");
        self.sow(pit)
    }

    fn terminal_score(&self) -> Option<Score> {
        self.is_over().then(|| self.score())
    }

    fn heuristic_score(&self) -> Score {
        self.score()
    }
}

impl fmt::Display for Kalah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = "    ";
        write!(f, "{pad}")?;
        for pit in self.row(Player::One).rev() {
            write!(f, "[{:>2}]", self.pits[pit])?;
        }
        writeln!(f)?;

        write!(f, "[{:>2}]", self.store_seeds(Player::One))?;
        write!(f, "{}", pad.repeat(self.pits_per_player()))?;
        writeln!(f, "[{:>2}]", self.store_seeds(Player::Zero))?;

        write!(f, "{pad}")?;
        for pit in self.row(Player::Zero) {
            write!(f, "[{:>2}]", self.pits[pit])?;
        }
        writeln!(f)?;
        writeln!(f, "{} to move", self.current_player)
    }
}
