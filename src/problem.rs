//! Search problems: the contract strategies consume, and an adapter that
//! turns any navigable space into one.

use std::cell::Cell;
use std::hash::Hash;

/// What a search strategy needs to know about a state space.
///
/// Successor order is not significant for correctness, but it decides which
/// of several equally good paths is returned.
pub trait Problem {
    type State: Clone + Eq + Hash;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// States reachable from `state` in one step. Finite, possibly empty.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Estimated remaining cost from `state` to a goal. Must never
    /// overestimate. Zero turns A* into uniform-cost search.
    fn heuristic(&self, _state: &Self::State) -> f64 {
        0.0
    }
}

/// A space that can be walked one step at a time.
pub trait Navigable {
    type State: Clone + Eq + Hash;

    /// Traversable neighbours of `state`. Legality and occupancy are the
    /// space's business.
    fn reachable(&self, state: &Self::State) -> Vec<Self::State>;

    /// Lower bound on the number of steps between two states.
    fn estimate(&self, _from: &Self::State, _to: &Self::State) -> f64 {
        0.0
    }
}

/// Navigate a space from an initial state to a single goal state.
///
/// Keeps a count of generated successors for diagnostics. The counter is
/// interior-mutable so that strategies can share the problem immutably; it
/// is neither `Sync` nor meant to influence the search.
pub struct SearchProblem<'a, W: Navigable> {
    world: &'a W,
    initial_state: W::State,
    goal_state: W::State,
    expanded: Cell<usize>,
}

impl<'a, W: Navigable> SearchProblem<'a, W> {
    pub fn new(world: &'a W, initial_state: W::State, goal_state: W::State) -> Self {
        Self {
            world,
            initial_state,
            goal_state,
            expanded: Cell::new(0),
        }
    }

    /// Number of successors generated since the last reset.
    pub fn expanded_count(&self) -> usize {
        self.expanded.get()
    }

    pub fn reset_expanded_count(&self) {
        self.expanded.set(0);
    }
}

impl<W: Navigable> Problem for SearchProblem<'_, W> {
    type State = W::State;

    fn initial_state(&self) -> W::State {
        self.initial_state.clone()
    }

    fn is_goal(&self, state: &W::State) -> bool {
        *state == self.goal_state
    }

    fn successors(&self, state: &W::State) -> Vec<W::State> {
        let successors = self.world.reachable(state);
        self.expanded.set(self.expanded.get() + successors.len());
        successors
    }

    fn heuristic(&self, state: &W::State) -> f64 {
        self.world.estimate(state, &self.goal_state)
    }
}
