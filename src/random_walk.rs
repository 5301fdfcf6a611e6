//! Random walk: the baseline every real strategy should beat.
//!
//! The walker picks a uniformly random successor at each step, with no
//! memory of where it has been and no backtracking. It gives up when the
//! move budget runs out or it reaches a dead end. Not complete, not optimal.

use std::hash::Hash;

use tracing::trace;

use crate::constants::{DEFAULT_MAX_DEPTH, STEP_COST};
use crate::node::SearchNode;
use crate::problem::Problem;
use crate::search::SearchStrategy;

/// Memoryless random walk with a move budget.
pub struct RandomSearch<S> {
    max_depth: usize,
    rng: fastrand::Rng,
    /// Every node walked through during the last search
    walked: Vec<SearchNode<S>>,
    path: Vec<SearchNode<S>>,
}

impl<S: Clone + Eq + Hash> RandomSearch<S> {
    /// Walker seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(fastrand::Rng::new())
    }

    /// Walker with a reproducible sequence of choices.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(fastrand::Rng::with_seed(seed))
    }

    fn from_rng(rng: fastrand::Rng) -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            rng,
            walked: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Give up after `max_depth` moves.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl<S: Clone + Eq + Hash> Default for RandomSearch<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Eq + Hash> SearchStrategy<S> for RandomSearch<S> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn search(&mut self, problem: &dyn Problem<State = S>) -> Vec<S> {
        self.walked.clear();
        self.path.clear();

        let mut current = SearchNode::root(problem.initial_state());
        self.walked.push(current.clone());

        loop {
            if problem.is_goal(current.state()) {
                self.path = current.path_from_root();
                return current.states_from_root();
            }
            if current.depth() >= self.max_depth {
                break;
            }

            let mut successors = problem.successors(current.state());
            if successors.is_empty() {
                trace!(steps = current.depth(), "random walk hit a dead end");
                break;
            }
            let next = successors.swap_remove(self.rng.usize(..successors.len()));
            current = SearchNode::child(&current, next, STEP_COST);
            self.walked.push(current.clone());
        }

        trace!(steps = current.depth(), "random walk gave up");
        Vec::new()
    }

    fn path(&self) -> &[SearchNode<S>] {
        &self.path
    }

    fn frontier_nodes(&self) -> Vec<SearchNode<S>> {
        Vec::new()
    }

    fn explored_nodes(&self) -> Vec<SearchNode<S>> {
        self.walked.clone()
    }
}
