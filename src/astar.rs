//! A* search over unit-cost edges.
//!
//! The frontier is a binary heap ordered by `f = g + h`, ties broken by
//! insertion order. A state is marked explored when it is popped and never
//! reopened afterwards. With unit edge costs and a consistent heuristic the
//! first pop of a state is already at its cheapest cost, so the first goal
//! popped lies on an optimal path.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::hash::Hash;

use tracing::trace;

use crate::constants::STEP_COST;
use crate::node::{AStarNode, SearchNode};
use crate::problem::Problem;
use crate::search::SearchStrategy;

/// Heap entry: lowest `f_cost` first, then the earliest pushed.
struct Prioritized<S> {
    seq: u64,
    node: AStarNode<S>,
}

impl<S> PartialEq for Prioritized<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for Prioritized<S> {}

impl<S> PartialOrd for Prioritized<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Prioritized<S> {
    // BinaryHeap is a max-heap; reverse both keys.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .f_cost()
            .total_cmp(&self.node.f_cost())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Best-first search on `f = g + h` with the problem's heuristic.
pub struct AStarSearch<S> {
    frontier: BinaryHeap<Prioritized<S>>,
    explored: HashSet<SearchNode<S>>,
    path: Vec<SearchNode<S>>,
    pushed: u64,
}

impl<S: Clone + Eq + Hash> AStarSearch<S> {
    pub fn new() -> Self {
        Self {
            frontier: BinaryHeap::new(),
            explored: HashSet::new(),
            path: Vec::new(),
            pushed: 0,
        }
    }

    fn push(&mut self, node: AStarNode<S>) {
        self.frontier.push(Prioritized {
            seq: self.pushed,
            node,
        });
        self.pushed += 1;
    }
}

impl<S: Clone + Eq + Hash> Default for AStarSearch<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Eq + Hash> SearchStrategy<S> for AStarSearch<S> {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn search(&mut self, problem: &dyn Problem<State = S>) -> Vec<S> {
        self.frontier.clear();
        self.explored.clear();
        self.path.clear();
        self.pushed = 0;

        let root = SearchNode::root(problem.initial_state());
        if problem.is_goal(root.state()) {
            self.path = vec![root.clone()];
            return vec![root.state().clone()];
        }
        let h = problem.heuristic(root.state());
        self.push(AStarNode::new(root, h));

        while let Some(Prioritized { node, .. }) = self.frontier.pop() {
            let node = node.into_node();
            // A state may sit on the frontier more than once; only the first
            // (cheapest) pop counts.
            if !self.explored.insert(node.clone()) {
                continue;
            }
            if problem.is_goal(node.state()) {
                trace!(cost = node.cost(), "goal popped");
                self.path = node.path_from_root();
                return node.states_from_root();
            }

            for state in problem.successors(node.state()) {
                let child = SearchNode::child(&node, state, STEP_COST);
                if self.explored.contains(&child) {
                    continue;
                }
                let h = problem.heuristic(child.state());
                self.push(AStarNode::new(child, h));
            }
        }

        Vec::new()
    }

    fn path(&self) -> &[SearchNode<S>] {
        &self.path
    }

    /// Queued nodes whose state has not been expanded. Stale heap entries
    /// for states popped earlier are left out.
    fn frontier_nodes(&self) -> Vec<SearchNode<S>> {
        self.frontier
            .iter()
            .map(|p| p.node.node())
            .filter(|n| !self.explored.contains(*n))
            .cloned()
            .collect()
    }

    fn explored_nodes(&self) -> Vec<SearchNode<S>> {
        self.explored.iter().cloned().collect()
    }
}
