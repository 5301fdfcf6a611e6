//! The capability interface shared by all graph-search strategies, and the
//! planner that drives one of them over a [`SearchProblem`].
//!
//! Strategies:
//! - [`DepthFirstSearch`](crate::uninformed::DepthFirstSearch) - LIFO frontier, first path found
//! - [`BreadthFirstSearch`](crate::uninformed::BreadthFirstSearch) - FIFO frontier, fewest steps
//! - [`RandomSearch`](crate::random_walk::RandomSearch) - memoryless random walk baseline
//! - [`AStarSearch`](crate::astar::AStarSearch) - best-first on `f = g + h`

use std::hash::Hash;

use tracing::debug;

use crate::node::SearchNode;
use crate::problem::{Navigable, Problem, SearchProblem};

/// A graph-search strategy.
///
/// Each call to [`search`](SearchStrategy::search) starts from scratch and
/// owns its frontier and explored set until the next call. The inspection
/// methods report the state left behind by the last call.
pub trait SearchStrategy<S: Clone + Eq + Hash> {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Find a path from the initial state to a goal.
    ///
    /// Returns the states from initial to goal, both included, or an empty
    /// vector if no path was found.
    fn search(&mut self, problem: &dyn Problem<State = S>) -> Vec<S>;

    /// Nodes of the path found by the last search.
    fn path(&self) -> &[SearchNode<S>];

    /// Generated nodes not expanded yet.
    fn frontier_nodes(&self) -> Vec<SearchNode<S>>;

    /// Nodes whose state has been marked explored.
    fn explored_nodes(&self) -> Vec<SearchNode<S>>;

    /// Explored nodes followed by frontier nodes.
    fn all_expanded_nodes(&self) -> Vec<SearchNode<S>> {
        let mut nodes = self.explored_nodes();
        nodes.extend(self.frontier_nodes());
        nodes
    }
}

/// Outcome of a single planning run.
#[derive(Debug, Clone)]
pub struct PlanReport<S> {
    /// States from start to goal; empty when no path exists
    pub path: Vec<S>,
    /// Path cost of the goal node (0 when no path was found)
    pub cost: f64,
    /// Successors generated by the problem during the search
    pub expanded: usize,
    /// Frontier size when the search stopped
    pub frontier: usize,
    /// Explored-set size when the search stopped
    pub explored: usize,
}

impl<S> PlanReport<S> {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves on the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Run `strategy` on `problem`, resetting the expansion counter first.
pub fn plan<W, T>(strategy: &mut T, problem: &SearchProblem<'_, W>) -> PlanReport<W::State>
where
    W: Navigable,
    T: SearchStrategy<W::State> + ?Sized,
{
    problem.reset_expanded_count();
    let path = strategy.search(problem);
    let cost = strategy.path().last().map_or(0.0, SearchNode::cost);

    let report = PlanReport {
        path,
        cost,
        expanded: problem.expanded_count(),
        frontier: strategy.frontier_nodes().len(),
        explored: strategy.explored_nodes().len(),
    };

    debug!(
        strategy = strategy.name(),
        found = report.found(),
        steps = report.steps(),
        expanded = report.expanded,
        frontier = report.frontier,
        explored = report.explored,
        "search complete"
    );

    report
}
