//! Uninformed tree search: depth-first and breadth-first.
//!
//! Both strategies share one loop and differ only in which end of the
//! frontier they pop from. The goal test runs when a node is generated, and
//! a state is marked explored the moment it is first pushed, so no state is
//! ever on the frontier twice.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use tracing::trace;

use crate::constants::STEP_COST;
use crate::node::SearchNode;
use crate::problem::Problem;
use crate::search::SearchStrategy;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Discipline {
    /// Stack: pop the most recently generated node
    Lifo,
    /// Queue: pop the oldest generated node
    Fifo,
}

/// Frontier, explored set and path shared by both strategies.
struct Uninformed<S> {
    discipline: Discipline,
    frontier: VecDeque<SearchNode<S>>,
    explored: HashSet<SearchNode<S>>,
    path: Vec<SearchNode<S>>,
}

impl<S: Clone + Eq + Hash> Uninformed<S> {
    fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            frontier: VecDeque::new(),
            explored: HashSet::new(),
            path: Vec::new(),
        }
    }

    fn pop(&mut self) -> Option<SearchNode<S>> {
        match self.discipline {
            Discipline::Lifo => self.frontier.pop_back(),
            Discipline::Fifo => self.frontier.pop_front(),
        }
    }

    fn found(&mut self, goal: &SearchNode<S>) -> Vec<S> {
        self.path = goal.path_from_root();
        self.path.iter().map(|n| n.state().clone()).collect()
    }

    fn run(&mut self, problem: &dyn Problem<State = S>) -> Vec<S> {
        self.frontier.clear();
        self.explored.clear();
        self.path.clear();

        let root = SearchNode::root(problem.initial_state());
        if problem.is_goal(root.state()) {
            return self.found(&root);
        }
        self.explored.insert(root.clone());
        self.frontier.push_back(root);

        while let Some(node) = self.pop() {
            for state in problem.successors(node.state()) {
                let child = SearchNode::child(&node, state, STEP_COST);
                if problem.is_goal(child.state()) {
                    trace!(depth = child.depth(), "goal generated");
                    return self.found(&child);
                }
                if self.explored.insert(child.clone()) {
                    self.frontier.push_back(child);
                }
            }
        }

        Vec::new()
    }
}

/// Depth-first search. Complete on finite spaces, not optimal.
pub struct DepthFirstSearch<S> {
    inner: Uninformed<S>,
}

impl<S: Clone + Eq + Hash> DepthFirstSearch<S> {
    pub fn new() -> Self {
        Self {
            inner: Uninformed::new(Discipline::Lifo),
        }
    }
}

impl<S: Clone + Eq + Hash> Default for DepthFirstSearch<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Breadth-first search. Returns a path with the fewest steps.
pub struct BreadthFirstSearch<S> {
    inner: Uninformed<S>,
}

impl<S: Clone + Eq + Hash> BreadthFirstSearch<S> {
    pub fn new() -> Self {
        Self {
            inner: Uninformed::new(Discipline::Fifo),
        }
    }
}

impl<S: Clone + Eq + Hash> Default for BreadthFirstSearch<S> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! uninformed_strategy {
    ($ty:ident, $name:literal) => {
        impl<S: Clone + Eq + Hash> SearchStrategy<S> for $ty<S> {
            fn name(&self) -> &'static str {
                $name
            }

            fn search(&mut self, problem: &dyn Problem<State = S>) -> Vec<S> {
                self.inner.run(problem)
            }

            fn path(&self) -> &[SearchNode<S>] {
                &self.inner.path
            }

            fn frontier_nodes(&self) -> Vec<SearchNode<S>> {
                self.inner.frontier.iter().cloned().collect()
            }

            fn explored_nodes(&self) -> Vec<SearchNode<S>> {
                self.inner.explored.iter().cloned().collect()
            }
        }
    };
}

uninformed_strategy!(DepthFirstSearch, "dfs");
uninformed_strategy!(BreadthFirstSearch, "bfs");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, GridPos};
    use crate::problem::SearchProblem;

    /// A line of states 0..len where only `len - 1` is the goal.
    struct Line {
        len: u32,
    }

    impl Problem for Line {
        type State = u32;

        fn initial_state(&self) -> u32 {
            0
        }

        fn is_goal(&self, state: &u32) -> bool {
            *state == self.len - 1
        }

        fn successors(&self, state: &u32) -> Vec<u32> {
            let mut out = Vec::new();
            if *state > 0 {
                out.push(state - 1);
            }
            if state + 1 < self.len {
                out.push(state + 1);
            }
            out
        }
    }

    #[test]
    fn test_bfs_shortest_on_open_grid() {
        let grid = Grid::with_border(5, 5);
        let problem = SearchProblem::new(&grid, GridPos::new(1, 1), GridPos::new(3, 3));
        let mut bfs = BreadthFirstSearch::<GridPos>::new();

        let path = bfs.search(&problem);
        assert_eq!(path.len(), 5);
        assert_eq!(bfs.path().len(), 5);
        assert_eq!(bfs.path().last().map(|n| n.cost()), Some(4.0));
    }

    #[test]
    fn test_dfs_finds_a_path() {
        let grid = Grid::with_border(5, 5);
        let problem = SearchProblem::new(&grid, GridPos::new(1, 1), GridPos::new(3, 3));
        let mut dfs = DepthFirstSearch::<GridPos>::new();

        let path = dfs.search(&problem);
        assert!(path.len() >= 5);
        assert_eq!(path.first(), Some(&GridPos::new(1, 1)));
        assert_eq!(path.last(), Some(&GridPos::new(3, 3)));
        for step in path.windows(2) {
            assert_eq!(step[0].distance_manhattan(&step[1]), 1);
        }
    }

    #[test]
    fn test_line_problem() {
        let problem = Line { len: 6 };
        let mut dfs: DepthFirstSearch<u32> = DepthFirstSearch::new();
        let mut bfs: BreadthFirstSearch<u32> = BreadthFirstSearch::new();
        assert_eq!(dfs.search(&problem), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(bfs.search(&problem), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_unreachable_goal() {
        let grid = Grid::parse(
            "
#######
#S.#..#
#..#.G#
#######
",
        )
        .unwrap();
        let problem = SearchProblem::new(&grid, GridPos::new(1, 1), GridPos::new(5, 2));

        let mut dfs = DepthFirstSearch::<GridPos>::new();
        let mut bfs = BreadthFirstSearch::<GridPos>::new();
        assert!(dfs.search(&problem).is_empty());
        assert!(bfs.search(&problem).is_empty());
        assert!(bfs.path().is_empty());
        assert!(bfs.frontier_nodes().is_empty());
        // Every cell of the start's room is explored
        assert_eq!(bfs.explored_nodes().len(), 4);
    }

    #[test]
    fn test_explored_states_are_unique() {
        let grid = Grid::with_border(8, 8);
        let problem = SearchProblem::new(&grid, GridPos::new(1, 1), GridPos::new(6, 6));
        let mut dfs = DepthFirstSearch::<GridPos>::new();
        dfs.search(&problem);

        let nodes = dfs.all_expanded_nodes();
        let explored: HashSet<GridPos> = dfs.explored_nodes().iter().map(|n| *n.state()).collect();
        assert_eq!(explored.len(), dfs.explored_nodes().len());
        // Frontier nodes are a subset of the explored states
        for node in dfs.frontier_nodes() {
            assert!(explored.contains(node.state()));
        }
        assert!(nodes.len() >= explored.len());
    }
}
