//! Search tree nodes.
//!
//! Nodes are immutable once built and share their ancestors through `Rc`, so
//! every branch of the tree holds a cheap handle to its parent chain and the
//! tree can never contain a cycle.
//!
//! Equality and hashing look at the state only: two nodes for the same state
//! are the same node as far as an explored set is concerned, whatever path
//! led to them.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

struct NodeData<S> {
    state: S,
    parent: Option<SearchNode<S>>,
    cost: f64,
    depth: usize,
}

/// A node in the search tree: a state, the node it was reached from, and
/// the accumulated path cost.
pub struct SearchNode<S> {
    data: Rc<NodeData<S>>,
}

impl<S> Clone for SearchNode<S> {
    fn clone(&self) -> Self {
        Self {
            data: Rc::clone(&self.data),
        }
    }
}

impl<S> SearchNode<S> {
    /// Root node: no parent, zero cost.
    pub fn root(state: S) -> Self {
        Self {
            data: Rc::new(NodeData {
                state,
                parent: None,
                cost: 0.0,
                depth: 0,
            }),
        }
    }

    /// Node for `state` reached from `parent` by a step of `step_cost`.
    pub fn child(parent: &SearchNode<S>, state: S, step_cost: f64) -> Self {
        debug_assert!(step_cost >= 0.0, "negative step cost");
        Self {
            data: Rc::new(NodeData {
                state,
                parent: Some(parent.clone()),
                cost: parent.cost() + step_cost,
                depth: parent.depth() + 1,
            }),
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.data.state
    }

    #[inline]
    pub fn parent(&self) -> Option<&SearchNode<S>> {
        self.data.parent.as_ref()
    }

    /// Accumulated path cost from the root.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.data.cost
    }

    /// Number of edges between the root and this node.
    #[inline]
    pub fn depth(&self) -> usize {
        self.data.depth
    }

    /// Nodes from the root to `self`, both included.
    pub fn path_from_root(&self) -> Vec<SearchNode<S>> {
        let mut path = Vec::with_capacity(self.depth() + 1);
        let mut current = Some(self);
        while let Some(node) = current {
            path.push(node.clone());
            current = node.parent();
        }
        path.reverse();
        path
    }
}

impl<S: Clone> SearchNode<S> {
    /// States from the root to `self`.
    pub fn states_from_root(&self) -> Vec<S> {
        self.path_from_root()
            .iter()
            .map(|n| n.state().clone())
            .collect()
    }
}

impl<S: PartialEq> PartialEq for SearchNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

impl<S: Eq> Eq for SearchNode<S> {}

impl<S: Hash> Hash for SearchNode<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state().hash(state);
    }
}

impl<S: fmt::Debug> fmt::Debug for SearchNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNode")
            .field("state", self.state())
            .field("parent", &self.parent().map(|p| p.state()))
            .field("cost", &self.cost())
            .finish()
    }
}

impl<S: fmt::Display> fmt::Display for SearchNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SearchNode(state={}, cost={})", self.state(), self.cost())
    }
}

impl<S> Drop for NodeData<S> {
    // Unlink the parent chain iteratively; a recursive drop of a long
    // random-walk path would overflow the stack.
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Rc::try_unwrap(node.data) {
                Ok(mut data) => parent = data.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// A search node annotated with its heuristic estimate.
///
/// `h_cost` and `f_cost = cost + h_cost` are computed once at construction.
#[derive(Clone)]
pub struct AStarNode<S> {
    node: SearchNode<S>,
    h_cost: f64,
    f_cost: f64,
}

impl<S> AStarNode<S> {
    pub fn new(node: SearchNode<S>, h_cost: f64) -> Self {
        let f_cost = node.cost() + h_cost;
        Self {
            node,
            h_cost,
            f_cost,
        }
    }

    #[inline]
    pub fn node(&self) -> &SearchNode<S> {
        &self.node
    }

    pub fn into_node(self) -> SearchNode<S> {
        self.node
    }

    #[inline]
    pub fn h_cost(&self) -> f64 {
        self.h_cost
    }

    #[inline]
    pub fn f_cost(&self) -> f64 {
        self.f_cost
    }
}

impl<S: PartialEq> PartialEq for AStarNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<S: Eq> Eq for AStarNode<S> {}

impl<S: Hash> Hash for AStarNode<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

impl<S: fmt::Debug> fmt::Debug for AStarNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AStarNode")
            .field("state", self.node.state())
            .field("cost", &self.node.cost())
            .field("h_cost", &self.h_cost)
            .field("f_cost", &self.f_cost)
            .finish()
    }
}
