//! Core traits and the parent-link node tree.

use std::hash::Hash;
use std::rc::Rc;

/// Defines a state-space search problem.
///
/// The user implements successor generation and the goal test; the
/// search runners handle everything else. For reproducible search
/// order the successor sequence must be finite and deterministic.
///
/// # Examples
///
/// ```
/// use searchkit::search::{self, SearchProblem};
///
/// /// Count from a start value to a target by +1 / +3 steps.
/// struct Counter {
///     target: u32,
/// }
///
/// impl SearchProblem for Counter {
///     type State = u32;
///
///     fn successors(&self, state: &u32) -> Vec<u32> {
///         vec![state + 1, state + 3]
///     }
///
///     fn is_goal(&self, state: &u32) -> bool {
///         *state == self.target
///     }
/// }
///
/// let found = search::bfs(&Counter { target: 7 }, 0).unwrap();
/// assert_eq!(found.steps(), 3); // 0 -> 1 -> 4 -> 7
/// ```
pub trait SearchProblem {
    /// The state representation type.
    type State: Clone + Eq + Hash;

    /// The states reachable in one step from `state`, in order.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;
}

/// A search problem with a remaining-cost estimate, required by
/// [`astar`](super::astar).
///
/// For optimality the estimate must be admissible (never exceed the
/// true remaining cost) and non-negative. The engine does not enforce
/// this; it is the implementor's responsibility.
pub trait HeuristicProblem: SearchProblem {
    /// Estimated remaining cost from `state` to the nearest goal.
    fn estimate(&self, state: &Self::State) -> f64;
}

/// An immutable record of a discovered state, its parent, and its
/// costs.
///
/// Nodes are handed out as `Rc` handles; parent links are shared
/// immutable back-references created strictly before their children,
/// so the node tree can never form a cycle. The cost + heuristic
/// ordering key ([`priority`](Self::priority)) is only meaningful for
/// nodes produced by A*.
#[derive(Debug)]
pub struct Node<S> {
    state: S,
    parent: Option<Rc<Node<S>>>,
    cost: f64,
    heuristic: f64,
}

impl<S> Node<S> {
    /// Creates a parentless root node with zero cost.
    pub fn root(state: S) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            cost: 0.0,
            heuristic: 0.0,
        })
    }

    /// Creates a parentless root node carrying a heuristic estimate,
    /// used to seed an A* frontier.
    pub fn scored_root(state: S, heuristic: f64) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            cost: 0.0,
            heuristic,
        })
    }

    /// Creates a child of `parent`.
    pub fn child(state: S, parent: Rc<Node<S>>, cost: f64, heuristic: f64) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: Some(parent),
            cost,
            heuristic,
        })
    }

    /// The state this node wraps.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The node this one was expanded from, `None` for the root.
    pub fn parent(&self) -> Option<&Rc<Node<S>>> {
        self.parent.as_ref()
    }

    /// Cumulative cost from the root to this node.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Heuristic estimate recorded at creation time.
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    /// The frontier ordering key: cost plus heuristic.
    pub fn priority(&self) -> f64 {
        self.cost + self.heuristic
    }

    /// The number of parent links between this node and the root.
    pub fn steps(&self) -> usize {
        let mut steps = 0;
        let mut node = self;
        while let Some(parent) = node.parent.as_deref() {
            steps += 1;
            node = parent;
        }
        steps
    }

    /// The sequence of states from the root to this node, inclusive.
    pub fn path(&self) -> Vec<S>
    where
        S: Clone,
    {
        let mut path = vec![self.state.clone()];
        let mut node = self;
        while let Some(parent) = node.parent.as_deref() {
            path.push(parent.state.clone());
            node = parent;
        }
        path.reverse();
        path
    }
}
