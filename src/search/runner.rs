//! Search execution: frontier disciplines over a shared explored set.

use super::types::{HeuristicProblem, Node, SearchProblem};
use crate::heap::{Cost, MinHeap};
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

/// Depth-first search from `initial` to the first goal found.
///
/// The frontier is a LIFO stack, so the returned path is *some* valid
/// path, not necessarily the shortest. Returns `None` when the frontier
/// empties without reaching a goal.
pub fn dfs<P: SearchProblem>(problem: &P, initial: P::State) -> Option<Rc<Node<P::State>>> {
    let mut frontier = vec![Node::root(initial.clone())];
    let mut explored = HashSet::new();
    explored.insert(initial);

    while let Some(current) = frontier.pop() {
        if problem.is_goal(current.state()) {
            tracing::debug!(steps = current.steps(), "dfs reached goal");
            return Some(current);
        }

        for child in problem.successors(current.state()) {
            if explored.contains(&child) {
                continue;
            }
            explored.insert(child.clone());
            frontier.push(Node::child(child, Rc::clone(&current), 0.0, 0.0));
        }
    }

    tracing::trace!("dfs frontier exhausted");
    None
}

/// Breadth-first search from `initial` to the first goal found.
///
/// The frontier is a FIFO queue, so with uniform step costs the
/// returned path has the minimum hop count. Returns `None` when the
/// frontier empties without reaching a goal.
pub fn bfs<P: SearchProblem>(problem: &P, initial: P::State) -> Option<Rc<Node<P::State>>> {
    let mut frontier = VecDeque::from([Node::root(initial.clone())]);
    let mut explored = HashSet::new();
    explored.insert(initial);

    while let Some(current) = frontier.pop_front() {
        if problem.is_goal(current.state()) {
            tracing::debug!(steps = current.steps(), "bfs reached goal");
            return Some(current);
        }

        for child in problem.successors(current.state()) {
            if explored.contains(&child) {
                continue;
            }
            explored.insert(child.clone());
            frontier.push_back(Node::child(child, Rc::clone(&current), 0.0, 0.0));
        }
    }

    tracing::trace!("bfs frontier exhausted");
    None
}

/// Breadth-first traversal collecting *every* goal node instead of
/// stopping at the first.
///
/// A node whose state passes the goal test is recorded and never
/// expanded further; the traversal continues until the frontier
/// empties. The result is empty when no goal is reachable.
pub fn find_all<P: SearchProblem>(problem: &P, initial: P::State) -> Vec<Rc<Node<P::State>>> {
    let mut all = Vec::new();
    let mut frontier = VecDeque::from([Node::root(initial.clone())]);
    let mut explored = HashSet::new();
    explored.insert(initial);

    while let Some(current) = frontier.pop_front() {
        if problem.is_goal(current.state()) {
            all.push(current);
            continue;
        }

        for child in problem.successors(current.state()) {
            if explored.contains(&child) {
                continue;
            }
            explored.insert(child.clone());
            frontier.push_back(Node::child(child, Rc::clone(&current), 0.0, 0.0));
        }
    }

    tracing::debug!(goals = all.len(), "find_all traversal complete");
    all
}

/// Heuristic best-first (A*) search from `initial` to the first goal
/// found.
///
/// The frontier is a [`MinHeap`] keyed by cumulative cost plus the
/// problem's heuristic estimate; step cost is uniform at 1. A state is
/// re-entered into the frontier whenever a cheaper path to it is found.
/// With an admissible estimate the returned path is cost-optimal.
/// Returns `None` when the frontier empties without reaching a goal.
pub fn astar<P: HeuristicProblem>(problem: &P, initial: P::State) -> Option<Rc<Node<P::State>>> {
    let mut frontier: MinHeap<Cost, Rc<Node<P::State>>> = MinHeap::new();
    let mut explored: HashMap<P::State, f64> = HashMap::new();

    let root = Node::scored_root(initial.clone(), problem.estimate(&initial));
    explored.insert(initial, 0.0);
    frontier.insert(Cost(root.priority()), root);

    while let Ok(current) = frontier.pop() {
        if problem.is_goal(current.state()) {
            tracing::debug!(steps = current.steps(), cost = current.cost(), "astar reached goal");
            return Some(current);
        }

        for child in problem.successors(current.state()) {
            let new_cost = current.cost() + 1.0;
            if explored.get(&child).is_none_or(|&best| best > new_cost) {
                explored.insert(child.clone(), new_cost);
                let estimate = problem.estimate(&child);
                let node = Node::child(child, Rc::clone(&current), new_cost, estimate);
                frontier.insert(Cost(node.priority()), node);
            }
        }
    }

    tracing::trace!("astar frontier exhausted");
    None
}
