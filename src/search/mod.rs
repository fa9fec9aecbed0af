//! Generic state-space search.
//!
//! Domain-agnostic depth-first, breadth-first, exhaustive
//! goal-collecting, and heuristic best-first (A*) search over any state
//! type. The user implements [`SearchProblem`] (successor generation
//! and goal test) and, for A*, [`HeuristicProblem`] (remaining-cost
//! estimate); the runners handle frontier discipline, the explored set,
//! and parent-link bookkeeping.
//!
//! Results come back as [`Node`] handles from which the solution path
//! and step count are derived by walking parent links. An exhausted
//! frontier is a normal "no solution" outcome, reported as `None`.

mod distance;
mod runner;
mod scan;
mod types;

pub use distance::{euclidean_distance, manhattan_distance};
pub use runner::{astar, bfs, dfs, find_all};
pub use scan::{binary_contains, linear_contains};
pub use types::{HeuristicProblem, Node, SearchProblem};
