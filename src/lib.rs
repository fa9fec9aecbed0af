//! Domain-agnostic search and graph optimization toolkit.
//!
//! Provides generic implementations of classic search and
//! graph-optimization algorithms:
//!
//! - **Indexed Min-Heap**: array-encoded binary min-heap with
//!   arbitrary-element removal and in-place key updates, used as the
//!   ordering structure by every priority-driven algorithm in the crate.
//! - **Graph Model**: adjacency-list graphs (unweighted and weighted)
//!   over an append-only vertex collection with dense integer indices.
//! - **Weighted Graph Algorithms**: Dijkstra single-source shortest
//!   paths and Prim-style minimum spanning tree.
//! - **Generic State-Space Search**: depth-first, breadth-first,
//!   exhaustive goal-collecting, and heuristic best-first (A*) search
//!   over any state type — the user implements only a successor
//!   function and a goal test.
//!
//! # Architecture
//!
//! This crate contains no domain-specific concepts. Mazes, puzzles,
//! routing networks, etc. are all defined by consumers: they implement
//! [`search::SearchProblem`] (plus [`search::HeuristicProblem`] for A*)
//! or build a [`graph::WeightedGraph`], and the algorithms here handle
//! frontier management, relaxation, and path reconstruction generically.
//!
//! All algorithms are deterministic and single-threaded; results are
//! plain values that remain valid after the call returns.

pub mod graph;
pub mod heap;
pub mod search;
