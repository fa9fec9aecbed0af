//! Adjacency-list graphs and weighted-graph algorithms.
//!
//! The graph model is generic over its edge type: [`UnweightedGraph`]
//! stores plain [`Edge`]s with idempotent undirected insertion, while
//! [`WeightedGraph`] stores [`WeightedEdge`]s and additionally offers
//! Prim minimum-spanning-tree construction ([`Graph::mst`]) and
//! Dijkstra single-source shortest paths ([`Graph::dijkstra`]), both
//! ordered by the crate's [`MinHeap`](crate::heap::MinHeap).
//!
//! Graphs are append-only: vertices receive a dense, zero-based index
//! at insertion time that stays stable for the life of the graph.

mod dijkstra;
mod model;
mod mst;
mod types;

pub use dijkstra::{path_of, DijkstraResult};
pub use model::{Graph, UnweightedGraph, WeightedGraph};
pub use mst::total_weight;
pub use types::{Edge, GraphEdge, GraphError, WeightedEdge};
