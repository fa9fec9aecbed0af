//! Edge types and graph errors.

use std::fmt;
use thiserror::Error;

/// Errors produced by graph construction and lookup.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A lookup-by-value found no matching vertex.
    #[error("vertex is not part of the graph")]
    VertexNotFound,

    /// An edge referenced a vertex index outside the graph.
    #[error("invalid edge {u} -> {v}")]
    InvalidEdge { u: usize, v: usize },

    /// A vertex index was outside the graph.
    #[error("vertex index {0} out of range")]
    IndexOutOfRange(usize),
}

/// Capabilities the generic [`Graph`](super::Graph) storage needs from
/// an edge type: its endpoint indices and a reversed copy for the
/// undirected back-edge.
pub trait GraphEdge: Clone + PartialEq {
    /// The "from" vertex index.
    fn u(&self) -> usize;

    /// The "to" vertex index.
    fn v(&self) -> usize;

    /// The same edge with its endpoints swapped.
    fn reversed(&self) -> Self;
}

/// An unweighted edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub u: usize,
    pub v: usize,
}

impl Edge {
    pub fn new(u: usize, v: usize) -> Self {
        Self { u, v }
    }
}

impl GraphEdge for Edge {
    fn u(&self) -> usize {
        self.u
    }

    fn v(&self) -> usize {
        self.v
    }

    fn reversed(&self) -> Self {
        Self {
            u: self.v,
            v: self.u,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.u, self.v)
    }
}

/// A weighted edge between two vertex indices.
///
/// Weights are expected to be non-negative; negative weights are not
/// detected and yield undefined results in the shortest-path and MST
/// algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

impl WeightedEdge {
    pub fn new(u: usize, v: usize, weight: f64) -> Self {
        Self { u, v, weight }
    }
}

impl GraphEdge for WeightedEdge {
    fn u(&self) -> usize {
        self.u
    }

    fn v(&self) -> usize {
        self.v
    }

    fn reversed(&self) -> Self {
        Self {
            u: self.v,
            v: self.u,
            weight: self.weight,
        }
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2} -> {}", self.u, self.weight, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_reversed() {
        let edge = Edge::new(1, 4);
        let reversed = edge.reversed();
        assert_eq!(reversed, Edge::new(4, 1));
        assert_eq!(reversed.reversed(), edge);
    }

    #[test]
    fn test_weighted_edge_reversed_keeps_weight() {
        let edge = WeightedEdge::new(0, 2, 3.5);
        let reversed = edge.reversed();
        assert_eq!(reversed.u, 2);
        assert_eq!(reversed.v, 0);
        assert_eq!(reversed.weight, 3.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Edge::new(0, 1).to_string(), "0 -> 1");
        assert_eq!(WeightedEdge::new(0, 1, 2.0).to_string(), "0 2.00 -> 1");
    }
}
