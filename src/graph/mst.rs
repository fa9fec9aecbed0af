//! Prim-style minimum spanning tree.

use super::model::Graph;
use super::types::{GraphError, WeightedEdge};
use crate::heap::{Cost, MinHeap};

/// Sums the weights of a sequence of edges.
pub fn total_weight(edges: &[WeightedEdge]) -> f64 {
    edges.iter().map(|edge| edge.weight).sum()
}

impl<V> Graph<V, WeightedEdge> {
    /// Computes a minimum spanning tree rooted at `start` using Prim's
    /// algorithm, ordered by the crate's [`MinHeap`].
    ///
    /// Frontier edges are keyed by weight; the lowest-weight edge is
    /// popped repeatedly, discarded when its far endpoint was already
    /// visited, accepted otherwise. On a connected graph the result
    /// holds `vertex_count() - 1` edges. On a disconnected graph it
    /// covers only the component reachable from `start`; that is the
    /// documented behavior, not an error.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn mst(&self, start: usize) -> Result<Vec<WeightedEdge>, GraphError> {
        self.validate_index(start)?;

        let mut result = Vec::new();
        let mut heap: MinHeap<Cost, WeightedEdge> = MinHeap::new();
        let mut visited = vec![false; self.vertex_count()];

        self.visit(start, &mut visited, &mut heap);
        while let Ok(edge) = heap.pop() {
            if visited[edge.v] {
                continue;
            }
            result.push(edge);
            self.visit(edge.v, &mut visited, &mut heap);
        }

        tracing::debug!(edges = result.len(), "mst complete");
        Ok(result)
    }

    /// [`mst`](Self::mst), resolving the start vertex by value.
    pub fn mst_from(&self, vertex: &V) -> Result<Vec<WeightedEdge>, GraphError>
    where
        V: PartialEq,
    {
        self.mst(self.index_of(vertex)?)
    }

    /// Marks `index` visited and pushes its edges into still-unvisited
    /// vertices onto the frontier.
    fn visit(&self, index: usize, visited: &mut [bool], heap: &mut MinHeap<Cost, WeightedEdge>) {
        visited[index] = true;
        for edge in self.edges_of(index) {
            if !visited[edge.v] {
                heap.insert(Cost(edge.weight), *edge);
            }
        }
    }
}
