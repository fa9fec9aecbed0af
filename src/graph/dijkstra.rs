//! Dijkstra single-source shortest paths.

use super::model::Graph;
use super::types::{GraphError, WeightedEdge};
use crate::heap::{Cost, MinHeap};
use std::collections::HashMap;
use std::hash::Hash;

/// Shortest-path tree produced by [`Graph::dijkstra`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DijkstraResult {
    /// Best-known distance per vertex index. Vertices unreachable from
    /// the source stay at `f64::INFINITY`; callers inspect this to
    /// detect partial coverage of a disconnected graph.
    pub distances: Vec<f64>,

    /// Maps each reached vertex (other than the source) to the edge
    /// that achieved its best distance. Walking these edges backward
    /// reconstructs the shortest path from the source to any target.
    pub path_map: HashMap<usize, WeightedEdge>,
}

impl<V> Graph<V, WeightedEdge> {
    /// Computes shortest paths from `start` to every reachable vertex.
    ///
    /// The frontier is a lazy-deletion queue: when relaxation improves
    /// a vertex's distance, the improved candidate is pushed without
    /// removing the stale entry, so the queue can grow beyond the edge
    /// count. Stale pops are harmless because relaxation only tests the
    /// live distance array. Switching to [`MinHeap::update`] would trade
    /// queue size for the lookup cost.
    ///
    /// Edge weights must be non-negative; negative weights are not
    /// detected and produce undefined results.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn dijkstra(&self, start: usize) -> Result<DijkstraResult, GraphError> {
        self.validate_index(start)?;

        let mut distances = vec![f64::INFINITY; self.vertex_count()];
        distances[start] = 0.0;

        let mut path_map = HashMap::new();
        let mut heap: MinHeap<Cost, usize> = MinHeap::new();
        heap.insert(Cost(0.0), start);

        while let Ok(u) = heap.pop() {
            let dist_u = distances[u];
            for edge in self.edges_of(u) {
                let candidate = dist_u + edge.weight;
                if candidate < distances[edge.v] {
                    distances[edge.v] = candidate;
                    path_map.insert(edge.v, *edge);
                    heap.insert(Cost(candidate), edge.v);
                }
            }
        }

        tracing::debug!(reached = path_map.len() + 1, "dijkstra complete");
        Ok(DijkstraResult {
            distances,
            path_map,
        })
    }

    /// [`dijkstra`](Self::dijkstra), resolving the source by value.
    pub fn dijkstra_from(&self, vertex: &V) -> Result<DijkstraResult, GraphError>
    where
        V: PartialEq,
    {
        self.dijkstra(self.index_of(vertex)?)
    }

    /// Re-keys a distance array by vertex value.
    pub fn distances_map(&self, distances: &[f64]) -> HashMap<V, f64>
    where
        V: Eq + Hash + Clone,
    {
        distances
            .iter()
            .enumerate()
            .map(|(index, &distance)| (self.vertex_at(index).clone(), distance))
            .collect()
    }
}

/// Reconstructs the edge sequence from `start` to `end` out of a
/// predecessor-edge map, by walking each edge's source endpoint
/// backward and reversing the collected sequence.
///
/// Returns an empty sequence when the map holds no entry for `end`
/// (including the empty-map case). The map is assumed internally
/// consistent; guarding against a cyclic map is a non-goal.
pub fn path_of(
    start: usize,
    end: usize,
    path_map: &HashMap<usize, WeightedEdge>,
) -> Vec<WeightedEdge> {
    let mut path = Vec::new();
    let mut edge = match path_map.get(&end) {
        Some(edge) => edge,
        None => return path,
    };
    path.push(*edge);

    while edge.u != start {
        edge = match path_map.get(&edge.u) {
            Some(edge) => edge,
            None => return Vec::new(),
        };
        path.push(*edge);
    }

    path.reverse();
    path
}
