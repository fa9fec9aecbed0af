//! Generic adjacency-list storage.

use super::types::{Edge, GraphEdge, GraphError, WeightedEdge};
use std::fmt;

/// An adjacency-list graph over an ordered, append-only vertex
/// collection.
///
/// Vertices are referenced both by value and by a dense zero-based
/// index assigned at insertion; indices stay stable because removal is
/// not supported. Undirected semantics are modeled by storing an edge
/// and its reverse.
///
/// Vertex values are assumed unique by equality for lookup-by-value;
/// this is not enforced, and the first match wins.
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    vertices: Vec<V>,
    edges: Vec<Vec<E>>,
}

/// Graph storing unweighted [`Edge`]s.
pub type UnweightedGraph<V> = Graph<V, Edge>;

/// Graph storing [`WeightedEdge`]s.
pub type WeightedGraph<V> = Graph<V, WeightedEdge>;

impl<V, E: GraphEdge> Graph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Creates a graph pre-populated with `vertices` and no edges.
    pub fn with_vertices(vertices: Vec<V>) -> Self {
        let edges = vertices.iter().map(|_| Vec::new()).collect();
        Self { vertices, edges }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of stored edges (an undirected pair counts
    /// twice, once per direction).
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Appends a vertex and returns its dense index.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        self.vertices.push(vertex);
        self.edges.push(Vec::new());
        self.vertex_count() - 1
    }

    /// Returns the vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range; passing an index the graph
    /// never produced is a precondition violation.
    pub fn vertex_at(&self, index: usize) -> &V {
        &self.vertices[index]
    }

    /// Returns the index of the first vertex equal to `vertex`.
    pub fn index_of(&self, vertex: &V) -> Result<usize, GraphError>
    where
        V: PartialEq,
    {
        self.vertices
            .iter()
            .position(|candidate| candidate == vertex)
            .ok_or(GraphError::VertexNotFound)
    }

    /// Whether the graph holds a vertex equal to `vertex`.
    pub fn contains(&self, vertex: &V) -> bool
    where
        V: PartialEq,
    {
        self.vertices.iter().any(|candidate| candidate == vertex)
    }

    /// The vertices reachable over one edge from `index`, in edge
    /// insertion order.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn neighbours_of(&self, index: usize) -> Vec<&V> {
        self.edges[index]
            .iter()
            .map(|edge| self.vertex_at(edge.v()))
            .collect()
    }

    /// [`neighbours_of`](Self::neighbours_of), resolving the vertex by
    /// value first.
    pub fn neighbours_of_value(&self, vertex: &V) -> Result<Vec<&V>, GraphError>
    where
        V: PartialEq,
    {
        Ok(self.neighbours_of(self.index_of(vertex)?))
    }

    /// The adjacency list of `index`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn edges_of(&self, index: usize) -> &[E] {
        &self.edges[index]
    }

    /// [`edges_of`](Self::edges_of), resolving the vertex by value
    /// first.
    pub fn edges_of_value(&self, vertex: &V) -> Result<&[E], GraphError>
    where
        V: PartialEq,
    {
        Ok(self.edges_of(self.index_of(vertex)?))
    }

    /// Checks that both endpoints of `edge` are in range.
    pub fn validate_edge(&self, edge: &E) -> Result<(), GraphError> {
        if edge.u() >= self.vertex_count() || edge.v() >= self.vertex_count() {
            return Err(GraphError::InvalidEdge {
                u: edge.u(),
                v: edge.v(),
            });
        }
        Ok(())
    }

    /// Checks that `index` refers to an existing vertex.
    pub(super) fn validate_index(&self, index: usize) -> Result<(), GraphError> {
        if index >= self.vertex_count() {
            return Err(GraphError::IndexOutOfRange(index));
        }
        Ok(())
    }
}

impl<V> Graph<V, Edge> {
    /// Inserts the undirected edge `u -- v`.
    ///
    /// Idempotent on exact duplicates: the edge and its reverse are
    /// each inserted only if not already present, so re-adding the same
    /// pair leaves [`edge_count`](Graph::edge_count) unchanged.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        let edge = Edge::new(u, v);
        self.validate_edge(&edge)?;

        if !self.edges[u].contains(&edge) {
            self.edges[u].push(edge);
        }
        let reversed = edge.reversed();
        if !self.edges[v].contains(&reversed) {
            self.edges[v].push(reversed);
        }
        Ok(())
    }

    /// [`add_edge`](Self::add_edge), resolving both vertices by value.
    pub fn add_edge_values(&mut self, first: &V, second: &V) -> Result<(), GraphError>
    where
        V: PartialEq,
    {
        let u = self.index_of(first)?;
        let v = self.index_of(second)?;
        self.add_edge(u, v)
    }
}

impl<V> Graph<V, WeightedEdge> {
    /// Inserts the undirected weighted edge `u -- v`.
    ///
    /// Unlike the unweighted variant this does **not** deduplicate:
    /// re-adding the same pair grows both adjacency lists. Avoiding
    /// parallel edges is the caller's responsibility.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<(), GraphError> {
        let edge = WeightedEdge::new(u, v, weight);
        self.validate_edge(&edge)?;

        self.edges[u].push(edge);
        self.edges[v].push(edge.reversed());
        Ok(())
    }

    /// [`add_edge`](Self::add_edge), resolving both vertices by value.
    pub fn add_edge_values(&mut self, first: &V, second: &V, weight: f64) -> Result<(), GraphError>
    where
        V: PartialEq,
    {
        let u = self.index_of(first)?;
        let v = self.index_of(second)?;
        self.add_edge(u, v, weight)
    }
}

impl<V, E: GraphEdge> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Display, E: GraphEdge> fmt::Display for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.vertex_count() {
            write!(f, "{} ->", self.vertex_at(index))?;
            for (i, neighbour) in self.neighbours_of(index).iter().enumerate() {
                let separator = if i == 0 { ' ' } else { ',' };
                write!(f, "{separator}{neighbour}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
