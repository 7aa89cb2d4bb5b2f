use crate::graph::*;

/// Graphs which can grow by adding vertices and edges.
///
/// Implementations keep the graph simple: `add_edge` refuses self-loops
/// and edges which are already present.
pub trait GrowableGraph {
    fn new() -> Self;
    fn add_vertex(&mut self) -> VertexId;

    /// Adds an undirected edge between `a` and `b`.
    ///
    /// Returns `false`, leaving the graph unchanged, when `a == b` or the
    /// edge already exists.
    fn add_edge(&mut self, a: VertexId, b: VertexId) -> bool;
}

pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// Whether an edge connects `u` and `v`.
    ///
    /// The relation is symmetric, and `adjacent(v, v)` is always false.
    fn adjacent(&self, u: &VertexId, v: &VertexId) -> bool;
    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
