use crate::graph::*;
use petgraph::{graph::NodeIndex, stable_graph::StableUnGraph};

/// An adjacency-list graph backed by `petgraph`.
///
/// Adjacency point queries scan the incident edges of one endpoint, so
/// they are O(degree); iterating neighbors is cheap on sparse graphs.
#[derive(Clone)]
pub struct AdjacentListGraph(StableUnGraph<(), (), usize>);

impl GrowableGraph for AdjacentListGraph {
    fn new() -> Self {
        Self(StableUnGraph::<(), (), usize>::with_capacity(0, 0))
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.0.add_node(());
        VertexId::new(vid.index())
    }

    fn add_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        if a == b {
            return false;
        }
        let na = NodeIndex::new(a.to_raw());
        let nb = NodeIndex::new(b.to_raw());
        if self.0.find_edge(na, nb).is_some() {
            return false;
        }
        self.0.add_edge(na, nb, ());
        true
    }
}

impl QueryableGraph for AdjacentListGraph {
    fn vertex_size(&self) -> usize {
        self.0.node_count()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let it = self.0.node_indices().map(|x| VertexId::new(x.index()));
        Box::new(it)
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        let nidx = NodeIndex::new(v.to_raw());
        self.0.contains_node(nidx)
    }

    fn edge_size(&self) -> usize {
        self.0.edge_count()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.0.edge_indices().map(|x| {
            let (a, b) = self.0.edge_endpoints(x).unwrap();
            Edge::new(VertexId::new(a.index()), VertexId::new(b.index()))
        });
        Box::new(it)
    }

    fn adjacent(&self, u: &VertexId, v: &VertexId) -> bool {
        if !self.contains_vertex(u) || !self.contains_vertex(v) {
            return false;
        }
        let nu = NodeIndex::new(u.to_raw());
        let nv = NodeIndex::new(v.to_raw());
        self.0.find_edge(nu, nv).is_some()
    }

    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        if !self.contains_vertex(v) {
            return Box::new(std::iter::empty());
        }
        let nidx = NodeIndex::new(v.to_raw());
        let it = self.0.neighbors(nidx).map(|x| VertexId::new(x.index()));
        Box::new(it)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows() {
        let mut g = AdjacentListGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        assert!(g.add_edge(v0, v1));
        assert_eq!(g.vertex_size(), 2);
        assert_eq!(g.edge_size(), 1);
        assert!(g.adjacent(&v1, &v0));
    }

    #[test]
    fn rejects_self_loops_and_parallel_edges() {
        let mut g = AdjacentListGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        assert!(!g.add_edge(v0, v0));
        assert!(g.add_edge(v0, v1));
        assert!(!g.add_edge(v1, v0));
        assert_eq!(g.edge_size(), 1);
    }
}
