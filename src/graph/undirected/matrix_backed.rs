use crate::graph::*;

/// A dense adjacency-matrix graph.
///
/// The matrix is kept symmetric with a false diagonal.
/// Adjacency point queries are O(1), which suits search algorithms that
/// probe the adjacency relation heavily.
/// Adding a vertex costs O(n) to extend every row.
#[derive(Clone)]
pub struct MatrixBackedGraph {
    adjacency: Vec<Vec<bool>>,
    edge_size: usize,
}

impl std::fmt::Debug for MatrixBackedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MatrixBackedGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

impl GrowableGraph for MatrixBackedGraph {
    fn new() -> Self {
        Self {
            adjacency: vec![],
            edge_size: 0,
        }
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = VertexId::new(self.adjacency.len());
        for row in self.adjacency.iter_mut() {
            row.push(false);
        }
        self.adjacency.push(vec![false; vid.to_raw() + 1]);
        vid
    }

    fn add_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        debug_assert!(self.contains_vertex(&a));
        debug_assert!(self.contains_vertex(&b));
        if a == b || self.adjacency[a.to_raw()][b.to_raw()] {
            return false;
        }
        self.adjacency[a.to_raw()][b.to_raw()] = true;
        self.adjacency[b.to_raw()][a.to_raw()] = true;
        self.edge_size += 1;
        true
    }
}

impl QueryableGraph for MatrixBackedGraph {
    fn vertex_size(&self) -> usize {
        self.adjacency.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.adjacency.len()).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.adjacency.len()
    }

    fn edge_size(&self) -> usize {
        self.edge_size
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let n = self.adjacency.len();
        let it = (0..n).flat_map(move |i| {
            ((i + 1)..n)
                .filter(move |j| self.adjacency[i][*j])
                .map(move |j| Edge::new(VertexId::new(i), VertexId::new(j)))
        });
        Box::new(it)
    }

    fn adjacent(&self, u: &VertexId, v: &VertexId) -> bool {
        self.contains_vertex(u) && self.contains_vertex(v) && self.adjacency[u.to_raw()][v.to_raw()]
    }

    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        if !self.contains_vertex(v) {
            return Box::new(std::iter::empty());
        }
        let it = self.adjacency[v.to_raw()]
            .iter()
            .enumerate()
            .filter(|(_, connected)| **connected)
            .map(|(j, _)| VertexId::new(j));
        Box::new(it)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows() {
        let mut g = MatrixBackedGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        let v2 = g.add_vertex();
        assert_eq!(g.vertex_size(), 3);
        assert_eq!(g.edge_size(), 0);
        assert!(g.add_edge(v0, v1));
        assert!(g.add_edge(v2, v1));
        assert_eq!(g.edge_size(), 2);
        assert!(g.adjacent(&v1, &v0));
        assert!(g.adjacent(&v1, &v2));
        assert!(!g.adjacent(&v0, &v2));
        let neighbors: Vec<_> = g.neighbors(&v1).collect();
        assert_eq!(neighbors, vec![v0, v2]);
    }

    #[test]
    fn rejects_self_loops() {
        let mut g = MatrixBackedGraph::new();
        let v = g.add_vertex();
        assert!(!g.add_edge(v, v));
        assert_eq!(g.edge_size(), 0);
        assert!(!g.adjacent(&v, &v));
    }

    #[test]
    fn rejects_parallel_edges() {
        let mut g = MatrixBackedGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        assert!(g.add_edge(v0, v1));
        assert!(!g.add_edge(v1, v0));
        assert_eq!(g.edge_size(), 1);
        assert_eq!(g.iter_edges().count(), 1);
    }
}
