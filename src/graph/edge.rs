use super::VertexId;

/// An undirected edge between two distinct vertices.
///
/// Edges are kept in normalized form, `source <= sink`, so that two edge
/// sets over the same vertices compare equal regardless of the order
/// their endpoints were supplied in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: VertexId,
    pub sink: VertexId,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { source: a, sink: b }
        } else {
            Self { source: b, sink: a }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized() {
        let a = VertexId::new(3);
        let b = VertexId::new(7);
        assert_eq!(Edge::new(a, b), Edge::new(b, a));
        assert_eq!(Edge::new(b, a).source, a);
    }
}
