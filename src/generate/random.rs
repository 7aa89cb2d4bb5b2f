use crate::{graph::*, GraphError};
use rand::Rng;

/// Uniform random simple graphs.
pub trait RandomGraph
where
    Self: GrowableGraph + Sized,
{
    /// Draws a graph with `vertex_count` vertices where each pair of
    /// distinct vertices is independently connected with probability 1/2.
    ///
    /// Exactly one boolean is drawn from `rng` per unordered vertex pair,
    /// in ascending pair order, so a seeded RNG reproduces the same graph
    /// on every backend.
    ///
    /// Fails with [`GraphError::InvalidVertexCount`] when `vertex_count`
    /// is zero, before consuming any entropy.
    fn random<R: Rng>(vertex_count: usize, rng: &mut R) -> Result<Self, GraphError> {
        if vertex_count < 1 {
            return Err(GraphError::InvalidVertexCount(vertex_count));
        }
        let mut res = Self::new();
        let vertices: Vec<_> = (0..vertex_count).map(|_| res.add_vertex()).collect();
        for (i, a) in vertices.iter().enumerate() {
            for b in vertices[(i + 1)..].iter() {
                if rng.gen::<bool>() {
                    res.add_edge(*a, *b);
                }
            }
        }
        Ok(res)
    }
}

impl<G: GrowableGraph> RandomGraph for G {}
