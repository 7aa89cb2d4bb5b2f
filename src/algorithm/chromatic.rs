use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

/// Exact chromatic number by iterative deepening over a color budget.
pub trait ChromaticNumber
where
    Self: QueryableGraph + Sized,
{
    /// Computes the minimum number of colors of a proper vertex coloring,
    /// together with one coloring of that many colors.
    ///
    /// For each budget k = 1, 2, ... an exhaustive backtracking search
    /// looks for a proper coloring with colors `1..=k`; the first budget
    /// that admits one is minimal because all smaller budgets were
    /// exhausted. The budget loop is bounded by the vertex count, which
    /// always suffices: pairwise distinct colors properly color any graph.
    ///
    /// Vertices are visited in ascending ID order and colors are tried in
    /// ascending order, so the returned coloring is deterministic for a
    /// given graph. An empty graph yields `(0, empty coloring)`.
    ///
    /// Worst-case runtime is exponential in the vertex count.
    fn chromatic_coloring(&self) -> (usize, Coloring) {
        Searcher::new(self).run()
    }

    fn chromatic_number(&self) -> usize {
        self.chromatic_coloring().0
    }
}

impl<G: QueryableGraph> ChromaticNumber for G {}

/// A complete assignment of colors to vertices, with colors numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    slots: Vec<(VertexId, usize)>,
}

impl Coloring {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn color_of(&self, v: &VertexId) -> Option<usize> {
        self.slots
            .binary_search_by_key(v, |(u, _)| *u)
            .ok()
            .map(|nth| self.slots[nth].1)
    }

    /// Iterates colored vertices in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, usize)> + '_ {
        self.slots.iter().copied()
    }

    /// Whether every vertex of `graph` is colored and no two adjacent
    /// vertices share a color.
    pub fn is_proper<G: QueryableGraph>(&self, graph: &G) -> bool {
        graph.iter_vertices().all(|v| self.color_of(&v).is_some())
            && graph
                .iter_edges()
                .all(|e| self.color_of(&e.source) != self.color_of(&e.sink))
    }
}

struct Searcher {
    vertices: Vec<VertexId>,
    neighbors: Vec<Vec<usize>>,
    assignment: Vec<usize>,
}

impl Searcher {
    fn new<G: QueryableGraph>(graph: &G) -> Self {
        let mut vertices: Vec<_> = graph.iter_vertices().collect();
        vertices.sort_unstable();
        let positions: HashMap<VertexId, usize, RandomState> = vertices
            .iter()
            .enumerate()
            .map(|(nth, v)| (*v, nth))
            .collect();
        let neighbors: Vec<Vec<usize>> = vertices
            .iter()
            .map(|v| graph.neighbors(v).map(|u| positions[&u]).collect())
            .collect();
        let assignment = vec![0; vertices.len()];
        Self {
            vertices,
            neighbors,
            assignment,
        }
    }

    fn run(mut self) -> (usize, Coloring) {
        let n = self.vertices.len();
        for budget in 1..=n {
            if self.color_from(0, budget) {
                let slots = self
                    .vertices
                    .iter()
                    .copied()
                    .zip(self.assignment.iter().copied())
                    .collect();
                return (budget, Coloring { slots });
            }
        }
        // Only reachable for the empty graph: a budget of n pairwise
        // distinct colors properly colors any graph of n vertices.
        assert_eq!(n, 0);
        (0, Coloring { slots: vec![] })
    }

    fn color_from(&mut self, pos: usize, budget: usize) -> bool {
        if pos == self.assignment.len() {
            return true;
        }
        for color in 1..=budget {
            if self.is_safe(pos, color) {
                self.assignment[pos] = color;
                if self.color_from(pos + 1, budget) {
                    return true;
                }
                self.assignment[pos] = 0;
            }
        }
        false
    }

    // Zero marks an uncolored vertex, so uncolored neighbors never
    // conflict with a candidate color.
    fn is_safe(&self, pos: usize, color: usize) -> bool {
        self.neighbors[pos]
            .iter()
            .all(|u| self.assignment[*u] != color)
    }
}
