//! Exact chromatic numbers of random undirected graphs.
//!
//! This crate has two halves, composed in strict dependency order:
//!
//! * [`generate::RandomGraph`] draws a random simple undirected graph
//!   where every pair of distinct vertices is independently connected
//!   with probability 1/2.
//! * [`algorithm::ChromaticNumber`] computes the minimum number of
//!   colors of a proper vertex coloring, together with one such
//!   coloring, by iterative deepening over a color budget with
//!   exhaustive backtracking per budget.
//!
//! Graphs are built from lightweight `usize`-backed vertex IDs, and both
//! halves are extension traits over the graph traits in [`graph`], so any
//! backend implementing those traits can be generated into and solved.
//!
//! ```
//! use chromatic::{algorithm::*, generate::*, graph::undirected::*};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let g = MatrixBackedGraph::random(6, &mut rng).unwrap();
//! let (min_colors, coloring) = g.chromatic_coloring();
//! assert!(coloring.is_proper(&g));
//! assert!(min_colors <= 6);
//! ```

pub mod algorithm;
mod error;
pub use self::error::*;
pub mod generate;
pub mod graph;
