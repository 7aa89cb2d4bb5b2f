//! Traits and implementations for undirected simple graphs.
//!
//! # Low-level graphs
//!
//! Some graph libraries allow customized types of vertices and edges.
//! But for algorithm authors, these customized types are hard to deal with.
//! Can we copy a vertex?
//! What is the cost of doing that copying?
//!
//! In this crate, vertices are lightweight ID's, essentially `usize`.
//! Algorithm authors may feel free to copy and store these ID's.
//! Edges are unordered pairs of vertex ID's, kept in normalized form so
//! that edge sets compare structurally across graph implementations.
//!
//! # Simple-graph discipline
//!
//! All implementations reject self-loops and parallel edges at
//! [`GrowableGraph::add_edge`], so [`QueryableGraph::adjacent`] is a
//! symmetric, irreflexive relation on vertices.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;

pub mod undirected;
