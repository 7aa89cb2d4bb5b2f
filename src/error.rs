use thiserror::Error;

/// Errors of this crate.
///
/// Graph queries and the chromatic solver are total over well-formed
/// graphs, so the only fallible surface is input validation of the
/// random generator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A graph was requested with fewer than one vertex.
    #[error("vertex count must be at least 1, got {0}")]
    InvalidVertexCount(usize),
}
