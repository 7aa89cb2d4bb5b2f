//! Random graph generation.
mod random;
pub use self::random::*;
