//! Graph algorithms
mod chromatic;
pub use self::chromatic::*;
