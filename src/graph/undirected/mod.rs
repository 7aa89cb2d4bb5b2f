mod adjacent_list;
pub use self::adjacent_list::*;
mod matrix_backed;
pub use self::matrix_backed::*;

#[cfg(test)]
pub use self::tests::*;
