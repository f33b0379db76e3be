//! Class token splitting.

mod token;

pub use token::{Pieces, split_token};
