//! Round generation.

mod factory;

pub use factory::{RoundFactory, CELLS_PER_ROUND, WORDS_PER_ROUND};
