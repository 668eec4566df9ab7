//! Vocabulary: words, normalization and file parsing.

pub mod word;
pub mod vocabulary;

pub use word::{normalize, Word, SYLLABLE_SEPARATOR};
