//! Crate error type.
//!
//! Only contract violations and I/O surface as errors. A selection that does
//! not match is a `false` predicate, and clicks on removed or foreign cells
//! are reported as [`Toggle::Ignored`](crate::board::Toggle::Ignored).

use std::path::PathBuf;

use derive_more::{Display, Error, From};

/// Errors raised by the round factory, the session and the vocabulary loader.
#[derive(Debug, Display, Error, From)]
pub enum SyllableMemoryError {
    /// A round is built from exactly three words.
    #[display("a round needs exactly 3 words, got {count}")]
    WrongWordCount { count: usize },

    /// `resolve_selection` was called without a complete match selected.
    #[display("cannot resolve a selection of {selected} cells that is not a complete match")]
    PrematureResolve { selected: usize },

    /// The session pool is too small to ever build a round.
    #[display("the word pool holds {available} distinct words, at least 3 are needed")]
    NotEnoughWords { available: usize },

    /// Fewer than three words remain and the session does not reshuffle.
    #[display("the word pool is exhausted")]
    PoolExhausted,

    /// A board operation was requested before the first round started.
    #[display("no round has been started")]
    NoActiveRound,

    /// The vocabulary file could not be read.
    #[display("cannot read vocabulary {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },

    /// The configuration is not valid TOML for [`SessionConfig`](super::SessionConfig).
    #[display("invalid session config: {_0}")]
    #[from]
    Config(toml::de::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SyllableMemoryError>;
