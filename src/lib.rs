//! # syllable-memory
//!
//! Board and round engine for a children's matching game. The board shows
//! nine face-down cards; each of three words appears once as written word,
//! once as syllable count and once as picture. The player reveals three
//! cards at a time and removes them when they describe the same thing.
//!
//! ## Design Principles
//!
//! 1. **Synchronous core**: Selecting and resolving are separate calls, so
//!    the caller owns any delay or animation between them.
//!
//! 2. **Classify, never render**: The board reports `CellView`s and
//!    `RoundEvent`s. Drawing and audio belong to the consumer.
//!
//! 3. **Reproducible**: All shuffling goes through a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `words`: Words, normalization, vocabulary parsing
//! - `board`: Cells, matching rule, board state machine, views
//! - `round`: Round factory
//! - `session`: Word pool and round progression

pub mod core;
pub mod words;
pub mod board;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use crate::core::{ExhaustionPolicy, GameRng, Result, SessionConfig, SyllableMemoryError};

pub use crate::words::{normalize, Word};

pub use crate::board::{
    AudioCue, Board, BoardId, Cell, CellId, CellKind, CellView, RoundEvent, Toggle,
};

pub use crate::round::RoundFactory;

pub use crate::session::Session;
