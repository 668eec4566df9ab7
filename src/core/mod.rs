//! Core building blocks: RNG, configuration and errors.
//!
//! Nothing in here knows about words or boards; the game modules build on it.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::GameRng;
pub use config::{ExhaustionPolicy, SessionConfig};
pub use error::{Result, SyllableMemoryError};
