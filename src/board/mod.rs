//! Board system: cells, the selection state machine and presentation views.
//!
//! ## Key Types
//!
//! - `Cell`: one tile showing a face of a word, or empty once matched
//! - `CellKind`: which face (`Word`, `SyllableCount`, `Picture`, `Empty`)
//! - `Board`: cells of one round plus the current selection
//! - `CellView`: what the presentation layer draws for a cell
//! - `RoundEvent`: what a successful resolution signals

pub mod cell;
pub mod state;
pub mod view;

pub use cell::{BoardId, Cell, CellId, CellKind};
pub use state::{Board, SELECTION_SIZE};
pub use view::{AudioCue, CellView, RoundEvent, Toggle};
