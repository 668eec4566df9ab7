//! The board state machine for one round.
//!
//! ## Flow
//!
//! 1. The player reveals cells with [`Board::toggle_select`]. At most three
//!    stay revealed; a fourth evicts the oldest.
//! 2. The caller checks [`Board::selection_is_complete_match`] and, after
//!    its own visual delay, calls [`Board::resolve_selection`].
//! 3. Resolving empties the three cells. Once every cell is empty the round
//!    is solved.
//!
//! The two steps are separate calls so the board stays synchronous.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, info, instrument, warn};

use super::cell::{BoardId, Cell, CellId, CellKind};
use super::view::{CellView, RoundEvent, Toggle};
use crate::core::{Result, SyllableMemoryError};
use crate::words::Word;

/// Number of cells in a complete selection.
pub const SELECTION_SIZE: usize = 3;

/// Cell indices are `u8`.
const MAX_CELLS: usize = u8::MAX as usize + 1;

/// All cells of one round plus the current selection.
#[derive(Clone, Debug)]
pub struct Board {
    id: BoardId,
    cells: Vec<Cell>,
    /// Oldest first. One spare inline slot for the push-then-evict step.
    selected: SmallVec<[CellId; SELECTION_SIZE + 1]>,
}

impl Board {
    /// Create a board from faces in display order.
    ///
    /// Each cell gets the ID of this board and its position. A board holds
    /// at most 256 cells; the round factory builds nine.
    #[must_use]
    pub(crate) fn new(id: BoardId, faces: Vec<(CellKind, Arc<Word>)>) -> Self {
        assert!(faces.len() <= MAX_CELLS, "a board holds at most {MAX_CELLS} cells");
        let cells = (0..=u8::MAX)
            .zip(faces)
            .map(|(index, (kind, word))| Cell::new(CellId::new(id, index), kind, word))
            .collect();
        Self {
            id,
            cells,
            selected: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> BoardId {
        self.id
    }

    /// Cells in display order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Look up a cell of this board.
    ///
    /// Returns `None` for IDs of other boards or out-of-range indices.
    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        if id.board != self.id {
            return None;
        }
        self.cells.get(usize::from(id.index))
    }

    fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        if id.board != self.id {
            return None;
        }
        self.cells.get_mut(usize::from(id.index))
    }

    /// Current selection, oldest first.
    #[must_use]
    pub fn selected(&self) -> &[CellId] {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, id: CellId) -> bool {
        self.selected.contains(&id)
    }

    /// Reveal or hide a cell.
    ///
    /// Selecting a fourth cell drops the oldest of the previous three.
    /// Empty cells and cells of other boards are ignored. Never resolves.
    #[instrument(skip(self), fields(board = %self.id))]
    pub fn toggle_select(&mut self, id: CellId) -> Toggle {
        match self.cell(id) {
            Some(cell) if !cell.is_empty() => {}
            _ => {
                debug!(cell = %id, "ignoring toggle of empty or foreign cell");
                return Toggle::Ignored;
            }
        }

        if let Some(pos) = self.selected.iter().position(|&s| s == id) {
            self.selected.remove(pos);
            debug!(cell = %id, "deselected");
            return Toggle::Deselected;
        }

        self.selected.push(id);
        if self.selected.len() > SELECTION_SIZE {
            let evicted = self.selected.remove(0);
            debug!(cell = %evicted, "evicted oldest selection");
        }
        debug!(cell = %id, selected = self.selected.len(), "selected");
        Toggle::Selected
    }

    /// Do exactly three cells form a triple?
    ///
    /// All three pairs are checked. Pairwise transitivity is not enough:
    /// two syllable-count cells can each match the third cell without
    /// matching each other.
    #[must_use]
    pub fn selection_is_complete_match(&self) -> bool {
        let [a, b, c] = match self.selected.as_slice() {
            &[a, b, c] => [a, b, c],
            _ => return false,
        };
        let (Some(a), Some(b), Some(c)) = (self.cell(a), self.cell(b), self.cell(c)) else {
            return false;
        };
        a.matches(b) && a.matches(c) && b.matches(c)
    }

    /// Remove the selected triple from play.
    ///
    /// # Errors
    ///
    /// Returns [`SyllableMemoryError::PrematureResolve`] and leaves the board
    /// untouched when the selection is not a complete match.
    #[instrument(skip(self), fields(board = %self.id))]
    pub fn resolve_selection(&mut self) -> Result<RoundEvent> {
        if !self.selection_is_complete_match() {
            warn!(selected = self.selected.len(), "resolve called without a complete match");
            return Err(SyllableMemoryError::PrematureResolve {
                selected: self.selected.len(),
            });
        }

        let resolved = std::mem::take(&mut self.selected);
        for id in resolved {
            if let Some(cell) = self.cell_mut(id) {
                debug!(cell = %cell, "removing");
                cell.clear();
            }
        }

        if self.is_solved() {
            info!("round solved");
            Ok(RoundEvent::RoundComplete)
        } else {
            debug!(remaining = self.remaining(), "match resolved");
            Ok(RoundEvent::Correct)
        }
    }

    /// True once every cell is empty.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Number of cells still in play.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Classify a cell for the presentation layer.
    ///
    /// Returns `None` for cells that are not on this board.
    #[must_use]
    pub fn view(&self, id: CellId) -> Option<CellView> {
        let cell = self.cell(id)?;
        let Some(word) = cell.word() else {
            return Some(CellView::Removed);
        };
        if !self.is_selected(id) {
            return Some(CellView::Hidden);
        }

        let view = match cell.kind() {
            CellKind::Empty => CellView::Removed,
            CellKind::Word => CellView::Word {
                syllables: word.syllables().to_vec(),
            },
            CellKind::SyllableCount => CellView::SyllableCount(cell.syllable_count()),
            CellKind::Picture => CellView::Picture {
                picture: word.picture().to_path_buf(),
                spoken_word: word.spoken_word().to_path_buf(),
            },
        };
        Some(view)
    }

    /// Views of all cells in display order.
    pub fn views(&self) -> impl Iterator<Item = CellView> + '_ {
        self.cells
            .iter()
            .filter_map(move |cell| self.view(cell.id()))
    }
}
