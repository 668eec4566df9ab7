//! Board cells and the pairwise matching rule.
//!
//! Every cell shows one face of a word: the written word, its syllable
//! count, or its picture. Three cells match when they all describe the
//! same thing, where a syllable count describes any word of that length.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::words::Word;

/// Identifier of one board (one round).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardId(pub u32);

impl BoardId {
    /// Create a new board ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", self.0)
    }
}

/// Identifier of a cell: its board plus its position in display order.
///
/// A `CellId` from an earlier round never addresses a cell of the current
/// board, because board IDs differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId {
    pub board: BoardId,
    pub index: u8,
}

impl CellId {
    /// Create a cell ID.
    #[must_use]
    pub const fn new(board: BoardId, index: u8) -> Self {
        Self { board, index }
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({}:{})", self.board.0, self.index)
    }
}

/// Which face of its word a cell shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Removed by a successful match.
    Empty,
    /// The written word, syllable by syllable.
    Word,
    /// The number of syllables.
    SyllableCount,
    /// The picture of the word.
    Picture,
}

impl CellKind {
    /// The three faces every word contributes to a round.
    pub const FACES: [CellKind; 3] = [CellKind::Word, CellKind::SyllableCount, CellKind::Picture];
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CellKind::Empty => "EMPTY",
            CellKind::Word => "WORD",
            CellKind::SyllableCount => "SYLLABLE_COUNT",
            CellKind::Picture => "PICTURE",
        };
        f.write_str(name)
    }
}

/// One tile of the board.
///
/// The source word is dropped when the cell is emptied; the syllable count
/// is copied out at creation so it survives for logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    id: CellId,
    kind: CellKind,
    word: Option<Arc<Word>>,
    syllable_count: usize,
}

impl Cell {
    /// Create a live cell showing `kind` of `word`.
    ///
    /// `kind` should be one of [`CellKind::FACES`]; passing `Empty` creates an
    /// already-removed cell.
    #[must_use]
    pub fn new(id: CellId, kind: CellKind, word: Arc<Word>) -> Self {
        let syllable_count = word.syllable_count();
        let word = (kind != CellKind::Empty).then_some(word);
        Self {
            id,
            kind,
            word,
            syllable_count,
        }
    }

    #[must_use]
    pub fn id(&self) -> CellId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Source word, `None` once the cell is empty.
    #[must_use]
    pub fn word(&self) -> Option<&Word> {
        self.word.as_deref()
    }

    /// Syllable count of the source word.
    #[must_use]
    pub fn syllable_count(&self) -> usize {
        self.syllable_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind == CellKind::Empty
    }

    /// Remove the cell from play. Irreversible.
    pub(crate) fn clear(&mut self) {
        self.kind = CellKind::Empty;
        self.word = None;
    }

    /// Pairwise matching rule.
    ///
    /// - Empty cells never match.
    /// - Two syllable-count cells never match, even with equal counts.
    /// - A syllable-count cell matches any word or picture with that many
    ///   syllables.
    /// - Any other pair matches when both show the same spelling.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use syllable_memory::board::{BoardId, Cell, CellId, CellKind};
    /// use syllable_memory::words::Word;
    ///
    /// let apfel = Arc::new(Word::from_token("Ap-fel", "v"));
    /// let sonne = Arc::new(Word::from_token("Son-ne", "v"));
    /// let id = |i| CellId::new(BoardId::new(0), i);
    ///
    /// let word = Cell::new(id(0), CellKind::Word, apfel.clone());
    /// let count = Cell::new(id(1), CellKind::SyllableCount, sonne.clone());
    /// let picture = Cell::new(id(2), CellKind::Picture, sonne);
    ///
    /// assert!(word.matches(&count));   // both two syllables
    /// assert!(!word.matches(&picture)); // different words
    /// ```
    #[must_use]
    pub fn matches(&self, other: &Cell) -> bool {
        let (Some(mine), Some(theirs)) = (self.word(), other.word()) else {
            return false;
        };

        match (self.kind, other.kind) {
            (CellKind::Empty, _) | (_, CellKind::Empty) => false,
            (CellKind::SyllableCount, CellKind::SyllableCount) => false,
            (CellKind::SyllableCount, _) | (_, CellKind::SyllableCount) => {
                self.syllable_count == other.syllable_count
            }
            _ => mine.spelling() == theirs.spelling(),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.word() {
            Some(word) => write!(f, "{}-{:?}", self.kind, word.spelling()),
            None => write!(f, "{}", self.kind),
        }
    }
}
