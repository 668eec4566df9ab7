//! Round factory: three words in, one shuffled board out.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::board::{Board, BoardId, CellKind};
use crate::core::{GameRng, Result, SyllableMemoryError};
use crate::words::Word;

/// Words per round.
pub const WORDS_PER_ROUND: usize = 3;

/// Cells per round: one of each face per word.
pub const CELLS_PER_ROUND: usize = WORDS_PER_ROUND * CellKind::FACES.len();

/// Builds boards for successive rounds.
///
/// Owns the RNG used for cell order and hands out fresh board IDs, so cell
/// IDs of a finished round never address the next one.
#[derive(Clone, Debug)]
pub struct RoundFactory {
    rng: GameRng,
    next_board: u32,
}

impl RoundFactory {
    /// Create a factory shuffling with `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng, next_board: 0 }
    }

    /// Create a factory with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Number of boards built so far.
    #[must_use]
    pub fn rounds_created(&self) -> u32 {
        self.next_board
    }

    /// Build a board for exactly three words.
    ///
    /// Each word contributes a `Word`, `SyllableCount` and `Picture` cell;
    /// the nine cells are uniformly shuffled.
    #[instrument(skip_all, fields(board = self.next_board))]
    pub fn create_round(&mut self, words: [Arc<Word>; WORDS_PER_ROUND]) -> Board {
        let id = BoardId::new(self.next_board);
        self.next_board = self.next_board.wrapping_add(1);

        let mut faces: Vec<(CellKind, Arc<Word>)> = words
            .iter()
            .flat_map(|word| CellKind::FACES.map(|kind| (kind, Arc::clone(word))))
            .collect();
        self.rng.shuffle(&mut faces);

        info!(
            words = %words.iter().map(|w| w.spelling()).collect::<Vec<_>>().join(", "),
            "created round"
        );
        Board::new(id, faces)
    }

    /// Build a board from a slice, which must hold exactly three words.
    ///
    /// # Errors
    ///
    /// [`SyllableMemoryError::WrongWordCount`] for any other length. The
    /// slice is never truncated or padded.
    pub fn try_create_round(&mut self, words: &[Arc<Word>]) -> Result<Board> {
        let words: [Arc<Word>; WORDS_PER_ROUND] = words
            .to_vec()
            .try_into()
            .map_err(|w: Vec<_>| SyllableMemoryError::WrongWordCount { count: w.len() })?;
        Ok(self.create_round(words))
    }
}
