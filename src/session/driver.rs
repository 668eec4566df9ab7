//! Cross-round progression through the word pool.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::{debug, info, instrument};

use crate::board::{AudioCue, Board, CellId, RoundEvent, Toggle};
use crate::core::{ExhaustionPolicy, GameRng, Result, SessionConfig, SyllableMemoryError};
use crate::round::{RoundFactory, WORDS_PER_ROUND};
use crate::words::{vocabulary, Word};

/// A game session: a shuffled pool of words, a cursor into it, and the live
/// board.
///
/// ```
/// use syllable_memory::core::SessionConfig;
/// use syllable_memory::session::Session;
/// use syllable_memory::words::Word;
///
/// let words = ["Ap-fel", "Son-ne", "Kat-ze", "Hund"]
///     .map(|t| Word::from_token(t, "vocabulary"));
/// let mut session = Session::new(words, SessionConfig::new().with_seed(1)).unwrap();
///
/// let board = session.start_round().unwrap();
/// assert_eq!(board.cells().len(), 9);
/// assert_eq!(session.cursor(), 3);
/// ```
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    pool: Vec<Arc<Word>>,
    cursor: usize,
    passes: u32,
    rng: GameRng,
    factory: RoundFactory,
    board: Option<Board>,
}

impl Session {
    /// Create a session over `words`.
    ///
    /// Duplicate spellings are dropped (first wins), `max_words` is applied,
    /// then the pool is shuffled.
    ///
    /// # Errors
    ///
    /// [`SyllableMemoryError::NotEnoughWords`] if fewer than three distinct
    /// words remain.
    #[instrument(skip_all)]
    pub fn new(words: impl IntoIterator<Item = Word>, config: SessionConfig) -> Result<Self> {
        let mut seen = FxHashSet::default();
        let mut pool: Vec<Arc<Word>> = words
            .into_iter()
            .filter(|w| seen.insert(w.spelling().to_owned()))
            .map(Arc::new)
            .collect();
        if let Some(max) = config.max_words {
            pool.truncate(max);
        }
        if pool.len() < WORDS_PER_ROUND {
            return Err(SyllableMemoryError::NotEnoughWords { available: pool.len() });
        }

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let factory = RoundFactory::new(rng.fork());
        rng.shuffle(&mut pool);

        info!(words = pool.len(), seed = rng.seed(), "session created");
        Ok(Self {
            config,
            pool,
            cursor: 0,
            passes: 0,
            rng,
            factory,
            board: None,
        })
    }

    /// Load `vocabulary.txt` from the configured resource directory and
    /// create a session over it.
    pub fn from_config(config: SessionConfig) -> Result<Self> {
        let words = vocabulary::load(&config.resource_dir)?;
        Self::new(words, config)
    }

    /// Sound to play when the session opens.
    #[must_use]
    pub fn start_cue(&self) -> AudioCue {
        AudioCue::Start
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Shuffled pool, in draw order.
    #[must_use]
    pub fn pool(&self) -> &[Arc<Word>] {
        &self.pool
    }

    /// Index of the next word to draw.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Completed reshuffles of the pool.
    #[must_use]
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Rounds started so far.
    #[must_use]
    pub fn rounds_started(&self) -> u32 {
        self.factory.rounds_created()
    }

    /// Can another round start without reshuffling?
    #[must_use]
    pub fn has_next_round(&self) -> bool {
        self.pool.len() - self.cursor >= WORDS_PER_ROUND
    }

    /// Replace the live board with a board for the next three words.
    ///
    /// # Errors
    ///
    /// [`SyllableMemoryError::PoolExhausted`] when fewer than three words
    /// remain under [`ExhaustionPolicy::Stop`]. The live board is kept.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn start_round(&mut self) -> Result<&mut Board> {
        if !self.has_next_round() {
            match self.config.exhaustion {
                ExhaustionPolicy::Stop => return Err(SyllableMemoryError::PoolExhausted),
                ExhaustionPolicy::Reshuffle => {
                    self.rng.shuffle(&mut self.pool);
                    self.cursor = 0;
                    self.passes += 1;
                    info!(passes = self.passes, "pool reshuffled");
                }
            }
        }

        let words = &self.pool[self.cursor..self.cursor + WORDS_PER_ROUND];
        let board = self.factory.try_create_round(words)?;
        self.cursor += WORDS_PER_ROUND;
        debug!(board = %board.id(), "round started");

        Ok(self.board.insert(board))
    }

    /// The live board, if a round has started.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    fn board_mut(&mut self) -> Result<&mut Board> {
        self.board.as_mut().ok_or(SyllableMemoryError::NoActiveRound)
    }

    /// Toggle a cell of the live board.
    pub fn toggle_select(&mut self, id: CellId) -> Result<Toggle> {
        Ok(self.board_mut()?.toggle_select(id))
    }

    /// Does the live board hold a complete triple?
    #[must_use]
    pub fn selection_is_complete_match(&self) -> bool {
        self.board().is_some_and(Board::selection_is_complete_match)
    }

    /// Resolve the live board's selection.
    ///
    /// The solved board stays live until [`start_round`](Self::start_round)
    /// replaces it, so the presentation can show the final state.
    pub fn resolve_selection(&mut self) -> Result<RoundEvent> {
        self.board_mut()?.resolve_selection()
    }
}
