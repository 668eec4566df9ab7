//! What the board tells its presentation and audio collaborators.
//!
//! The core never draws or plays anything. It classifies each cell into a
//! [`CellView`] and reports resolutions as [`RoundEvent`]s.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Outcome of a `toggle_select` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Toggle {
    /// The cell joined the selection.
    Selected,
    /// The cell left the selection.
    Deselected,
    /// The cell is empty or not on this board; nothing changed.
    Ignored,
}

/// How the presentation layer should draw a cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    /// Face down, shown as a generic placeholder.
    Hidden,
    /// Already matched, shown as a removed placeholder.
    Removed,
    /// Revealed word, drawn syllable by syllable.
    Word { syllables: Vec<String> },
    /// Revealed syllable count.
    SyllableCount(usize),
    /// Revealed picture; the spoken word accompanies it.
    Picture { picture: PathBuf, spoken_word: PathBuf },
}

impl CellView {
    /// Is the cell face up?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        !matches!(self, CellView::Hidden | CellView::Removed)
    }
}

/// Signal raised by a successful resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A triple was removed and cells remain.
    Correct,
    /// A triple was removed and the board is now solved.
    RoundComplete,
}

impl RoundEvent {
    /// Sound the audio collaborator plays for this event.
    #[must_use]
    pub fn audio_cue(self) -> AudioCue {
        match self {
            RoundEvent::Correct => AudioCue::Correct,
            RoundEvent::RoundComplete => AudioCue::RoundComplete,
        }
    }
}

/// Named sounds the audio collaborator is expected to provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCue {
    /// Session start jingle.
    Start,
    Correct,
    RoundComplete,
}

impl AudioCue {
    /// File name of the sound, relative to the working directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            AudioCue::Start => "start.ogg",
            AudioCue::Correct => "correct.ogg",
            AudioCue::RoundComplete => "finished.ogg",
        }
    }
}
