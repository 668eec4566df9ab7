//! Vocabulary file parsing.
//!
//! `vocabulary.txt` holds one hyphenated token per line (`Ap-fel`). Blank
//! lines and lines starting with `#` are skipped.

use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::{debug, instrument, warn};

use super::word::Word;
use crate::core::{Result, SyllableMemoryError};

/// File name of the vocabulary inside the resource directory.
pub const VOCABULARY_FILE: &str = "vocabulary.txt";

/// Comment marker at the start of a line.
const COMMENT_PREFIX: char = '#';

/// Parse vocabulary text into words whose resources live under `resource_dir`.
///
/// Words are returned in file order. Distinct spellings that share a resource
/// key are kept and logged.
pub fn parse(text: &str, resource_dir: impl AsRef<Path>) -> Vec<Word> {
    let resource_dir = resource_dir.as_ref();
    let words: Vec<Word> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
        .map(|token| Word::from_token(token, resource_dir))
        .collect();

    warn_on_key_collisions(&words);
    words
}

/// Read `resource_dir/vocabulary.txt`.
#[instrument(skip_all, fields(dir = %resource_dir.as_ref().display()))]
pub fn load(resource_dir: impl AsRef<Path>) -> Result<Vec<Word>> {
    let resource_dir = resource_dir.as_ref();
    let path = resource_dir.join(VOCABULARY_FILE);
    let text = std::fs::read_to_string(&path).map_err(|source| SyllableMemoryError::Io {
        path: path.clone(),
        source,
    })?;

    let words = parse(&text, resource_dir);
    debug!(count = words.len(), "loaded vocabulary");
    Ok(words)
}

fn warn_on_key_collisions(words: &[Word]) {
    let mut seen: FxHashMap<&str, &str> = FxHashMap::default();
    for word in words {
        match seen.get(word.key()) {
            Some(&other) if other != word.spelling() => {
                warn!(key = word.key(), first = other, second = word.spelling(), "resource key collision");
            }
            Some(_) => {}
            None => {
                seen.insert(word.key(), word.spelling());
            }
        }
    }
}
