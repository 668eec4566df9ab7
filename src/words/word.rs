//! Vocabulary words and their resource identifiers.
//!
//! A `Word` is built from its syllables (`"Ap-fel"` → `["Ap", "fel"]`). All
//! resource paths derive from the normalized spelling, so the same syllables
//! under the same resource directory always name the same files:
//!
//! ```
//! use std::path::Path;
//! use syllable_memory::words::Word;
//!
//! let word = Word::from_token("Bü-cher", "vocabulary");
//! assert_eq!(word.spelling(), "Bücher");
//! assert_eq!(word.key(), "buecher");
//! assert_eq!(word.picture(), Path::new("vocabulary/buecher.jpg"));
//! assert_eq!(word.spoken_syllables()[1], Path::new("vocabulary/buecher_2.mp3"));
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Separator between syllables in a vocabulary token.
pub const SYLLABLE_SEPARATOR: char = '-';

/// Letter substitutions applied before lowercasing is complete.
const UMLAUT_EXPANSIONS: [(char, &str); 4] = [('ä', "ae"), ('ö', "oe"), ('ü', "ue"), ('ß', "ss")];

/// Map a spelling to its filesystem-safe resource key.
///
/// Lowercases, then expands `ä`, `ö`, `ü` and `ß` to ASCII digraphs. Only
/// used for resource identifiers; gameplay compares raw spellings.
#[must_use]
pub fn normalize(spelling: &str) -> String {
    let mut key = String::with_capacity(spelling.len() + 2);
    for ch in spelling.chars().flat_map(char::to_lowercase) {
        match UMLAUT_EXPANSIONS.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => key.push_str(to),
            None => key.push(ch),
        }
    }
    key
}

/// An immutable vocabulary entry.
///
/// Serializes as its syllables and resource directory only; everything else
/// is derived again on deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "WordRepr", from = "WordRepr")]
pub struct Word {
    syllables: SmallVec<[String; 4]>,
    resource_dir: PathBuf,
    spelling: String,
    key: String,
    spoken_word: PathBuf,
    spoken_syllables: Vec<PathBuf>,
    picture: PathBuf,
}

impl Word {
    /// Build a word from its syllables, deriving resources under `resource_dir`.
    pub fn new<I, S>(syllables: I, resource_dir: impl AsRef<Path>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let syllables: SmallVec<[String; 4]> = syllables.into_iter().map(Into::into).collect();
        let spelling = syllables.concat();
        let key = normalize(&spelling);
        let dir = resource_dir.as_ref();

        let spoken_syllables = (1..=syllables.len())
            .map(|i| dir.join(format!("{key}_{i}.mp3")))
            .collect();

        Self {
            spoken_word: dir.join(format!("{key}.mp3")),
            picture: dir.join(format!("{key}.jpg")),
            spoken_syllables,
            resource_dir: dir.to_path_buf(),
            syllables,
            spelling,
            key,
        }
    }

    /// Build a word from a hyphenated token such as `"Son-ne"`.
    pub fn from_token(token: &str, resource_dir: impl AsRef<Path>) -> Self {
        Self::new(token.split(SYLLABLE_SEPARATOR), resource_dir)
    }

    /// The syllables in reading order.
    #[must_use]
    pub fn syllables(&self) -> &[String] {
        &self.syllables
    }

    /// Number of syllables.
    #[must_use]
    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    /// Canonical spelling: the syllables concatenated.
    #[must_use]
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    /// Normalized resource key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Audio file with the whole word spoken.
    #[must_use]
    pub fn spoken_word(&self) -> &Path {
        &self.spoken_word
    }

    /// One audio file per syllable, numbered from 1.
    #[must_use]
    pub fn spoken_syllables(&self) -> &[PathBuf] {
        &self.spoken_syllables
    }

    /// Picture file.
    #[must_use]
    pub fn picture(&self) -> &Path {
        &self.picture
    }

    /// Directory the resource paths live in.
    #[must_use]
    pub fn resource_dir(&self) -> &Path {
        &self.resource_dir
    }
}

/// Serialized form of a [`Word`].
#[derive(Clone, Debug, Serialize, Deserialize)]
struct WordRepr {
    syllables: SmallVec<[String; 4]>,
    resource_dir: PathBuf,
}

impl From<WordRepr> for Word {
    fn from(repr: WordRepr) -> Self {
        Word::new(repr.syllables, repr.resource_dir)
    }
}

impl From<Word> for WordRepr {
    fn from(word: Word) -> Self {
        Self {
            syllables: word.syllables,
            resource_dir: word.resource_dir,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.spelling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_umlauts() {
        assert_eq!(normalize("Käse"), "kaese");
        assert_eq!(normalize("Löwe"), "loewe");
        assert_eq!(normalize("Tür"), "tuer");
        assert_eq!(normalize("Fuß"), "fuss");
        assert_eq!(normalize("Äpfel"), "aepfel");
        assert_eq!(normalize("ÖL"), "oel");
    }

    #[test]
    fn test_normalize_plain_ascii() {
        assert_eq!(normalize("Apfel"), "apfel");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_from_token() {
        let word = Word::from_token("Ap-fel", "vocabulary");

        assert_eq!(word.syllables(), ["Ap", "fel"]);
        assert_eq!(word.syllable_count(), 2);
        assert_eq!(word.spelling(), "Apfel");
        assert_eq!(word.key(), "apfel");
        assert_eq!(word.to_string(), "Apfel");
    }

    #[test]
    fn test_resource_paths() {
        let word = Word::from_token("Schmet-ter-ling", "res");

        assert_eq!(word.spoken_word(), Path::new("res/schmetterling.mp3"));
        assert_eq!(word.picture(), Path::new("res/schmetterling.jpg"));
        assert_eq!(
            word.spoken_syllables(),
            [
                PathBuf::from("res/schmetterling_1.mp3"),
                PathBuf::from("res/schmetterling_2.mp3"),
                PathBuf::from("res/schmetterling_3.mp3"),
            ]
        );
    }

    #[test]
    fn test_resources_are_pure() {
        let a = Word::from_token("Mäu-se", "v");
        let b = Word::new(["Mäu", "se"], "v");
        assert_eq!(a, b);
    }

    #[test]
    fn test_umlaut_collision_is_accepted() {
        // Different spellings, same resource key
        let a = Word::from_token("Mae-dchen", "v");
        let b = Word::from_token("Mä-dchen", "v");

        assert_ne!(a.spelling(), b.spelling());
        assert_eq!(a.key(), b.key());
        assert_eq!(a.picture(), b.picture());
    }

    #[test]
    fn test_single_syllable() {
        let word = Word::from_token("Ball", "v");
        assert_eq!(word.syllable_count(), 1);
        assert_eq!(word.spoken_syllables(), [PathBuf::from("v/ball_1.mp3")]);
    }

    #[test]
    fn test_serialization() {
        let word = Word::from_token("Kat-ze", "v");
        let json = serde_json::to_string(&word).unwrap();
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(word, back);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!({ "syllables": ["Kat", "ze"], "resource_dir": "v" }));
    }

    #[test]
    fn test_deserialization_rederives_fields() {
        let json = r#"{
            "syllables": ["Ap", "fel"],
            "resource_dir": "v",
            "spelling": "Sonne",
            "key": "../../etc/passwd",
            "picture": "/etc/passwd",
            "spoken_syllables": []
        }"#;
        let word: Word = serde_json::from_str(json).unwrap();

        assert_eq!(word, Word::from_token("Ap-fel", "v"));
        assert_eq!(word.spelling(), "Apfel");
        assert_eq!(word.key(), "apfel");
        assert_eq!(word.picture(), Path::new("v/apfel.jpg"));
        assert_eq!(word.spoken_syllables().len(), 2);
    }

    #[test]
    fn test_deserialization_needs_syllables() {
        assert!(serde_json::from_str::<Word>(r#"{ "resource_dir": "v" }"#).is_err());
    }
}
