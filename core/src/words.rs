use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Built-in candidate set used when the embedding does not supply its own.
pub const DEFAULT_WORDS: &[&str] = &["INNOVATE", "DYNAMIC", "ADVENTURE", "KNOWLEDGE", "STRATEGY"];

/// Fixed, non-empty ordered collection of candidate secret words.
///
/// An empty set is a configuration error and is rejected here, at
/// construction, so the engine never has to handle it during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    pub fn new(words: Vec<Word>) -> Result<Self> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Builds a list from raw strings, validating and case-normalizing each.
    pub fn parse<'a, I>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words = words
            .into_iter()
            .map(Word::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(words)
    }

    // never empty by construction, so no `is_empty` to pair with this
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Draws one candidate uniformly at random. Selection is independent per
    /// call, so repeats across rounds are possible.
    pub fn pick<R: rand::Rng>(&self, rng: &mut R) -> &Word {
        let index = rng.random_range(0..self.words.len());
        &self.words[index]
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::parse(DEFAULT_WORDS.iter().copied()).expect("built-in word list is valid")
    }
}
