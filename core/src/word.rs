use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Letters counted as vowels for hint derivation.
pub const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U'];

/// A candidate secret word: non-empty, uppercase ASCII letters only.
///
/// Input is case-normalized at construction so guess evaluation never has to
/// worry about case again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word(String);

impl Word {
    pub fn new(word: &str) -> Result<Self> {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidWord);
        }
        Ok(Self(word.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // a `Word` is never empty, so no `is_empty` to pair with this
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    pub fn first_letter(&self) -> char {
        self.0.chars().next().unwrap_or_default()
    }

    pub fn last_letter(&self) -> char {
        self.0.chars().next_back().unwrap_or_default()
    }

    pub fn vowel_count(&self) -> usize {
        self.letters().filter(|c| VOWELS.contains(c)).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
