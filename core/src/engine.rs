use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Idle -> Active (start)
/// - Active -> Won (guess completing the word)
/// - Active -> Lost (tick draining the timer)
/// - Won | Lost -> Active (start, score kept)
/// - any -> Idle (reset, score zeroed)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundState {
    /// No round underway; the loaded word is untouched
    Idle,
    /// Round underway, guesses and ticks apply
    Active,
    /// Round ended with the word fully revealed
    Won,
    /// Round ended with the timer drained
    Lost,
}

impl RoundState {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Indicates the round has ended and guesses/ticks no longer apply
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Outcome of submitting a letter
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    NoChange,
    /// Letter occurs in the word; every occurrence is now revealed
    Hit,
    /// Letter does not occur; recorded as an incorrect guess
    Miss,
    /// The hit completed the word and ended the round
    Won,
}

impl GuessOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of one timer tick
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    NoChange,
    Ticked,
    /// The tick drained the timer and ended the round
    TimedOut,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Read-only view of the game handed to presentation collaborators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Secret word with unrevealed positions shown as `_`
    pub display_word: String,
    /// Incorrect guesses in the order they were made
    pub misses: Vec<char>,
    pub score: Score,
    pub seconds_left: Seconds,
    pub state: RoundState,
    pub hint: Option<String>,
}

/// The word-guessing game from construction to any number of rounds.
///
/// All mutation happens inside `&mut self` calls triggered by discrete
/// events (player intents, clock ticks), so every derived field is
/// consistent by the time any collaborator observes the state.
#[derive(Clone, Debug)]
pub struct GameEngine {
    words: WordList,
    config: GameConfig,
    rng: SmallRng,
    word: Word,
    revealed: Vec<bool>,
    misses: Vec<char>,
    score: Score,
    seconds_left: Seconds,
    state: RoundState,
    hint: Option<String>,
}

impl GameEngine {
    /// Creates an engine over a fixed candidate set. A word is drawn
    /// immediately so hints work even before the first round starts.
    pub fn new(words: WordList, config: GameConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let word = words.pick(&mut rng).clone();
        let revealed = vec![false; word.len()];
        Self {
            words,
            config,
            rng,
            word,
            revealed,
            misses: Vec::new(),
            score: 0,
            seconds_left: config.round_secs,
            state: Default::default(),
            hint: None,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn seconds_left(&self) -> Seconds {
        self.seconds_left
    }

    /// The secret word. Presentation reveals it after a loss.
    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn misses(&self) -> &[char] {
        &self.misses
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Secret word with unrevealed positions substituted by `_`.
    pub fn display_word(&self) -> String {
        self.word
            .letters()
            .zip(&self.revealed)
            .map(|(letter, &revealed)| if revealed { letter } else { '_' })
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display_word: self.display_word(),
            misses: self.misses.clone(),
            score: self.score,
            seconds_left: self.seconds_left,
            state: self.state,
            hint: self.hint.clone(),
        }
    }

    /// Starts a new round: draws a fresh word and activates the timer.
    /// The session score is kept.
    pub fn start(&mut self) {
        let word = self.words.pick(&mut self.rng).clone();
        log::trace!("drew secret word: {}", word);
        self.load_word(word);
        self.state = RoundState::Active;
    }

    /// Soft reset: keeps the current word but clears all round progress,
    /// zeroes the score, and returns to `Idle`. A fresh word requires a
    /// separate `start`.
    pub fn reset(&mut self) {
        let word = self.word.clone();
        self.load_word(word);
        self.score = 0;
        self.state = RoundState::Idle;
    }

    fn load_word(&mut self, word: Word) {
        self.revealed = vec![false; word.len()];
        self.word = word;
        self.misses.clear();
        self.seconds_left = self.config.round_secs;
        self.hint = None;
    }

    /// Submits one letter. Case is normalized to match the word's alphabet;
    /// anything other than an ASCII letter is outside the contract.
    ///
    /// No-ops (`Ok(NoChange)`) when no round is running or the letter was
    /// already tried, so late or repeated intents never corrupt state.
    pub fn guess(&mut self, letter: char) -> Result<GuessOutcome> {
        use GuessOutcome::*;

        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter);
        }
        let letter = letter.to_ascii_uppercase();

        if !self.state.is_running() {
            return Ok(NoChange);
        }
        if self.misses.contains(&letter) || self.is_revealed(letter) {
            return Ok(NoChange);
        }

        if self.word.contains(letter) {
            // all occurrences reveal from the one guess
            for (position, word_letter) in self.word.letters().enumerate() {
                if word_letter == letter {
                    self.revealed[position] = true;
                }
            }

            if self.revealed.iter().all(|&revealed| revealed) {
                self.score += 1;
                self.state = RoundState::Won;
                log::debug!("round won, score is now {}", self.score);
                Ok(Won)
            } else {
                Ok(Hit)
            }
        } else {
            self.misses.push(letter);
            Ok(Miss)
        }
    }

    /// Derives and stores the hint for the currently loaded word: first
    /// letter, last letter, and vowel count. Costs nothing and works in any
    /// state, including before the first round.
    pub fn request_hint(&mut self) -> &str {
        let hint = format!(
            "The word starts with '{}', ends with '{}', and contains {} vowel(s).",
            self.word.first_letter(),
            self.word.last_letter(),
            self.word.vowel_count(),
        );
        self.hint.insert(hint)
    }

    /// Applies one elapsed second. No-op unless a round is running, which
    /// makes late ticks from an imperfectly cancelled clock harmless.
    pub fn on_tick(&mut self) -> TickOutcome {
        use TickOutcome::*;

        if !self.state.is_running() {
            return NoChange;
        }

        self.seconds_left = self.seconds_left.saturating_sub(1);
        if self.seconds_left == 0 {
            self.state = RoundState::Lost;
            log::debug!("timer drained, round lost");
            TimedOut
        } else {
            Ticked
        }
    }

    fn is_revealed(&self, letter: char) -> bool {
        self.word
            .letters()
            .zip(&self.revealed)
            .any(|(word_letter, &revealed)| word_letter == letter && revealed)
    }
}
