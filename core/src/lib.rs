#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use clock::*;
pub use engine::*;
pub use error::*;
pub use word::*;
pub use words::*;

mod clock;
mod engine;
mod error;
mod word;
mod words;

/// Countdown type used for the round timer.
pub type Seconds = u32;

/// Count type used for the session score.
pub type Score = u32;

/// Length of a round in seconds unless configured otherwise.
pub const DEFAULT_ROUND_SECS: Seconds = 60;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub round_secs: Seconds,
}

impl GameConfig {
    pub const fn new_unchecked(round_secs: Seconds) -> Self {
        Self { round_secs }
    }

    pub fn new(round_secs: Seconds) -> Self {
        Self::new_unchecked(round_secs.max(1))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_ROUND_SECS)
    }
}
