use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Word list is empty")]
    EmptyWordList,
    #[error("Words must be non-empty ASCII letters")]
    InvalidWord,
    #[error("Guesses must be a single ASCII letter")]
    InvalidLetter,
}

pub type Result<T> = core::result::Result<T, GameError>;
