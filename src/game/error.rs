//! Errors surfaced by the game core.

use thiserror::Error;

/// Recoverable errors from session and stats operations.
///
/// None of these are fatal: the driver turns each one into player feedback
/// and keeps the game going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The guess was not exactly one letter
    #[error("not a single letter: {input:?}")]
    Validation { input: String },

    /// The letter has already been tried this round
    #[error("letter '{0}' was already guessed")]
    DuplicateGuess(char),

    /// A guess arrived after the round was won or lost
    #[error("the game is already over")]
    GameAlreadyOver,

    /// Bad arguments to session creation or outcome recording
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
