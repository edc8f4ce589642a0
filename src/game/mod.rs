#![allow(dead_code)]
//! Game logic: secret word, letter guesses, win/loss state machine

pub mod error;
pub mod validation;
pub mod words;

pub use error::GameError;
pub use words::{WordList, WordSource};

use error::Result;
use rand::seq::IndexedRandom;
use rand::RngCore;

/// Incorrect guesses allowed before the round is lost.
pub const MAX_ATTEMPTS: u8 = 6;

/// Shown in the word mask for letters not yet revealed.
pub const PLACEHOLDER: char = '_';

/// Round status. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// What the round knows about one letter of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterState {
    #[default]
    Unguessed,
    Correct,
    Incorrect,
}

/// Whether an accepted guess was in the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Result of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The normalized (uppercase) letter
    pub letter: char,
    pub verdict: Verdict,
    /// Status after the guess was applied
    pub status: GameStatus,
}

/// One round of hangman.
///
/// Letter tracking is a single table indexed by letter, so every letter is
/// exactly one of unguessed, correct or incorrect.
#[derive(Debug, Clone)]
pub struct GameSession {
    secret_word: String,
    letters: [LetterState; 26],
    guess_order: Vec<char>,
    attempts_remaining: u8,
    status: GameStatus,
}

impl GameSession {
    /// Start a round with a word picked uniformly at random from `words`.
    pub fn create<S: AsRef<str>>(words: &[S], rng: &mut dyn RngCore) -> Result<Self> {
        let word = words
            .choose(rng)
            .ok_or_else(|| GameError::InvalidInput("word list is empty".to_string()))?;
        Self::with_word(word.as_ref())
    }

    /// Start a round with a word supplied by a [`WordSource`].
    pub fn from_source(source: &dyn WordSource, rng: &mut dyn RngCore) -> Result<Self> {
        let word = source
            .provide_word(rng)
            .ok_or_else(|| GameError::InvalidInput("word source is empty".to_string()))?;
        Self::with_word(&word)
    }

    /// Start a round with a known secret word.
    pub fn with_word(word: &str) -> Result<Self> {
        let secret_word = validation::normalize_word(word)?;

        Ok(Self {
            secret_word,
            letters: [LetterState::Unguessed; 26],
            guess_order: Vec::new(),
            attempts_remaining: MAX_ATTEMPTS,
            status: GameStatus::Playing,
        })
    }

    /// Submit a letter guess.
    ///
    /// Rejected guesses (round over, not a letter, already tried) leave the
    /// session untouched.
    pub fn guess_letter(&mut self, input: &str) -> Result<GuessOutcome> {
        if self.is_complete() {
            return Err(GameError::GameAlreadyOver);
        }

        let letter = validation::normalize_guess(input)?;
        let slot = letter_index(letter);

        if self.letters[slot] != LetterState::Unguessed {
            return Err(GameError::DuplicateGuess(letter));
        }

        self.guess_order.push(letter);

        let verdict = if self.secret_word.contains(letter) {
            self.letters[slot] = LetterState::Correct;
            if self.all_letters_revealed() {
                self.status = GameStatus::Won;
            }
            Verdict::Correct
        } else {
            self.letters[slot] = LetterState::Incorrect;
            self.attempts_remaining -= 1;
            if self.attempts_remaining == 0 {
                self.status = GameStatus::Lost;
            }
            Verdict::Incorrect
        };

        tracing::debug!(%letter, ?verdict, status = ?self.status, "guess applied");

        Ok(GuessOutcome {
            letter,
            verdict,
            status: self.status,
        })
    }

    /// The word mask, e.g. `"_ A _ _ O"`.
    pub fn rendered_word(&self) -> String {
        self.secret_word
            .chars()
            .map(|c| {
                if self.letter_state(c) == LetterState::Correct {
                    c
                } else {
                    PLACEHOLDER
                }
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True once the round is won or lost.
    pub fn is_complete(&self) -> bool {
        self.status != GameStatus::Playing
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    /// Incorrect guesses so far (0..=MAX_ATTEMPTS).
    pub fn wrong_guesses(&self) -> u8 {
        MAX_ATTEMPTS - self.attempts_remaining
    }

    /// State of a letter; non-letters are always unguessed.
    pub fn letter_state(&self, letter: char) -> LetterState {
        if letter.is_ascii_alphabetic() {
            self.letters[letter_index(letter.to_ascii_uppercase())]
        } else {
            LetterState::Unguessed
        }
    }

    /// Every accepted guess, in the order it was made.
    pub fn guessed_letters(&self) -> &[char] {
        &self.guess_order
    }

    /// Letters found in the word, alphabetical.
    pub fn correct_letters(&self) -> Vec<char> {
        self.letters_in_state(LetterState::Correct)
    }

    /// Letters not in the word, alphabetical.
    pub fn incorrect_letters(&self) -> Vec<char> {
        self.letters_in_state(LetterState::Incorrect)
    }

    fn letters_in_state(&self, state: LetterState) -> Vec<char> {
        ('A'..='Z')
            .filter(|&c| self.letters[letter_index(c)] == state)
            .collect()
    }

    fn all_letters_revealed(&self) -> bool {
        self.secret_word
            .chars()
            .all(|c| self.letter_state(c) == LetterState::Correct)
    }
}

/// Table slot for an uppercase ASCII letter.
fn letter_index(letter: char) -> usize {
    (letter as u8 - b'A') as usize
}
