//! Application state management
//!
//! `App` is the driver around the game core: it owns the active session, the
//! stats tracker and the storage handle, turns submitted lines into guesses
//! or commands, and records each finished round exactly once.

use super::command::{Answer, Command};
use super::screen::{Feedback, Screen};
use crate::game::words::{hint_for, WordSource};
use crate::game::{GameError, GameSession, GameStatus, Verdict};
use crate::stats::StatsTracker;
use crate::storage::StatsStorage;
use rand::RngCore;

/// Longest line the input box accepts
pub const MAX_INPUT_LEN: usize = 16;

/// Shown when the stats record could not be written
pub const SAVE_WARNING: &str = "Warning: Could not save statistics";

/// Main application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Current user input
    pub input: String,
    /// Feedback message from last submission
    pub feedback: Feedback,
    /// Current screen
    pub screen: Screen,
    /// Set when the last save failed
    pub save_warning: Option<String>,
    session: GameSession,
    tracker: StatsTracker,
    storage: Box<dyn StatsStorage>,
    words: Box<dyn WordSource>,
    rng: Box<dyn RngCore>,
}

impl App {
    /// Load stats from `storage` and start the first round.
    pub fn new(
        words: Box<dyn WordSource>,
        storage: Box<dyn StatsStorage>,
        mut rng: Box<dyn RngCore>,
    ) -> Result<Self, GameError> {
        let tracker = StatsTracker::from_loaded(storage.load());
        let session = GameSession::from_source(&*words, &mut *rng)?;

        tracing::info!(
            word_length = session.secret_word().len(),
            games_played = tracker.games_played(),
            "round started"
        );

        Ok(Self {
            should_quit: false,
            input: String::new(),
            feedback: Feedback::default(),
            screen: Screen::Playing,
            save_warning: None,
            session,
            tracker,
            storage,
            words,
            rng,
        })
    }

    /// Signal the application to quit.
    ///
    /// Quitting mid-round records nothing for that round.
    pub fn quit(&mut self) {
        if self.screen != Screen::RoundOver && !self.session.is_complete() {
            tracing::info!("round abandoned");
        }
        self.should_quit = true;
    }

    /// Handle character input
    pub fn on_char(&mut self, c: char) {
        if self.screen == Screen::Stats || self.input.len() >= MAX_INPUT_LEN {
            return;
        }
        self.input.push(c);
        self.feedback = Feedback::default();
    }

    /// Handle backspace
    pub fn on_backspace(&mut self) {
        self.input.pop();
        self.feedback = Feedback::default();
    }

    /// Handle Esc: closes the stats panel, otherwise quits
    pub fn on_escape(&mut self) {
        if self.screen == Screen::Stats {
            self.screen = Screen::Playing;
        } else {
            self.quit();
        }
    }

    /// Handle line submission (Enter key)
    pub fn on_submit(&mut self) {
        let line = std::mem::take(&mut self.input);

        match self.screen {
            Screen::Stats => self.screen = Screen::Playing,
            Screen::Playing => self.submit_playing(&line),
            Screen::RoundOver => self.submit_round_over(&line),
        }
    }

    fn submit_playing(&mut self, line: &str) {
        let Some(command) = Command::parse(line) else {
            return;
        };

        match command {
            Command::Quit => self.quit(),
            Command::Stats => self.screen = Screen::Stats,
            Command::Hint => {
                self.feedback = Feedback::neutral(format!("Hint: {}", self.hint()));
            }
            Command::Guess(text) => self.apply_guess(&text),
        }
    }

    fn apply_guess(&mut self, text: &str) {
        match self.session.guess_letter(text) {
            Ok(outcome) => {
                self.feedback = match (outcome.verdict, outcome.status) {
                    (Verdict::Correct, GameStatus::Won) => Feedback::good(format!(
                        "Great! '{}' is in the word!\nCongratulations! You won! The word was '{}'",
                        outcome.letter,
                        self.session.secret_word()
                    )),
                    (Verdict::Correct, _) => {
                        Feedback::good(format!("Great! '{}' is in the word!", outcome.letter))
                    }
                    (Verdict::Incorrect, GameStatus::Lost) => Feedback::bad(format!(
                        "Sorry, '{}' is not in the word. Tries left: 0\nGame Over! The word was '{}'",
                        outcome.letter,
                        self.session.secret_word()
                    )),
                    (Verdict::Incorrect, _) => Feedback::bad(format!(
                        "Sorry, '{}' is not in the word. Tries left: {}",
                        outcome.letter,
                        self.session.attempts_remaining()
                    )),
                };

                if outcome.status.is_terminal() {
                    self.finish_round();
                }
            }
            Err(GameError::Validation { .. }) => {
                self.feedback = Feedback::warning("Please enter a single letter!");
            }
            Err(GameError::DuplicateGuess(letter)) => {
                self.feedback = Feedback::warning(format!(
                    "You already guessed '{}'. Try a different letter!",
                    letter
                ));
            }
            Err(e) => {
                self.feedback = Feedback::warning(e.to_string());
            }
        }
    }

    /// Record the finished round and persist the stats.
    fn finish_round(&mut self) {
        let status = self.session.status();

        if let Err(e) = self.tracker.record_outcome(status) {
            tracing::error!(error = %e, "finished round could not be recorded");
        }

        match self.storage.save(&self.tracker.stats()) {
            Ok(()) => {
                tracing::info!(location = %self.storage.location(), "stats saved");
                self.save_warning = None;
            }
            Err(e) => {
                tracing::warn!(
                    location = %self.storage.location(),
                    error = %e,
                    "could not save stats"
                );
                self.save_warning = Some(SAVE_WARNING.to_string());
            }
        }

        tracing::info!(outcome = ?status, word = %self.session.secret_word(), "round finished");
        self.screen = Screen::RoundOver;
    }

    fn submit_round_over(&mut self, line: &str) {
        match Answer::parse(line) {
            Some(Answer::Yes) => self.new_round(),
            Some(Answer::No) => self.quit(),
            None => {
                self.feedback = Feedback::warning("Please enter 'y' for yes or 'n' for no.");
            }
        }
    }

    /// Start a fresh round with a new word.
    pub fn new_round(&mut self) {
        match GameSession::from_source(&*self.words, &mut *self.rng) {
            Ok(session) => {
                tracing::info!(word_length = session.secret_word().len(), "round started");
                self.session = session;
                self.screen = Screen::Playing;
                self.feedback = Feedback::default();
                self.input.clear();
            }
            Err(e) => {
                tracing::error!(error = %e, "could not start a new round");
                self.feedback = Feedback::bad(e.to_string());
            }
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn tracker(&self) -> &StatsTracker {
        &self.tracker
    }

    /// Hint for the current word
    pub fn hint(&self) -> &str {
        hint_for(&*self.words, self.session.secret_word())
    }

    /// Category label for the current word list
    pub fn category(&self) -> &str {
        self.words.category()
    }
}
