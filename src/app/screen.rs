//! Application screen state
//!
//! Handles transitions between:
//! - Playing a round
//! - The statistics panel (opened mid-round)
//! - End of round results and the play-again prompt

/// The current application screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Playing,
    Stats,
    RoundOver,
}

impl Screen {
    /// Footer help text for this screen
    pub fn help(&self) -> &'static str {
        match self {
            Screen::Playing => "Letter + Enter to guess  hint  stats  quit  Esc Quit",
            Screen::Stats => "Enter/Esc Back to game",
            Screen::RoundOver => "y + Enter Play again  n + Enter Exit  Esc Quit",
        }
    }
}

/// How a feedback line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Good,
    Bad,
    Warning,
}

/// Message shown under the input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub tone: Tone,
}

impl Default for Feedback {
    fn default() -> Self {
        Self::neutral("")
    }
}

impl Feedback {
    pub fn neutral(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Neutral,
        }
    }

    pub fn good(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Good,
        }
    }

    pub fn bad(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Bad,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Warning,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
