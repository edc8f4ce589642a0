//! Parsing of submitted input lines

/// What a line typed during play asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that isn't a keyword is treated as a guess
    Guess(String),
    Hint,
    Stats,
    Quit,
}

impl Command {
    /// Parse a submitted line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let command = match line.to_ascii_lowercase().as_str() {
            "quit" | "exit" => Command::Quit,
            "hint" => Command::Hint,
            "stats" => Command::Stats,
            _ => Command::Guess(line.to_string()),
        };

        Some(command)
    }
}

/// Answer to the "play again?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Accepts y/yes/n/no in any case; anything else is `None`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Some(Answer::Yes),
            "n" | "no" => Some(Answer::No),
            _ => None,
        }
    }
}
