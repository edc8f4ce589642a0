//! Word source for new sessions
//!
//! Ships the built-in "Fruits & Tech" word list and a hint table keyed by
//! the uppercase word.

use once_cell::sync::Lazy;
use rand::seq::IndexedRandom;
use rand::RngCore;
use std::collections::HashMap;

/// Category shown alongside the built-in words
pub const CATEGORY: &str = "Fruits & Tech";

/// Hint shown for words missing from the hint table
pub const FALLBACK_HINT: &str = "It's a word with letters!";

/// Built-in candidate words
pub const DEFAULT_WORDS: [&str; 15] = [
    "apple",
    "banana",
    "cherry",
    "mango",
    "grapes",
    "orange",
    "lemon",
    "peach",
    "berry",
    "melon",
    "python",
    "programming",
    "computer",
    "software",
    "technology",
];

static HINTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("APPLE", "A red or green fruit that keeps doctors away"),
        ("BANANA", "A yellow curved fruit loved by monkeys"),
        ("CHERRY", "Small red fruit often used in desserts"),
        ("MANGO", "Sweet tropical fruit with orange flesh"),
        ("GRAPES", "Small fruits that grow in bunches"),
        ("ORANGE", "Citrus fruit that shares its name with a color"),
        ("LEMON", "Sour yellow citrus fruit"),
        ("PEACH", "Fuzzy fruit with a pit in the center"),
        ("BERRY", "Small, round fruit often found in pies"),
        ("MELON", "Large, round fruit with sweet flesh"),
        ("PYTHON", "A programming language named after a snake"),
        ("PROGRAMMING", "The art of writing code"),
        ("COMPUTER", "Electronic device for processing data"),
        ("SOFTWARE", "Programs and applications for computers"),
        ("TECHNOLOGY", "Modern tools and digital innovations"),
    ])
});

/// Supplies secret words (and optionally hints) to new sessions.
pub trait WordSource {
    /// Pick one candidate word, or `None` if the source has nothing to offer.
    fn provide_word(&self, rng: &mut dyn RngCore) -> Option<String>;

    /// Hint text for an uppercase secret word.
    fn hint(&self, _word: &str) -> Option<&str> {
        None
    }

    /// Category label for display.
    fn category(&self) -> &str {
        ""
    }
}

/// A fixed in-memory word list.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    category: String,
}

impl WordList {
    /// Create a word list from arbitrary words.
    pub fn new<I, S>(words: I, category: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            category: category.into(),
        }
    }

    /// The candidate words.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS, CATEGORY)
    }
}

impl WordSource for WordList {
    fn provide_word(&self, rng: &mut dyn RngCore) -> Option<String> {
        self.words.choose(rng).cloned()
    }

    fn hint(&self, word: &str) -> Option<&str> {
        HINTS.get(word).copied()
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// Hint for `word` from `source`, falling back to the generic hint.
pub fn hint_for<'a>(source: &'a dyn WordSource, word: &str) -> &'a str {
    source.hint(word).unwrap_or(FALLBACK_HINT)
}
