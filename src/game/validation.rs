//! Guess and word validation
//!
//! Normalizes raw player input into a single uppercase letter, and checks
//! candidate secret words before a session is built from them.

use super::error::{GameError, Result};

/// Normalize a guess to one uppercase ASCII letter.
///
/// Surrounding whitespace is ignored. Anything other than exactly one
/// alphabetic character is rejected.
pub fn normalize_guess(input: &str) -> Result<char> {
    let mut chars = input.trim().chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(GameError::Validation {
            input: input.to_string(),
        }),
    }
}

/// Upper-case a candidate secret word, rejecting empty or non-letter words.
pub fn normalize_word(word: &str) -> Result<String> {
    let word = word.trim();

    if word.is_empty() {
        return Err(GameError::InvalidInput("secret word is empty".to_string()));
    }

    if let Some(bad) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(GameError::InvalidInput(format!(
            "secret word {:?} contains non-letter {:?}",
            word, bad
        )));
    }

    Ok(word.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_is_uppercased() {
        assert_eq!(normalize_guess("a"), Ok('A'));
        assert_eq!(normalize_guess("Q"), Ok('Q'));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(normalize_guess("  m \n"), Ok('M'));
    }

    #[test]
    fn test_rejects_non_letters() {
        for input in ["", " ", "ab", "1", "?", "é", "a b"] {
            assert!(
                matches!(normalize_guess(input), Err(GameError::Validation { .. })),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_validation_error_keeps_raw_input() {
        assert_eq!(
            normalize_guess("xy"),
            Err(GameError::Validation {
                input: "xy".to_string()
            })
        );
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("mango").unwrap(), "MANGO");
        assert_eq!(normalize_word(" Lemon ").unwrap(), "LEMON");
    }

    #[test]
    fn test_normalize_word_rejects_bad_words() {
        assert!(matches!(normalize_word(""), Err(GameError::InvalidInput(_))));
        assert!(matches!(normalize_word("ice cream"), Err(GameError::InvalidInput(_))));
        assert!(matches!(normalize_word("x-ray"), Err(GameError::InvalidInput(_))));
    }
}
