//! Hangman figure, one drawing per incorrect guess

use crate::game::MAX_ATTEMPTS;

const STAGES: [&str; MAX_ATTEMPTS as usize + 1] = [
    r"   ┌───┐
   │   │
       │
       │
       │
       │
=========",
    r"   ┌───┐
   │   │
   O   │
       │
       │
       │
=========",
    r"   ┌───┐
   │   │
   O   │
   │   │
       │
       │
=========",
    r"   ┌───┐
   │   │
   O   │
  /│   │
       │
       │
=========",
    r"   ┌───┐
   │   │
   O   │
  /│\  │
       │
       │
=========",
    r"   ┌───┐
   │   │
   O   │
  /│\  │
  /    │
       │
=========",
    r"   ┌───┐
   │   │
   O   │
  /│\  │
  / \  │
       │
=========",
];

/// Drawing for the given number of incorrect guesses (clamped to the last stage).
pub fn stage(wrong_guesses: u8) -> &'static str {
    let index = (wrong_guesses as usize).min(STAGES.len() - 1);
    STAGES[index]
}

/// Height of every drawing, in lines
pub fn height() -> u16 {
    STAGES[0].lines().count() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_stage_per_attempt() {
        assert_eq!(STAGES.len(), MAX_ATTEMPTS as usize + 1);
    }

    #[test]
    fn test_stages_have_equal_height() {
        for drawing in STAGES {
            assert_eq!(drawing.lines().count() as u16, height());
        }
    }

    #[test]
    fn test_empty_gallows_then_full_figure() {
        assert!(!stage(0).contains('O'));
        assert!(stage(1).contains('O'));
        assert!(stage(6).contains("/ \\"));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(stage(200), stage(MAX_ATTEMPTS));
    }
}
