#![allow(dead_code)]
//! Lifetime statistics and streak tracking
//!
//! This module provides:
//! - The flat [`Stats`] record that gets persisted between runs
//! - [`StatsTracker`], which applies finished-round outcomes to it
//!
//! Streak rules:
//! - A win extends the current streak and may raise the best streak
//! - A loss resets the current streak; the best streak is kept

use crate::game::{GameError, GameStatus};
use serde::{Deserialize, Serialize};

/// Persisted counters, stored with these exact field names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl Stats {
    /// Check the counter invariants.
    ///
    /// A record failing this is treated the same as a corrupt file.
    pub fn is_consistent(&self) -> bool {
        self.games_won <= self.games_played
            && self.current_streak <= self.best_streak
            && self.current_streak <= self.games_won
            && self.best_streak <= self.games_won
    }
}

/// Applies round outcomes to the lifetime counters.
#[derive(Debug, Clone, Default)]
pub struct StatsTracker {
    stats: Stats,
}

impl StatsTracker {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        StatsTracker::default()
    }

    /// Create a tracker from whatever storage returned; absent means zeros.
    pub fn from_loaded(stats: Option<Stats>) -> Self {
        StatsTracker {
            stats: stats.unwrap_or_default(),
        }
    }

    /// Record the outcome of a finished round.
    ///
    /// Must be called exactly once per finished round; repeated calls for the
    /// same round are counted again.
    pub fn record_outcome(&mut self, status: GameStatus) -> Result<(), GameError> {
        match status {
            GameStatus::Playing => {
                return Err(GameError::InvalidInput(
                    "cannot record an unfinished game".to_string(),
                ));
            }
            GameStatus::Won => {
                self.stats.games_won = self.stats.games_won.saturating_add(1);
                self.stats.current_streak = self.stats.current_streak.saturating_add(1);
                self.stats.best_streak = self.stats.best_streak.max(self.stats.current_streak);
            }
            GameStatus::Lost => {
                self.stats.current_streak = 0;
            }
        }

        self.stats.games_played = self.stats.games_played.saturating_add(1);

        tracing::info!(
            outcome = ?status,
            games_played = self.stats.games_played,
            current_streak = self.stats.current_streak,
            "outcome recorded"
        );

        Ok(())
    }

    /// Fraction of games won, in `[0, 1]`. Zero when nothing was played.
    pub fn win_rate(&self) -> f64 {
        self.stats.games_won as f64 / self.stats.games_played.max(1) as f64
    }

    /// Win rate as a percentage, for display.
    pub fn win_percentage(&self) -> f64 {
        self.win_rate() * 100.0
    }

    /// Snapshot of the counters (for saving).
    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn games_played(&self) -> u32 {
        self.stats.games_played
    }

    pub fn games_won(&self) -> u32 {
        self.stats.games_won
    }

    pub fn current_streak(&self) -> u32 {
        self.stats.current_streak
    }

    pub fn best_streak(&self) -> u32 {
        self.stats.best_streak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_tracker_is_zeroed() {
        let tracker = StatsTracker::new();
        assert_eq!(tracker.stats(), Stats::default());
        assert_eq!(tracker.win_rate(), 0.0);
    }

    #[test]
    fn test_absent_load_is_zeroed() {
        let tracker = StatsTracker::from_loaded(None);
        assert_eq!(tracker.stats(), Stats::default());
    }

    #[test]
    fn test_loaded_stats_are_kept() {
        let stats = Stats {
            games_played: 10,
            games_won: 7,
            current_streak: 2,
            best_streak: 4,
        };
        let tracker = StatsTracker::from_loaded(Some(stats));
        assert_eq!(tracker.stats(), stats);
        assert!((tracker.win_rate() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_win_win_loss_scenario() {
        let mut tracker = StatsTracker::new();
        tracker.record_outcome(GameStatus::Won).unwrap();
        tracker.record_outcome(GameStatus::Won).unwrap();
        tracker.record_outcome(GameStatus::Lost).unwrap();

        assert_eq!(tracker.games_played(), 3);
        assert_eq!(tracker.games_won(), 2);
        assert_eq!(tracker.current_streak(), 0);
        assert_eq!(tracker.best_streak(), 2);
    }

    #[test]
    fn test_playing_is_rejected() {
        let mut tracker = StatsTracker::new();
        assert!(matches!(
            tracker.record_outcome(GameStatus::Playing),
            Err(GameError::InvalidInput(_))
        ));
        assert_eq!(tracker.stats(), Stats::default());
    }

    #[test]
    fn test_streak_rebuilds_after_loss() {
        let mut tracker = StatsTracker::new();
        for status in [
            GameStatus::Won,
            GameStatus::Won,
            GameStatus::Won,
            GameStatus::Lost,
            GameStatus::Won,
        ] {
            tracker.record_outcome(status).unwrap();
        }
        assert_eq!(tracker.current_streak(), 1);
        assert_eq!(tracker.best_streak(), 3);
    }

    #[test]
    fn test_counters_are_additive_and_best_never_drops() {
        let mut tracker = StatsTracker::new();
        let outcomes = [true, false, true, true, false, false, true, true, true, false];
        let mut best = 0;

        for won in outcomes {
            let status = if won { GameStatus::Won } else { GameStatus::Lost };
            tracker.record_outcome(status).unwrap();

            assert!(tracker.best_streak() >= best);
            assert!(tracker.best_streak() >= tracker.current_streak());
            assert!(tracker.stats().is_consistent());
            best = tracker.best_streak();
        }

        let wins = outcomes.iter().filter(|&&w| w).count() as u32;
        assert_eq!(tracker.games_played(), outcomes.len() as u32);
        assert_eq!(tracker.games_won(), wins);
        assert_eq!(tracker.best_streak(), 3);
    }

    #[test]
    fn test_win_rate_bounds() {
        let mut tracker = StatsTracker::new();
        tracker.record_outcome(GameStatus::Won).unwrap();
        assert_eq!(tracker.win_rate(), 1.0);
        tracker.record_outcome(GameStatus::Lost).unwrap();
        assert_eq!(tracker.win_rate(), 0.5);
        assert_eq!(tracker.win_percentage(), 50.0);
    }

    #[test]
    fn test_counters_stop_at_max() {
        let full = Stats {
            games_played: u32::MAX,
            games_won: u32::MAX,
            current_streak: u32::MAX,
            best_streak: u32::MAX,
        };
        let mut tracker = StatsTracker::from_loaded(Some(full));

        tracker.record_outcome(GameStatus::Won).unwrap();
        assert_eq!(tracker.stats(), full);

        tracker.record_outcome(GameStatus::Lost).unwrap();
        assert_eq!(tracker.games_played(), u32::MAX);
        assert_eq!(tracker.current_streak(), 0);
        assert!(tracker.stats().is_consistent());
    }

    #[test]
    fn test_consistency_check() {
        assert!(Stats::default().is_consistent());
        assert!(!Stats {
            games_played: 1,
            games_won: 2,
            current_streak: 0,
            best_streak: 0,
        }
        .is_consistent());
        assert!(!Stats {
            games_played: 5,
            games_won: 3,
            current_streak: 3,
            best_streak: 2,
        }
        .is_consistent());
    }

    #[test]
    fn test_stats_json_field_names() {
        let stats = Stats {
            games_played: 3,
            games_won: 2,
            current_streak: 0,
            best_streak: 2,
        };
        let value = serde_json::to_value(stats).unwrap();
        assert_eq!(value["games_played"], 3);
        assert_eq!(value["games_won"], 2);
        assert_eq!(value["current_streak"], 0);
        assert_eq!(value["best_streak"], 2);
    }
}
