//! Review clock: five fixed levels with escalating intervals.
//!
//! A correct answer moves a word one level up (capped at the top level), a
//! wrong answer drops it back to level 1. The next due time is always
//! `now + interval(new level)`.

use chrono::{DateTime, Duration, Utc};

use crate::types::{ReviewState, Word, MAX_LEVEL, MIN_LEVEL};

/// Interval table with one entry per level.
#[derive(Debug, Clone)]
pub struct ReviewClock {
    pub intervals: [Duration; MAX_LEVEL as usize],
}

impl Default for ReviewClock {
    fn default() -> Self {
        Self {
            intervals: [
                Duration::seconds(10),
                Duration::minutes(1),
                Duration::minutes(10),
                Duration::hours(1),
                Duration::days(1),
            ],
        }
    }
}

impl ReviewClock {
    /// Interval for `level`; levels outside the table use the first interval.
    pub fn interval_for(&self, level: u8) -> Duration {
        level
            .checked_sub(MIN_LEVEL)
            .and_then(|idx| self.intervals.get(idx as usize))
            .copied()
            .unwrap_or(self.intervals[0])
    }

    /// Next scheduling state after an answer. A level outside the table counts
    /// as the first level.
    pub fn advance(&self, level: u8, was_correct: bool, now: DateTime<Utc>) -> ReviewState {
        let level = if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            level
        } else {
            MIN_LEVEL
        };
        let new_level = if was_correct {
            (level + 1).min(MAX_LEVEL)
        } else {
            MIN_LEVEL
        };

        ReviewState {
            level: new_level,
            due_at: Some(now + self.interval_for(new_level)),
        }
    }

    /// Copy of `word` with the outcome recorded: counter bumped and review
    /// state advanced.
    pub fn apply_answer(&self, word: &Word, was_correct: bool, now: DateTime<Utc>) -> Word {
        let mut updated = word.clone();
        if was_correct {
            updated.stats.correct = updated.stats.correct.saturating_add(1);
        } else {
            updated.stats.wrong = updated.stats.wrong.saturating_add(1);
        }
        updated.review = self.advance(word.review.level, was_correct, now);
        updated
    }
}

/// [`ReviewClock::advance`] with the standard interval table.
pub fn advance(level: u8, was_correct: bool, now: DateTime<Utc>) -> ReviewState {
    ReviewClock::default().advance(level, was_correct, now)
}

/// [`ReviewClock::apply_answer`] with the standard interval table.
pub fn apply_answer(word: &Word, was_correct: bool, now: DateTime<Utc>) -> Word {
    ReviewClock::default().apply_answer(word, was_correct, now)
}
