//! Accuracy figures derived from the answer counters.

use serde::{Deserialize, Serialize};

use crate::types::Word;

/// Totals over a whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionAccuracy {
    pub total_correct: u64,
    pub total_wrong: u64,
    pub total_answers: u64,
    pub accuracy_percent: u32,
}

/// Rounded percentage of correct answers; 0 when there are none.
pub fn accuracy_percent(correct: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 * 100.0 / total as f64).round() as u32
}

pub fn word_accuracy(word: &Word) -> u32 {
    let correct = u64::from(word.stats.correct);
    accuracy_percent(correct, correct + u64::from(word.stats.wrong))
}

pub fn collection_accuracy(words: &[Word]) -> CollectionAccuracy {
    let (total_correct, total_wrong) = words.iter().fold((0u64, 0u64), |(c, w), word| {
        (c + u64::from(word.stats.correct), w + u64::from(word.stats.wrong))
    });
    let total_answers = total_correct + total_wrong;

    CollectionAccuracy {
        total_correct,
        total_wrong,
        total_answers,
        accuracy_percent: accuracy_percent(total_correct, total_answers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordStats;
    use pretty_assertions::assert_eq;

    fn with_stats(correct: u32, wrong: u32) -> Word {
        let mut word = Word::new("a", "b", "").unwrap();
        word.stats = WordStats { correct, wrong };
        word
    }

    #[test]
    fn untouched_word_is_zero() {
        assert_eq!(word_accuracy(&with_stats(0, 0)), 0);
    }

    #[test]
    fn word_accuracy_rounds() {
        assert_eq!(word_accuracy(&with_stats(3, 1)), 75);
        assert_eq!(word_accuracy(&with_stats(1, 2)), 33);
        assert_eq!(word_accuracy(&with_stats(2, 1)), 67);
        assert_eq!(word_accuracy(&with_stats(1, 7)), 13);
        assert_eq!(word_accuracy(&with_stats(5, 0)), 100);
    }

    #[test]
    fn collection_sums_counters() {
        let words = vec![with_stats(3, 1), with_stats(0, 0)];
        assert_eq!(
            collection_accuracy(&words),
            CollectionAccuracy {
                total_correct: 3,
                total_wrong: 1,
                total_answers: 4,
                accuracy_percent: 75,
            }
        );
    }

    #[test]
    fn empty_collection_is_zero() {
        assert_eq!(collection_accuracy(&[]), CollectionAccuracy::default());
    }

    #[test]
    fn large_counters_do_not_overflow() {
        let words = vec![with_stats(u32::MAX, 0), with_stats(u32::MAX, 0)];
        let totals = collection_accuracy(&words);
        assert_eq!(totals.total_correct, 2 * u64::from(u32::MAX));
        assert_eq!(totals.accuracy_percent, 100);
    }
}
