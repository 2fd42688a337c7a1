//! Question selection: word pick, direction, and multiple-choice options.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SelectionError;
use crate::types::{Direction, QuizMode, Word};

/// Number of slots in a multiple-choice question.
pub const OPTION_COUNT: usize = 4;

/// Filler for slots that no real answer could fill.
pub const PLACEHOLDER: &str = "—";

/// Filler used instead when the correct answer is itself [`PLACEHOLDER`].
pub const ALT_PLACEHOLDER: &str = "——";

/// A question ready to be shown. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub word: Word,
    pub mode: QuizMode,
    pub direction: Direction,
    /// Present only for [`QuizMode::MultipleChoice`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Build the next question for `mode`.
///
/// Adaptive review only considers words that are due at `now`. Picks are
/// uniform and independent, so the same word may come up twice in a row.
pub fn build_question<R: Rng + ?Sized>(
    words: &[Word],
    mode: QuizMode,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Question, SelectionError> {
    if words.is_empty() {
        return Err(SelectionError::EmptyCollection);
    }

    let pool: Vec<&Word> = match mode {
        QuizMode::AdaptiveReview => words.iter().filter(|w| w.review.is_due(now)).collect(),
        _ => words.iter().collect(),
    };

    let word = *pool.choose(rng).ok_or(SelectionError::NothingDueNow)?;
    let direction = Direction::random(rng);

    let options = match mode {
        QuizMode::MultipleChoice => Some(assemble_options(word, words, direction, rng)),
        _ => None,
    };

    Ok(Question {
        word: word.clone(),
        mode,
        direction,
        options,
    })
}

/// Four shuffled options: the canonical answer plus up to three distinct
/// distractors from the other words, padded with [`PLACEHOLDER`] (or
/// [`ALT_PLACEHOLDER`] when the correct answer is the placeholder).
pub fn assemble_options<R: Rng + ?Sized>(
    word: &Word,
    words: &[Word],
    direction: Direction,
    rng: &mut R,
) -> Vec<String> {
    let correct = word.canonical_answer(direction);
    let filler = filler_for(&correct);

    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(correct);

    let mut pool: Vec<String> = words
        .iter()
        .filter(|other| other.id != word.id)
        .map(|other| other.canonical_answer(direction))
        .collect();

    while options.len() < OPTION_COUNT && !pool.is_empty() {
        let idx = rng.gen_range(0..pool.len());
        let candidate = pool.swap_remove(idx);
        if candidate != filler && !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    options.resize(OPTION_COUNT, filler.to_string());
    options.shuffle(rng);
    options
}

/// Padding token that can never be mistaken for `correct`.
fn filler_for(correct: &str) -> &'static str {
    if correct == PLACEHOLDER {
        ALT_PLACEHOLDER
    } else {
        PLACEHOLDER
    }
}
