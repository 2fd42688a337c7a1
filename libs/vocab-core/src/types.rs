//! Core types for the vocabulary drill.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::WordError;
use crate::normalize::{normalize, variants_or_fallback};

/// Lowest proficiency level.
pub const MIN_LEVEL: u8 = 1;

/// Highest proficiency level.
pub const MAX_LEVEL: u8 = 5;

/// Opaque word identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(String);

impl WordId {
    /// Fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for WordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cumulative answer counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    pub correct: u32,
    pub wrong: u32,
}

/// Scheduling state of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewState {
    pub level: u8,
    /// `None` means the word has never been scheduled and is due immediately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<Utc>>,
}

impl Default for ReviewState {
    fn default() -> Self {
        Self {
            level: MIN_LEVEL,
            due_at: None,
        }
    }
}

impl ReviewState {
    /// Whether the word may be shown in adaptive review at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_at.map_or(true, |due| due <= now)
    }

    /// Same state with the level forced into the valid range.
    pub fn clamped(self) -> Self {
        Self {
            level: self.level.clamp(MIN_LEVEL, MAX_LEVEL),
            due_at: self.due_at,
        }
    }
}

/// Which side is shown as the prompt and which is expected as the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    PrimaryToTarget,
    TargetToPrimary,
}

impl Direction {
    /// Fair coin flip between the two directions.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Self::PrimaryToTarget
        } else {
            Self::TargetToPrimary
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrimaryToTarget => "primary_to_target",
            Self::TargetToPrimary => "target_to_primary",
        }
    }
}

/// Quiz modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    /// Free-text answer.
    Input,
    /// Pick one of four options.
    MultipleChoice,
    /// Self-graded card flip.
    Flashcard,
    /// Free-text answer restricted to words that are due.
    AdaptiveReview,
}

impl QuizMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::MultipleChoice => "multiple_choice",
            Self::Flashcard => "flashcard",
            Self::AdaptiveReview => "adaptive_review",
        }
    }
}

/// Raw word record as delivered by a word store.
///
/// Every field is optional; [`Word::from_record`] fills in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub primary_text: Option<String>,
    #[serde(default)]
    pub target_text: Option<String>,
    #[serde(default)]
    pub transcription: Option<String>,
    #[serde(default)]
    pub stats: Option<WordStats>,
    #[serde(default)]
    pub review: Option<ReviewState>,
}

/// A vocabulary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub primary_text: String,
    pub target_text: String,
    pub transcription: String,
    pub primary_variants: Vec<String>,
    pub target_variants: Vec<String>,
    pub stats: WordStats,
    pub review: ReviewState,
}

impl Word {
    /// Build a brand new word, due immediately.
    pub fn new(
        primary_text: &str,
        target_text: &str,
        transcription: &str,
    ) -> Result<Self, WordError> {
        ensure_not_blank(primary_text, "primary")?;
        ensure_not_blank(target_text, "target")?;

        Ok(Self::assemble(
            WordId::generate(),
            primary_text.to_string(),
            target_text.to_string(),
            transcription.to_string(),
            WordStats::default(),
            ReviewState::default(),
        ))
    }

    /// Map a store record into a word. Never fails: missing texts become empty
    /// strings and a missing id is generated.
    pub fn from_record(record: WordRecord) -> Self {
        let id = record
            .id
            .filter(|id| !id.is_empty())
            .map(WordId::from)
            .unwrap_or_else(WordId::generate);

        Self::assemble(
            id,
            record.primary_text.unwrap_or_default(),
            record.target_text.unwrap_or_default(),
            record.transcription.unwrap_or_default(),
            record.stats.unwrap_or_default(),
            record.review.unwrap_or_default().clamped(),
        )
    }

    /// Replace the texts, keeping id, stats and review state.
    pub fn edit(
        &self,
        primary_text: &str,
        target_text: &str,
        transcription: &str,
    ) -> Result<Self, WordError> {
        ensure_not_blank(primary_text, "primary")?;
        ensure_not_blank(target_text, "target")?;

        Ok(Self::assemble(
            self.id.clone(),
            primary_text.to_string(),
            target_text.to_string(),
            transcription.to_string(),
            self.stats,
            self.review,
        ))
    }

    fn assemble(
        id: WordId,
        primary_text: String,
        target_text: String,
        transcription: String,
        stats: WordStats,
        review: ReviewState,
    ) -> Self {
        Self {
            primary_variants: variants_or_fallback(&primary_text),
            target_variants: variants_or_fallback(&target_text),
            id,
            primary_text,
            target_text,
            transcription,
            stats,
            review,
        }
    }

    /// Text shown to the learner.
    pub fn prompt_text(&self, direction: Direction) -> &str {
        match direction {
            Direction::PrimaryToTarget => &self.primary_text,
            Direction::TargetToPrimary => &self.target_text,
        }
    }

    /// Raw text of the side the learner must produce.
    pub fn answer_text(&self, direction: Direction) -> &str {
        match direction {
            Direction::PrimaryToTarget => &self.target_text,
            Direction::TargetToPrimary => &self.primary_text,
        }
    }

    /// Accepted variants for the answer side. Falls back to the normalized
    /// answer text when the stored list is empty.
    pub fn accepted_answers(&self, direction: Direction) -> Vec<String> {
        let variants = match direction {
            Direction::PrimaryToTarget => &self.target_variants,
            Direction::TargetToPrimary => &self.primary_variants,
        };
        if variants.is_empty() {
            vec![normalize(self.answer_text(direction))]
        } else {
            variants.clone()
        }
    }

    /// First accepted variant; the only value multiple-choice counts as correct.
    pub fn canonical_answer(&self, direction: Direction) -> String {
        let variants = match direction {
            Direction::PrimaryToTarget => &self.target_variants,
            Direction::TargetToPrimary => &self.primary_variants,
        };
        variants
            .first()
            .cloned()
            .unwrap_or_else(|| normalize(self.answer_text(direction)))
    }
}

fn ensure_not_blank(text: &str, field: &'static str) -> Result<(), WordError> {
    if text.trim().is_empty() {
        Err(WordError::EmptyText { field })
    } else {
        Ok(())
    }
}
