//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};
use vocab_core::{
    word_accuracy, Direction, Question, QuizMode, Response, SelectionError, Word, WordId,
};

use crate::services::dictionary::AnswerOutcome;

// ============================================================================
// Words
// ============================================================================

/// Body for creating or editing a word.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WordInput {
    pub primary_text: String,
    pub target_text: String,
    #[serde(default)]
    pub transcription: String,
}

/// Word with its derived accuracy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordView {
    #[serde(flatten)]
    pub word: Word,
    pub accuracy_percent: u32,
}

impl From<&Word> for WordView {
    fn from(word: &Word) -> Self {
        Self {
            accuracy_percent: word_accuracy(word),
            word: word.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: usize,
    pub total: usize,
}

// ============================================================================
// Study
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuestionRequest {
    pub mode: QuizMode,
}

/// Either a question or the reason there is none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuestionResponse {
    Ready {
        question: Question,
        /// Text to show, from the side the direction starts on.
        prompt: String,
    },
    EmptyCollection,
    NothingDue,
}

impl From<Result<Question, SelectionError>> for QuestionResponse {
    fn from(result: Result<Question, SelectionError>) -> Self {
        match result {
            Ok(question) => Self::Ready {
                prompt: question.word.prompt_text(question.direction).to_string(),
                question,
            },
            Err(SelectionError::EmptyCollection) => Self::EmptyCollection,
            Err(SelectionError::NothingDueNow) => Self::NothingDue,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswerRequest {
    pub word_id: WordId,
    pub direction: Direction,
    pub response: Response,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub correct: bool,
    pub expected: String,
    /// Target-side text for the client's speech synthesis.
    pub pronounce: String,
    pub word: WordView,
}

impl From<AnswerOutcome> for AnswerResponse {
    fn from(outcome: AnswerOutcome) -> Self {
        Self {
            correct: outcome.evaluation.correct,
            expected: outcome.evaluation.expected,
            pronounce: outcome.word.target_text.clone(),
            word: WordView::from(&outcome.word),
        }
    }
}
