//! Vocabulary drill engine.
//!
//! Provides:
//! - Answer normalization and comma-separated variant parsing
//! - A five-level review clock with fixed escalating intervals
//! - Question selection for input, multiple-choice, flashcard and adaptive
//!   review modes, with an injected random source
//! - Answer evaluation and accuracy statistics
//!
//! Every operation takes the current collection and `now` as arguments and
//! returns new values; nothing here keeps state between calls.

pub mod error;
pub mod evaluate;
pub mod normalize;
pub mod schedule;
pub mod selector;
pub mod stats;
pub mod types;

pub use error::{SelectionError, WordError};
pub use evaluate::{evaluate, evaluate_choice, evaluate_typed, Evaluation, Response};
pub use normalize::{normalize, parse_variants};
pub use schedule::{advance, apply_answer, ReviewClock};
pub use selector::{
    assemble_options, build_question, Question, ALT_PLACEHOLDER, OPTION_COUNT, PLACEHOLDER,
};
pub use stats::{collection_accuracy, word_accuracy, CollectionAccuracy};
pub use types::{
    Direction, QuizMode, ReviewState, Word, WordId, WordRecord, WordStats, MAX_LEVEL, MIN_LEVEL,
};
