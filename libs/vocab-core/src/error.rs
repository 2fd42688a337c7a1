//! Error types for vocab-core.

use thiserror::Error;

/// Reasons a question cannot be built right now.
///
/// Both variants are recoverable: callers show an idle or "come back later"
/// state instead of aborting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("the word collection is empty")]
    EmptyCollection,

    #[error("no words are due for review")]
    NothingDueNow,
}

/// Errors raised while constructing or editing a word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("{field} text must not be empty")]
    EmptyText { field: &'static str },
}
