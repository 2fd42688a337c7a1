//! SQLite schema definitions.

/// Complete schema for the word store.
///
/// `position` keeps insertion order; `id` is the public word identifier.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS words (
    position INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    primary_text TEXT NOT NULL DEFAULT '',
    target_text TEXT NOT NULL DEFAULT '',
    transcription TEXT NOT NULL DEFAULT '',
    correct_count INTEGER NOT NULL DEFAULT 0,
    wrong_count INTEGER NOT NULL DEFAULT 0,
    level INTEGER NOT NULL DEFAULT 1,
    due_at TEXT
);

CREATE INDEX IF NOT EXISTS idx_words_due ON words(due_at);
"#;
