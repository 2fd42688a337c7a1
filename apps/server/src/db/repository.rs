//! Repository pattern for word storage.

use crate::db::error::DbError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;
use vocab_core::types::{ReviewState, Word, WordId, WordRecord, WordStats};

type Result<T> = std::result::Result<T, DbError>;

/// Storage collaborator for the word collection.
///
/// The dictionary loads everything once at startup and afterwards writes
/// every mutation through.
pub trait WordStore {
    fn load_all(&self) -> Result<Vec<WordRecord>>;
    fn insert(&self, word: &Word) -> Result<()>;
    fn update(&self, word: &Word) -> Result<()>;
    fn delete(&self, id: &WordId) -> Result<()>;
}

/// SQLite implementation of [`WordStore`].
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        Ok(())
    }

    /// Number of stored words.
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Row as read from SQLite, before validation.
struct WordRow {
    id: String,
    primary_text: String,
    target_text: String,
    transcription: String,
    correct_count: i64,
    wrong_count: i64,
    level: i64,
    due_at: Option<String>,
}

impl WordRow {
    fn into_record(self) -> Result<WordRecord> {
        let due_at = self
            .due_at
            .as_deref()
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw)
                    .map(|d| d.with_timezone(&Utc))
                    .map_err(|e| {
                        DbError::InvalidData(format!("due_at {:?} for word {}: {}", raw, self.id, e))
                    })
            })
            .transpose()?;

        Ok(WordRecord {
            id: Some(self.id),
            primary_text: Some(self.primary_text),
            target_text: Some(self.target_text),
            transcription: Some(self.transcription),
            stats: Some(WordStats {
                correct: clamp_count(self.correct_count),
                wrong: clamp_count(self.wrong_count),
            }),
            review: Some(ReviewState {
                // out-of-range levels are clamped by Word::from_record
                level: self.level.clamp(0, i64::from(u8::MAX)) as u8,
                due_at,
            }),
        })
    }
}

fn clamp_count(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

fn format_due(word: &Word) -> Option<String> {
    word.review.due_at.map(|d| d.to_rfc3339())
}

impl WordStore for SqliteRepository {
    fn load_all(&self) -> Result<Vec<WordRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, primary_text, target_text, transcription, correct_count, wrong_count, level, due_at
             FROM words ORDER BY position",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(WordRow {
                    id: row.get(0)?,
                    primary_text: row.get(1)?,
                    target_text: row.get(2)?,
                    transcription: row.get(3)?,
                    correct_count: row.get(4)?,
                    wrong_count: row.get(5)?,
                    level: row.get(6)?,
                    due_at: row.get(7)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(WordRow::into_record).collect()
    }

    fn insert(&self, word: &Word) -> Result<()> {
        self.conn.execute(
            "INSERT INTO words (id, primary_text, target_text, transcription, correct_count, wrong_count, level, due_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                word.id.as_str(),
                word.primary_text,
                word.target_text,
                word.transcription,
                i64::from(word.stats.correct),
                i64::from(word.stats.wrong),
                i64::from(word.review.level),
                format_due(word),
            ],
        )?;
        Ok(())
    }

    fn update(&self, word: &Word) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE words SET primary_text = ?2, target_text = ?3, transcription = ?4,
                correct_count = ?5, wrong_count = ?6, level = ?7, due_at = ?8
             WHERE id = ?1",
            params![
                word.id.as_str(),
                word.primary_text,
                word.target_text,
                word.transcription,
                i64::from(word.stats.correct),
                i64::from(word.stats.wrong),
                i64::from(word.review.level),
                format_due(word),
            ],
        )?;
        if changed == 0 {
            return Err(DbError::WordNotFound(word.id.to_string()));
        }
        Ok(())
    }

    fn delete(&self, id: &WordId) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM words WHERE id = ?1", params![id.as_str()])?;
        if changed == 0 {
            return Err(DbError::WordNotFound(id.to_string()));
        }
        Ok(())
    }
}
