//! The in-memory word collection and everything that mutates it.
//!
//! One `Dictionary` owns the collection, the store it writes through to and
//! the random source. The server keeps it behind a single mutex, so review
//! updates for a word are applied one at a time.

use chrono::{DateTime, Utc};
use rand_chacha::ChaCha8Rng;
use vocab_core::{
    apply_answer, build_question, evaluate, Direction, Evaluation, Question, QuizMode, Response,
    SelectionError, Word, WordId, WordRecord,
};

use crate::db::WordStore;
use crate::error::{ApiError, Result};

/// Result of answering a question.
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    pub evaluation: Evaluation,
    /// Word state after the review clock ran.
    pub word: Word,
}

pub struct Dictionary {
    words: Vec<Word>,
    store: Box<dyn WordStore + Send>,
    rng: ChaCha8Rng,
}

impl Dictionary {
    /// Load the whole collection from `store`.
    pub fn load(store: Box<dyn WordStore + Send>, rng: ChaCha8Rng) -> Result<Self> {
        let words: Vec<Word> = store
            .load_all()?
            .into_iter()
            .map(Word::from_record)
            .collect();

        tracing::info!(count = words.len(), "Loaded word collection");

        Ok(Self { words, store, rng })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn position(&self, id: &WordId) -> Result<usize> {
        self.words
            .iter()
            .position(|w| &w.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("word {}", id)))
    }

    pub fn add(&mut self, primary_text: &str, target_text: &str, transcription: &str) -> Result<Word> {
        let word = Word::new(primary_text, target_text, transcription)?;
        self.store.insert(&word)?;
        tracing::info!(id = %word.id, "Added word");
        self.words.push(word.clone());
        Ok(word)
    }

    pub fn edit(
        &mut self,
        id: &WordId,
        primary_text: &str,
        target_text: &str,
        transcription: &str,
    ) -> Result<Word> {
        let idx = self.position(id)?;
        let edited = self.words[idx].edit(primary_text, target_text, transcription)?;
        self.store.update(&edited)?;
        tracing::info!(id = %id, "Edited word");
        self.words[idx] = edited.clone();
        Ok(edited)
    }

    pub fn delete(&mut self, id: &WordId) -> Result<()> {
        let idx = self.position(id)?;
        self.store.delete(id)?;
        self.words.remove(idx);
        tracing::info!(id = %id, "Deleted word");
        Ok(())
    }

    /// Add or replace words from raw records. Records whose id is already
    /// present overwrite that word; the rest are appended.
    pub fn import(&mut self, records: Vec<WordRecord>) -> Result<usize> {
        let mut imported = 0;
        for record in records {
            let word = Word::from_record(record);
            match self.words.iter().position(|w| w.id == word.id) {
                Some(idx) => {
                    self.store.update(&word)?;
                    self.words[idx] = word;
                }
                None => {
                    self.store.insert(&word)?;
                    self.words.push(word);
                }
            }
            imported += 1;
        }
        tracing::info!(imported, total = self.words.len(), "Imported words");
        Ok(imported)
    }

    /// Pick the next question for `mode`.
    pub fn next_question(
        &mut self,
        mode: QuizMode,
        now: DateTime<Utc>,
    ) -> std::result::Result<Question, SelectionError> {
        let result = build_question(&self.words, mode, now, &mut self.rng);
        match &result {
            Ok(question) => tracing::debug!(
                mode = mode.as_str(),
                id = %question.word.id,
                direction = question.direction.as_str(),
                "Built question"
            ),
            Err(reason) => tracing::debug!(mode = mode.as_str(), %reason, "No question"),
        }
        result
    }

    /// Check an answer, then record the outcome on the word and persist it.
    pub fn answer(
        &mut self,
        id: &WordId,
        direction: Direction,
        response: &Response,
        now: DateTime<Utc>,
    ) -> Result<AnswerOutcome> {
        let idx = self.position(id)?;
        let evaluation = evaluate(&self.words[idx], direction, response);
        let updated = apply_answer(&self.words[idx], evaluation.correct, now);

        self.store.update(&updated)?;
        self.words[idx] = updated.clone();

        tracing::info!(
            id = %id,
            correct = evaluation.correct,
            level = updated.review.level,
            "Recorded answer"
        );

        Ok(AnswerOutcome {
            evaluation,
            word: updated,
        })
    }
}
