//! Test fixtures and factory functions for creating test data.

use chrono::{Duration, Utc};
use serde_json::{json, Value};
use vocab_core::{ReviewState, WordRecord, WordStats};

/// Body for POST/PUT /api/words.
pub fn word_input(primary: &str, target: &str, transcription: &str) -> Value {
    json!({
        "primary_text": primary,
        "target_text": target,
        "transcription": transcription,
    })
}

/// Raw record with a fixed id.
pub fn record(id: &str, primary: &str, target: &str) -> WordRecord {
    WordRecord {
        id: Some(id.to_string()),
        primary_text: Some(primary.to_string()),
        target_text: Some(target.to_string()),
        ..Default::default()
    }
}

/// Record with answer counters.
pub fn record_with_stats(id: &str, correct: u32, wrong: u32) -> WordRecord {
    WordRecord {
        stats: Some(WordStats { correct, wrong }),
        ..record(id, &format!("слово {}", id), &format!("מילה {}", id))
    }
}

/// Record that is not due for another hour.
pub fn scheduled_record(id: &str, primary: &str, target: &str) -> WordRecord {
    WordRecord {
        review: Some(ReviewState {
            level: 4,
            due_at: Some(Utc::now() + Duration::hours(1)),
        }),
        ..record(id, primary, target)
    }
}

/// A small Russian-Hebrew vocabulary.
pub fn sample_records() -> Vec<WordRecord> {
    vec![
        record("1", "дом, здание", "בית"),
        record("2", "кот", "חתול"),
        record("3", "собака", "כלב"),
        record("4", "вода", "מים"),
        record("5", "хлеб", "לחם"),
    ]
}

/// Body for POST /api/study/answer.
pub fn answer_request(word_id: &str, direction: &str, response: Value) -> Value {
    json!({
        "word_id": word_id,
        "direction": direction,
        "response": response,
    })
}
