//! Study endpoints

use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::Result;
use crate::models::{AnswerRequest, AnswerResponse, QuestionRequest, QuestionResponse};
use crate::AppState;

/// POST /api/study/question
///
/// An empty collection or an empty adaptive pool is a normal answer, not an
/// error: the client shows its idle state.
pub async fn question(
    State(state): State<AppState>,
    Json(payload): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>> {
    let mut dictionary = state.dictionary()?;
    let result = dictionary.next_question(payload.mode, Utc::now());
    Ok(Json(QuestionResponse::from(result)))
}

/// POST /api/study/answer
pub async fn answer(
    State(state): State<AppState>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>> {
    let mut dictionary = state.dictionary()?;
    let outcome = dictionary.answer(
        &payload.word_id,
        payload.direction,
        &payload.response,
        Utc::now(),
    )?;
    Ok(Json(AnswerResponse::from(outcome)))
}
