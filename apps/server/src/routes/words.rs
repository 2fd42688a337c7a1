//! Word management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use vocab_core::{WordId, WordRecord};

use crate::error::Result;
use crate::models::{ImportResponse, WordInput, WordView};
use crate::AppState;

/// GET /api/words
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<WordView>>> {
    let dictionary = state.dictionary()?;
    Ok(Json(dictionary.words().iter().map(WordView::from).collect()))
}

/// POST /api/words
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<WordInput>,
) -> Result<(StatusCode, Json<WordView>)> {
    let mut dictionary = state.dictionary()?;
    let word = dictionary.add(
        &payload.primary_text,
        &payload.target_text,
        &payload.transcription,
    )?;
    Ok((StatusCode::CREATED, Json(WordView::from(&word))))
}

/// PUT /api/words/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<WordInput>,
) -> Result<Json<WordView>> {
    let mut dictionary = state.dictionary()?;
    let word = dictionary.edit(
        &WordId::from(id),
        &payload.primary_text,
        &payload.target_text,
        &payload.transcription,
    )?;
    Ok(Json(WordView::from(&word)))
}

/// DELETE /api/words/:id
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let mut dictionary = state.dictionary()?;
    dictionary.delete(&WordId::from(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/words/import
pub async fn import(
    State(state): State<AppState>,
    Json(records): Json<Vec<WordRecord>>,
) -> Result<Json<ImportResponse>> {
    let mut dictionary = state.dictionary()?;
    let imported = dictionary.import(records)?;
    Ok(Json(ImportResponse {
        imported,
        total: dictionary.len(),
    }))
}
