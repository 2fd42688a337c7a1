//! Statistics endpoints

use axum::{extract::State, Json};
use vocab_core::{collection_accuracy, CollectionAccuracy};

use crate::error::Result;
use crate::AppState;

/// GET /api/stats
pub async fn summary(State(state): State<AppState>) -> Result<Json<CollectionAccuracy>> {
    let dictionary = state.dictionary()?;
    Ok(Json(collection_accuracy(dictionary.words())))
}
