//! Genre handlers

use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, (StatusCode, &'static str)> {
    let genres = state.catalog.genres();

    if genres.is_empty() {
        return Err((StatusCode::NOT_FOUND, "No genres available"));
    }

    Ok(Json(genres.to_vec()))
}
