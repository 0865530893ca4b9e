//! Movie handlers

use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use marquee_types::{MovieWithDirector, NewMovie};
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
pub struct MoviesQuery {
    genre: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MoviesQuery>,
) -> Result<Json<Vec<MovieWithDirector>>, (StatusCode, String)> {
    // An empty `?genre=` means no filter, same as omitting it entirely.
    let genre = query.genre.as_deref().filter(|g| !g.is_empty());

    match state.catalog.query_movies(genre) {
        Ok(movies) => Ok(Json(movies)),
        Err(e) => {
            debug!("Movie query failed: {}", e);
            Err((StatusCode::NOT_FOUND, e.to_string()))
        }
    }
}

pub async fn add(
    State(state): State<AppState>,
    payload: Result<Json<NewMovie>, JsonRejection>,
) -> (StatusCode, &'static str) {
    // A body that is not valid JSON gets the same answer as a missing field.
    let Ok(Json(input)) = payload else {
        warn!("Rejected add-movie request with unparseable body");
        return (StatusCode::BAD_REQUEST, "Invalid movie data");
    };

    match state.catalog.add_movie(input) {
        Ok(()) => (StatusCode::CREATED, "Movie added successfully"),
        Err(e) => {
            warn!("Rejected add-movie request: {}", e);
            (StatusCode::BAD_REQUEST, "Invalid movie data")
        }
    }
}
