use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use super::AppState;
use crate::{
    error::{AppError, AppResult},
    models::{
        Recommendation, RecommendationQuery, RecommendationRequest, RecommendationState,
        SelectionOptions,
    },
};

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Preset moods, genres and regions for the selection screens
pub async fn get_options() -> Json<SelectionOptions> {
    Json(SelectionOptions::default())
}

/// Fetches a new recommendation and stores it as the current one
///
/// The session lock is released while the upstream call is in flight, so
/// overlapping requests each resolve the slot when they finish.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Recommendation>> {
    let query = RecommendationQuery::try_from(request)?;

    tracing::info!(
        mood = %query.mood,
        genre = %query.genre,
        region = %query.region,
        "Processing recommendation request"
    );

    state.inner.write().await.current.begin();

    let outcome = state.recommender.fetch(&query).await;

    state.inner.write().await.current.resolve(&outcome);

    outcome.map(Json)
}

/// The current recommendation slot
pub async fn get_current(State(state): State<AppState>) -> Json<RecommendationState> {
    let inner = state.inner.read().await;
    Json(inner.current.clone())
}

pub async fn get_favorites(State(state): State<AppState>) -> Json<Vec<Recommendation>> {
    let inner = state.inner.read().await;
    Json(inner.favorites.list().to_vec())
}

/// Adds a recommendation to favorites; 201 when new, 200 when already kept
pub async fn add_favorite(
    State(state): State<AppState>,
    Json(recommendation): Json<Recommendation>,
) -> AppResult<(StatusCode, Json<Vec<Recommendation>>)> {
    if recommendation.movie_name().trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Movie name cannot be empty".to_string(),
        ));
    }

    let mut inner = state.inner.write().await;
    let inserted = inner.favorites.add(recommendation);
    let status = if inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(inner.favorites.list().to_vec())))
}

/// Favorites whatever recommendation is currently on screen
pub async fn add_current_favorite(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Recommendation>>)> {
    let mut inner = state.inner.write().await;
    let current = inner
        .current
        .recommendation()
        .cloned()
        .ok_or_else(|| AppError::Conflict("No recommendation is ready".to_string()))?;

    tracing::debug!(movie_name = %current.movie_name(), "Favoriting current recommendation");

    let status = if inner.favorites.add(current) {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(inner.favorites.list().to_vec())))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    Json(recommendation): Json<Recommendation>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let mut inner = state.inner.write().await;
    if inner.favorites.remove(&recommendation) == 0 {
        return Err(AppError::NotFound(format!(
            "{} is not in favorites",
            recommendation.movie_name()
        )));
    }

    Ok(Json(inner.favorites.list().to_vec()))
}
