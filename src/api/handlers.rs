use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::data::QuoteRecord;
use crate::query::{AnimeQuote, CharacterQuote, QueryEngine};

/// Application state shared across handlers
pub struct AppState {
    pub engine: QueryEngine,
}

// ============================================================================
// Health Check
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ============================================================================
// Random Quote
// ============================================================================

pub async fn random_quote(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QuoteRecord>, ApiError> {
    let record = state
        .engine
        .random_quote()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(record))
}

// ============================================================================
// Filters
// ============================================================================

#[derive(Deserialize)]
pub struct AnimeParams {
    pub anime: Option<String>,
}

#[derive(Serialize)]
pub struct AnimeQuotesResponse {
    pub anime: String,
    pub quotes: Vec<AnimeQuote>,
    pub quote_count: usize,
}

pub async fn quotes_by_anime(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnimeParams>,
) -> Result<Json<AnimeQuotesResponse>, ApiError> {
    let anime = params
        .anime
        .ok_or_else(|| ApiError::BadRequest("Anime name is required".to_string()))?;

    let quotes = state.engine.quotes_by_anime(&anime);

    Ok(Json(AnimeQuotesResponse {
        anime,
        quote_count: quotes.len(),
        quotes,
    }))
}

#[derive(Deserialize)]
pub struct CharacterParams {
    pub character: Option<String>,
}

#[derive(Serialize)]
pub struct CharacterQuotesResponse {
    pub character: String,
    pub quotes: Vec<CharacterQuote>,
    pub quote_count: usize,
}

pub async fn quotes_by_character(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CharacterParams>,
) -> Result<Json<CharacterQuotesResponse>, ApiError> {
    let character = params
        .character
        .ok_or_else(|| ApiError::BadRequest("Character name is required".to_string()))?;

    let quotes = state.engine.quotes_by_character(&character);

    Ok(Json(CharacterQuotesResponse {
        character,
        quote_count: quotes.len(),
        quotes,
    }))
}

// ============================================================================
// Animes & Stats
// ============================================================================

#[derive(Serialize)]
pub struct AnimesResponse {
    pub animes: Vec<String>,
    pub total_anime_count: usize,
}

pub async fn list_animes(State(state): State<Arc<AppState>>) -> Json<AnimesResponse> {
    let animes = state.engine.unique_animes();

    Json(AnimesResponse {
        total_anime_count: animes.len(),
        animes,
    })
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_quotes: usize,
    pub total_unique_animes: usize,
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let stats = state.engine.stats();

    Json(StatsResponse {
        total_quotes: stats.total_quotes,
        total_unique_animes: stats.total_unique_animes,
    })
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}
