use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kamus_core::{LookupResult, Word};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::state::AppState;

/// Body of every word-carrying POST. Missing and `null` both mean "".
#[derive(Debug, Default, Deserialize)]
pub struct WordRequest {
    #[serde(default)]
    pub word: Option<String>,
}

impl WordRequest {
    fn word(&self) -> &str {
        self.word.as_deref().unwrap_or_default()
    }
}

#[derive(Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<String>,
}

#[derive(Serialize)]
pub struct FavoritesUpdate {
    pub success: bool,
    pub favorites: Vec<String>,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub history: Vec<Word>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
}

/// Body that could not be read as JSON at all
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

fn parse_body(payload: Result<Json<WordRequest>, JsonRejection>) -> Result<WordRequest, ApiError> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            tracing::debug!("rejected request body: {}", rejection.body_text());
            Err(rejection.into())
        }
    }
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<WordRequest>, JsonRejection>,
) -> Result<Json<LookupResult>, ApiError> {
    let request = parse_body(payload)?;
    Ok(Json(state.service.search(request.word()).await))
}

pub async fn list_favorites(State(state): State<Arc<AppState>>) -> Json<FavoritesResponse> {
    Json(FavoritesResponse {
        favorites: state.service.favorites().await,
    })
}

pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<WordRequest>, JsonRejection>,
) -> Result<Json<FavoritesUpdate>, ApiError> {
    let request = parse_body(payload)?;
    let favorites = state.service.add_favorite(request.word()).await;

    Ok(Json(FavoritesUpdate {
        success: true,
        favorites,
    }))
}

pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<WordRequest>, JsonRejection>,
) -> Result<Json<FavoritesUpdate>, ApiError> {
    let request = parse_body(payload)?;
    let favorites = state.service.remove_favorite(request.word()).await;

    Ok(Json(FavoritesUpdate {
        success: true,
        favorites,
    }))
}

pub async fn history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        history: state.service.history().await,
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: format!("{} is running!", state.config.service_name),
    })
}
