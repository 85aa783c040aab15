//! Request handlers and wire-format error mapping.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::error::AnalysisError;
use crate::server::AppState;

/// Body of `POST /api/analyze-text`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The text to analyze. A missing field behaves like empty text.
    #[serde(default)]
    pub text: Option<String>,
}

/// Query parameters of `GET /api/search-term`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The term to look up.
    #[serde(default)]
    pub term: String,
}

/// `POST /api/analyze-text`
pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "invalid request format",
                "INVALID_JSON",
                &format!("the request body must be valid JSON - {}", rejection.body_text()),
            );
        }
    };

    let text = request.text.unwrap_or_default();
    match state.analyzer.analyze(&text).await {
        Ok(report) => Json(report).into_response(),
        Err(err) => err.into_response(),
    }
}

/// `GET /api/search-term?term=...`
pub async fn search_term(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    if params.term.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "the search term must not be empty" })),
        )
            .into_response();
    }

    Json(state.cache.search(&params.term)).into_response()
}

/// `GET /api/health`
pub async fn health() -> Response {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
    }))
    .into_response()
}

/// `GET /`
pub async fn root_info() -> Response {
    Json(json!({
        "message": "Sentinela text analysis API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /api/analyze-text": "Analyze a text: word statistics + sentiment",
            "GET /api/search-term": "Look a term up in the last analysis",
            "GET /api/health": "Health check",
        },
    }))
    .into_response()
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "route not found" })),
    )
        .into_response()
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        match &self {
            AnalysisError::InvalidInput => error_response(
                StatusCode::BAD_REQUEST,
                "text must not be empty",
                self.code(),
                "the 'text' field is required and must contain at least 1 character",
            ),
            AnalysisError::PayloadTooLarge { max, .. } => error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                "text too long",
                self.code(),
                &format!("the text must be at most {max} characters long"),
            ),
            // Remote failures are absorbed before reaching handlers; both
            // remaining kinds surface as a generic internal error with no
            // internal state attached.
            AnalysisError::RemoteClassifier(_) | AnalysisError::Internal(_) => {
                error!("internal error while processing request: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "an internal error occurred while processing the text",
                        "code": "INTERNAL_SERVER_ERROR",
                        "timestamp": Utc::now(),
                    })),
                )
                    .into_response()
            }
        }
    }
}

/// Builds a `{ error, code, details }` validation-failure response.
fn error_response(status: StatusCode, message: &str, code: &str, details: &str) -> Response {
    (
        status,
        Json(json!({
            "error": message,
            "code": code,
            "details": details,
        })),
    )
        .into_response()
}
