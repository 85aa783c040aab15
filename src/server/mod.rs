//! HTTP surface for the analysis service.

mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::analysis::{AnalysisCache, Analyzer};
use crate::config::Config;
use crate::error::Result;

/// Application state shared across handlers.
pub struct AppState {
    /// The analysis orchestrator.
    pub analyzer: Analyzer,
    /// Single-slot cache backing the term-search endpoint.
    pub cache: Arc<AnalysisCache>,
}

impl AppState {
    /// Builds the state: one cache, one analyzer wired to it.
    pub fn new(config: &Config) -> Result<Self> {
        let cache = Arc::new(AnalysisCache::new());
        let analyzer = Analyzer::new(config, Arc::clone(&cache))?;
        Ok(Self { analyzer, cache })
    }
}

/// Creates the application router.
///
/// # Routes
/// - `GET /` - Service name, version, and endpoint directory
/// - `POST /api/analyze-text` - Analyze a text: word statistics + sentiment
/// - `GET /api/search-term?term=...` - Look a term up in the last analysis
/// - `GET /api/health` - Health check
pub fn create_router(state: Arc<AppState>) -> Router {
    // Permissive CORS for browser clients.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root_info))
        .route("/api/analyze-text", post(handlers::analyze_text))
        .route("/api/search-term", get(handlers::search_term))
        .route("/api/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
