//! Request handlers
//!
//! Every page render reads the clock afresh, so the copyright year rolls
//! over without a restart.

use axum::{extract::State, http::Uri, response::Html, Json};
use serde::Serialize;

use super::error::ServerError;
use super::state::AppState;
use crate::clock::current_year;

/// Response body for `/api/year`
#[derive(Debug, Serialize)]
pub struct YearResponse {
    pub year: i32,
}

/// GET / and /index.html - the full page
pub async fn index(State(state): State<AppState>) -> Html<String> {
    tracing::debug!("Rendering page");
    Html(state.render_page())
}

/// GET /api/year - the year the contact section currently displays
pub async fn year(State(state): State<AppState>) -> Json<YearResponse> {
    Json(YearResponse {
        year: current_year(state.clock.as_ref()),
    })
}

/// GET /healthz - liveness check
pub async fn healthz() -> &'static str {
    "ok"
}

/// Fallback for every unmatched path
pub(crate) async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
