//! Admin dashboard and the incident overview

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::views;

/// GET /admindashboard
async fn dashboard() -> Html<String> {
    Html(views::admin::dashboard())
}

/// GET /disciplineincidents - every reported incident
async fn discipline_incidents(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    let incidents = state.incidents().list().await?;
    Ok(Html(views::admin::discipline_incidents(&incidents)))
}

/// Admin routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admindashboard", get(dashboard))
        .route("/disciplineincidents", get(discipline_incidents))
}
