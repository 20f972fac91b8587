//! Student dashboard and the student's own records

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};

use crate::http::error::ApiError;
use crate::http::extractors::UserId;
use crate::http::guard::require_student;
use crate::http::server::AppState;
use crate::views;

/// GET /studentdashboard
async fn dashboard(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> Result<Html<String>, ApiError> {
    let student = require_student(&state, user_id).await?;
    Ok(Html(views::dashboards::student_dashboard(&student)))
}

/// GET /sd_disciplineincidents
async fn incidents(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> Result<Html<String>, ApiError> {
    let student = require_student(&state, user_id).await?;
    let incidents = state
        .incidents()
        .list_by_student(&student.id.to_string())
        .await?;

    Ok(Html(views::dashboards::student_incidents(&student, &incidents)))
}

/// GET /sd_viewdisciplineactions
async fn actions(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> Result<Html<String>, ApiError> {
    let student = require_student(&state, user_id).await?;
    let actions = state
        .actions()
        .list_by_student(&student.id.to_string())
        .await?;

    Ok(Html(views::dashboards::student_actions(&student, &actions)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/studentdashboard", get(dashboard))
        .route("/sd_disciplineincidents", get(incidents))
        .route("/sd_viewdisciplineactions", get(actions))
}
