//! Principal dashboard

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{FlashParams, UserId};
use crate::http::guard::require_staff;
use crate::http::server::AppState;
use crate::models::Role;
use crate::views::{self, Notice};

/// GET /principaldashboard
async fn dashboard(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Query(flash): Query<FlashParams>,
) -> Result<Html<String>, ApiError> {
    let staff = require_staff(&state, user_id, Role::Principal).await?;
    let notice = flash.notice();
    Ok(Html(views::dashboards::staff_dashboard(&staff, notice)))
}

/// GET /pd_disciplineactions
async fn actions(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> Result<Html<String>, ApiError> {
    let staff = require_staff(&state, user_id, Role::Principal).await?;
    let actions = state.actions().list().await?;
    Ok(Html(views::dashboards::actions_overview(&staff, &actions, Notice::none())))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/principaldashboard", get(dashboard))
        .route("/pd_disciplineactions", get(actions))
}
