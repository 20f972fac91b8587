//! Committee dashboard, assigned incidents and action assignment

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use super::{see_other, write_failure};
use crate::db::{Incident, StaffMember};
use crate::http::error::ApiError;
use crate::http::extractors::{parse_user_id, FlashParams, UserId};
use crate::http::guard::require_staff;
use crate::http::server::AppState;
use crate::models::{NewAction, Role};
use crate::views::{self, Notice};

/// Action assignment form, shared by both committee pages.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ActionForm {
    pub user_id: Option<String>,
    pub incident_id: String,
    pub student_id: String,
    pub action_description: String,
    pub assigned_date: String,
}

/// Which committee page a submission came from.
#[derive(Debug, Clone, Copy)]
enum ActionPage {
    Incidents,
    Assign,
}

impl ActionPage {
    fn path(self) -> &'static str {
        match self {
            Self::Incidents => "/cd_disciplineincidents",
            Self::Assign => "/cd_assignactions",
        }
    }

    fn render(self, staff: &StaffMember, incidents: &[Incident], notice: Notice<'_>) -> String {
        match self {
            Self::Incidents => views::actions::committee_incidents(staff, incidents, notice),
            Self::Assign => views::actions::assign_actions(staff, incidents, notice),
        }
    }
}

/// GET /committeedashboard
async fn dashboard(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Query(params): Query<FlashParams>,
) -> Result<Html<String>, ApiError> {
    let staff = require_staff(&state, user_id, Role::Committee).await?;
    Ok(Html(views::dashboards::staff_dashboard(&staff, params.notice())))
}

async fn show_page(
    state: &AppState,
    user_id: i64,
    params: &FlashParams,
    page: ActionPage,
) -> Result<Html<String>, ApiError> {
    let staff = require_staff(state, user_id, Role::Committee).await?;
    let incidents = state.incidents().list_by_committee_member(staff.id).await?;
    Ok(Html(page.render(&staff, &incidents, params.notice())))
}

/// GET /cd_disciplineincidents
async fn assigned_incidents(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Query(params): Query<FlashParams>,
) -> Result<Html<String>, ApiError> {
    show_page(&state, user_id, &params, ActionPage::Incidents).await
}

/// GET /cd_assignactions
async fn assign_form(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Query(params): Query<FlashParams>,
) -> Result<Html<String>, ApiError> {
    show_page(&state, user_id, &params, ActionPage::Assign).await
}

/// Create an action for one of the caller's incidents and redirect back.
///
/// Incidents assigned to someone else, or to nobody, are refused.
async fn submit_action(
    state: &AppState,
    form: ActionForm,
    page: ActionPage,
) -> Result<Response, ApiError> {
    let user_id = parse_user_id(form.user_id.as_deref())?;
    let staff = require_staff(state, user_id, Role::Committee).await?;
    let incidents = state.incidents().list_by_committee_member(staff.id).await?;

    let result = NewAction::new(
        &form.incident_id,
        &form.student_id,
        &form.action_description,
        &form.assigned_date,
    );

    let (status, error) = match result {
        Ok(new) if !incidents.iter().any(|i| i.id == new.incident_id) => {
            tracing::warn!(
                user_id,
                incident_id = new.incident_id,
                "Action for unassigned incident"
            );
            (
                StatusCode::BAD_REQUEST,
                format!(
                    "Error assigning action: incident {} is not assigned to you",
                    new.incident_id
                ),
            )
        }
        Ok(new) => match state.actions().create(&new).await {
            Ok(action) => {
                tracing::info!(
                    id = action.id,
                    incident_id = action.incident_id,
                    assigned_by = user_id,
                    "Action assigned"
                );
                let message = "Action assigned successfully";
                let redirect = see_other(page.path(), Some(user_id), message);
                return Ok(redirect.into_response());
            }
            Err(e) => write_failure("Error assigning action", e),
        },
        Err(e) => (StatusCode::BAD_REQUEST, format!("Error assigning action: {e}")),
    };

    let html = page.render(&staff, &incidents, Notice::error(&error));
    Ok((status, Html(html)).into_response())
}

/// POST /cd_assign_action
async fn assign_inline(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ActionForm>,
) -> Result<Response, ApiError> {
    submit_action(&state, form, ActionPage::Incidents).await
}

/// POST /cd_assignactions
async fn assign_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ActionForm>,
) -> Result<Response, ApiError> {
    submit_action(&state, form, ActionPage::Assign).await
}

/// GET /cd_disciplineactions
async fn all_actions(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Query(params): Query<FlashParams>,
) -> Result<Html<String>, ApiError> {
    let staff = require_staff(&state, user_id, Role::Committee).await?;
    let actions = state.actions().list().await?;
    let html = views::dashboards::actions_overview(&staff, &actions, params.notice());
    Ok(Html(html))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/committeedashboard", get(dashboard))
        .route("/cd_disciplineincidents", get(assigned_incidents))
        .route("/cd_assign_action", post(assign_inline))
        .route("/cd_assignactions", get(assign_form).post(assign_submit))
        .route("/cd_disciplineactions", get(all_actions))
}
