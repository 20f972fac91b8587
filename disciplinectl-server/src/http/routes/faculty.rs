//! Faculty dashboard and incident reporting

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use super::see_other;
use crate::db::StaffMember;
use crate::http::error::{ApiError, INTERNAL};
use crate::http::extractors::{parse_user_id, FlashParams, UserId};
use crate::http::guard::require_staff;
use crate::http::server::AppState;
use crate::models::{parse_committee_member_id, NewIncident, Role, ValidationError};
use crate::views::{self, incidents::IncidentFields, Notice};

/// Incident report form. `user_id` travels as a hidden field.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IncidentForm {
    pub user_id: Option<String>,
    pub student_id: String,
    pub student_name: String,
    pub class_name: String,
    pub department: String,
    pub committee_member_id: String,
    pub incident_date: String,
    pub description: String,
}

impl IncidentForm {
    fn fields(&self) -> IncidentFields<'_> {
        IncidentFields {
            student_id: &self.student_id,
            student_name: &self.student_name,
            class_name: &self.class_name,
            department: &self.department,
            committee_member_id: &self.committee_member_id,
            incident_date: &self.incident_date,
            description: &self.description,
        }
    }
}

/// Field checks plus the committee lookup.
///
/// The committee id must name an existing staff row with the committee role.
async fn validate_incident(state: &AppState, form: &IncidentForm) -> Result<NewIncident, ApiError> {
    let committee_member_id = parse_committee_member_id(&form.committee_member_id)?;

    if let Some(id) = committee_member_id {
        if state.staff().find_committee_member(id).await?.is_none() {
            return Err(ValidationError::InvalidCommitteeMember {
                value: form.committee_member_id.clone(),
            }
            .into());
        }
    }

    Ok(NewIncident::new(
        &form.student_id,
        &form.student_name,
        &form.class_name,
        &form.department,
        committee_member_id,
        &form.incident_date,
        &form.description,
    )?)
}

async fn render_form(
    state: &AppState,
    staff: &StaffMember,
    fields: IncidentFields<'_>,
    notice: Notice<'_>,
) -> Result<String, ApiError> {
    let students = state.students().list().await?;
    let committee = state.staff().list_by_role(Role::Committee).await?;
    Ok(views::incidents::faculty_incident_page(
        staff, &students, &committee, fields, notice,
    ))
}

/// GET /facultydashboard
async fn dashboard(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Query(flash): Query<FlashParams>,
) -> Result<Html<String>, ApiError> {
    let staff = require_staff(&state, user_id, Role::Faculty).await?;
    let notice = flash.notice();
    Ok(Html(views::dashboards::staff_dashboard(&staff, notice)))
}

/// GET /fd_disciplineincidents
async fn incident_form(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Query(flash): Query<FlashParams>,
) -> Result<Html<String>, ApiError> {
    let staff = require_staff(&state, user_id, Role::Faculty).await?;
    let notice = flash.notice();
    let html = render_form(&state, &staff, IncidentFields::default(), notice).await?;
    Ok(Html(html))
}

/// POST /fd_submit_incident
async fn submit_incident(
    State(state): State<Arc<AppState>>,
    Form(form): Form<IncidentForm>,
) -> Result<Response, ApiError> {
    let user_id = parse_user_id(form.user_id.as_deref())?;
    let staff = require_staff(&state, user_id, Role::Faculty).await?;

    let new = match validate_incident(&state, &form).await {
        Ok(new) => new,
        Err(ApiError::Validation(e)) => {
            tracing::warn!(user_id, error = %e, "Incident rejected");
            let message = format!("Validation error: {e}");
            let html = render_form(&state, &staff, form.fields(), Notice::error(&message)).await?;
            return Ok((StatusCode::BAD_REQUEST, Html(html)).into_response());
        }
        Err(e) => return Err(e),
    };

    match state.incidents().create(&new).await {
        Ok(incident) => {
            tracing::info!(
                id = incident.id,
                reported_by = user_id,
                committee_member_id = ?incident.committee_member_id,
                "Incident reported"
            );
            let message = "Incident reported successfully";
            Ok(see_other("/fd_disciplineincidents", Some(user_id), message).into_response())
        }
        Err(e) => {
            tracing::error!(user_id, error = %e, "Failed to record incident");
            let message = format!("Error reporting incident: {INTERNAL}");
            let html = render_form(&state, &staff, form.fields(), Notice::error(&message)).await?;
            Ok((StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response())
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/facultydashboard", get(dashboard))
        .route("/fd_disciplineincidents", get(incident_form))
        .route("/fd_submit_incident", post(submit_incident))
}
