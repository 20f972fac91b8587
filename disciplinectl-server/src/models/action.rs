//! Disciplinary action input

use super::validation::required;
use super::ValidationError;

const MAX_FIELD_LEN: usize = 128;
const MAX_DESCRIPTION_LEN: usize = 4000;

/// Validated fields for assigning an action to a reviewed incident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAction {
    pub incident_id: i64,
    pub student_id: String,
    pub action_description: String,
    pub assigned_date: String,
}

impl NewAction {
    pub fn new(
        incident_id: &str,
        student_id: &str,
        action_description: &str,
        assigned_date: &str,
    ) -> Result<Self, ValidationError> {
        let incident_id = incident_id
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidFormat {
                field: "incident id",
                reason: "must be a number",
            })?;

        Ok(Self {
            incident_id,
            student_id: required("student id", student_id, MAX_FIELD_LEN)?,
            action_description: required(
                "action description",
                action_description,
                MAX_DESCRIPTION_LEN,
            )?,
            assigned_date: required("assigned date", assigned_date, MAX_FIELD_LEN)?,
        })
    }
}
