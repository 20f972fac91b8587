//! Discipline incident input

use super::validation::required;
use super::ValidationError;

const MAX_FIELD_LEN: usize = 128;
const MAX_DESCRIPTION_LEN: usize = 4000;

/// Validated fields for reporting an incident.
///
/// `student_id` is free text: it is not checked against the students
/// table. `committee_member_id` must already be resolved to a committee
/// member by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIncident {
    pub student_id: String,
    pub student_name: String,
    pub class_name: String,
    pub department: String,
    pub committee_member_id: Option<i64>,
    pub incident_date: String,
    pub description: String,
}

impl NewIncident {
    pub fn new(
        student_id: &str,
        student_name: &str,
        class_name: &str,
        department: &str,
        committee_member_id: Option<i64>,
        incident_date: &str,
        description: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            student_id: required("student id", student_id, MAX_FIELD_LEN)?,
            student_name: required("student name", student_name, MAX_FIELD_LEN)?,
            class_name: required("class", class_name, MAX_FIELD_LEN)?,
            department: required("department", department, MAX_FIELD_LEN)?,
            committee_member_id,
            incident_date: required("incident date", incident_date, MAX_FIELD_LEN)?,
            description: required("description", description, MAX_DESCRIPTION_LEN)?,
        })
    }
}

/// Parse the committee member field of the incident form.
///
/// Blank means unassigned. Anything else must be a positive integer;
/// whether it names a committee member is checked against storage later.
pub fn parse_committee_member_id(raw: &str) -> Result<Option<i64>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Ok(Some(id)),
        _ => Err(ValidationError::InvalidCommitteeMember {
            value: raw.to_owned(),
        }),
    }
}
