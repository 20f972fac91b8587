//! Incident tables and the faculty reporting form

use std::fmt::Write;

use super::{attr, esc, layout, link, options, Notice};
use crate::db::{Incident, StaffMember, Student};

/// Raw values of the incident form, re-filled after a rejected submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncidentFields<'a> {
    pub student_id: &'a str,
    pub student_name: &'a str,
    pub class_name: &'a str,
    pub department: &'a str,
    pub committee_member_id: &'a str,
    pub incident_date: &'a str,
    pub description: &'a str,
}

pub fn incidents_table(incidents: &[Incident]) -> String {
    if incidents.is_empty() {
        return r#"<p class="empty">No incidents recorded.</p>"#.to_string();
    }

    let mut rows = String::new();
    for i in incidents {
        let committee = i
            .committee_member_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unassigned".to_string());
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            i.id,
            esc(&i.student_id),
            esc(&i.student_name),
            esc(&i.class_name),
            esc(&i.department),
            esc(&committee),
            esc(&i.incident_date),
            esc(&i.description),
        );
    }

    format!(
        r#"<table>
<thead><tr><th>ID</th><th>Student ID</th><th>Student</th><th>Class</th><th>Department</th><th>Committee member</th><th>Date</th><th>Description</th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
    )
}

/// Faculty page: report form listing students and committee members.
pub fn faculty_incident_page(
    staff: &StaffMember,
    students: &[Student],
    committee: &[StaffMember],
    fields: IncidentFields<'_>,
    notice: Notice<'_>,
) -> String {
    let student_options = options(
        students
            .iter()
            .map(|s| (s.id.to_string(), format!("{} ({})", s.name, s.id))),
        fields.student_id,
    );
    let mut committee_options = String::from(r#"<option value="">Unassigned</option>"#);
    committee_options.push_str(&options(
        committee.iter().map(|c| (c.id.to_string(), c.name.clone())),
        fields.committee_member_id,
    ));
    // Rejected values stay selected.
    let raw = fields.committee_member_id;
    if !raw.trim().is_empty() && !committee.iter().any(|c| c.id.to_string() == raw) {
        let _ = write!(
            committee_options,
            r#"<option value="{}" selected>{}</option>"#,
            attr(raw),
            esc(raw)
        );
    }

    layout(
        "Report Discipline Incident",
        notice,
        &format!(
            r#"<form method="post" action="/fd_submit_incident">
<input type="hidden" name="user_id" value="{user_id}">
<label>Student ID <input name="student_id" value="{student_id}" list="students" required></label>
<datalist id="students">{student_options}</datalist>
<label>Student name <input name="student_name" value="{student_name}" required></label>
<label>Class <input name="class_name" value="{class_name}" required></label>
<label>Department <input name="department" value="{department}" required></label>
<label>Committee member <select name="committee_member_id">{committee_options}</select></label>
<label>Date <input name="incident_date" type="date" value="{incident_date}" required></label>
<label>Description <textarea name="description" required>{description}</textarea></label>
<button type="submit">Report</button>
</form>
<p>{back}</p>"#,
            user_id = staff.id,
            student_id = attr(fields.student_id),
            student_name = attr(fields.student_name),
            class_name = attr(fields.class_name),
            department = attr(fields.department),
            incident_date = attr(fields.incident_date),
            description = esc(fields.description),
            back = link("/facultydashboard", staff.id, "Back to dashboard"),
        ),
    )
}
