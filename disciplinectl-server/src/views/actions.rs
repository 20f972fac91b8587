//! Committee pages for reviewing incidents and assigning actions

use std::fmt::Write;

use super::{attr, esc, layout, link, options, Notice};
use crate::db::{Action, Incident, StaffMember};

pub fn actions_table(actions: &[Action]) -> String {
    if actions.is_empty() {
        return r#"<p class="empty">No disciplinary actions recorded.</p>"#.to_string();
    }

    let mut rows = String::new();
    for a in actions {
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            a.id,
            a.incident_id,
            esc(&a.student_id),
            esc(&a.action_description),
            esc(&a.assigned_date),
        );
    }

    format!(
        r#"<table>
<thead><tr><th>ID</th><th>Incident</th><th>Student ID</th><th>Action</th><th>Assigned</th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
    )
}

/// Incidents assigned to a committee member, each with an inline action form.
pub fn committee_incidents(
    staff: &StaffMember,
    incidents: &[Incident],
    notice: Notice<'_>,
) -> String {
    let mut body = String::new();
    if incidents.is_empty() {
        body.push_str(r#"<p class="empty">No incidents assigned to you.</p>"#);
    }
    for i in incidents {
        let _ = write!(
            body,
            r#"<section class="incident">
<h2>Incident {id}: {student_name} ({student_id})</h2>
<p>{class_name}, {department}, {date}</p>
<p>{description}</p>
<form method="post" action="/cd_assign_action">
<input type="hidden" name="user_id" value="{user_id}">
<input type="hidden" name="incident_id" value="{id}">
<input type="hidden" name="student_id" value="{student_id_attr}">
<label>Action <textarea name="action_description" required></textarea></label>
<label>Date <input name="assigned_date" type="date" required></label>
<button type="submit">Assign action</button>
</form>
</section>
"#,
            id = i.id,
            student_name = esc(&i.student_name),
            student_id = esc(&i.student_id),
            student_id_attr = attr(&i.student_id),
            class_name = esc(&i.class_name),
            department = esc(&i.department),
            date = esc(&i.incident_date),
            description = esc(&i.description),
            user_id = staff.id,
        );
    }
    let _ = write!(body, "<p>{}</p>", link("/committeedashboard", staff.id, "Back to dashboard"));

    layout("Assigned Discipline Incidents", notice, &body)
}

/// Single form choosing one of the member's incidents.
pub fn assign_actions(staff: &StaffMember, incidents: &[Incident], notice: Notice<'_>) -> String {
    let incident_options = options(
        incidents.iter().map(|i| {
            (
                i.id.to_string(),
                format!("#{} {} ({})", i.id, i.student_name, i.incident_date),
            )
        }),
        "",
    );

    layout(
        "Assign Disciplinary Actions",
        notice,
        &format!(
            r#"<form method="post" action="/cd_assignactions">
<input type="hidden" name="user_id" value="{user_id}">
<label>Incident <select name="incident_id" required>{incident_options}</select></label>
<label>Student ID <input name="student_id" required></label>
<label>Action <textarea name="action_description" required></textarea></label>
<label>Date <input name="assigned_date" type="date" required></label>
<button type="submit">Assign action</button>
</form>
<p>{back}</p>"#,
            user_id = staff.id,
            back = link("/committeedashboard", staff.id, "Back to dashboard"),
        ),
    )
}
