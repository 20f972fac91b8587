//! Role dashboards and the student's own records

use std::fmt::Write;

use super::{actions::actions_table, esc, incidents::incidents_table, layout, link, Notice};
use crate::db::{Action, Incident, StaffMember, Student};
use crate::models::Role;

pub fn student_dashboard(student: &Student) -> String {
    layout(
        "Student Dashboard",
        Notice::none(),
        &format!(
            r#"<p>Welcome, {}.</p>
<ul>
<li>{}</li>
<li>{}</li>
</ul>"#,
            esc(&student.name),
            link("/sd_disciplineincidents", student.id, "My discipline incidents"),
            link("/sd_viewdisciplineactions", student.id, "My disciplinary actions"),
        ),
    )
}

pub fn student_incidents(student: &Student, incidents: &[Incident]) -> String {
    layout(
        "My Discipline Incidents",
        Notice::none(),
        &format!(
            "{}\n<p>{}</p>",
            incidents_table(incidents),
            link("/studentdashboard", student.id, "Back to dashboard")
        ),
    )
}

pub fn student_actions(student: &Student, actions: &[Action]) -> String {
    layout(
        "My Disciplinary Actions",
        Notice::none(),
        &format!(
            "{}\n<p>{}</p>",
            actions_table(actions),
            link("/studentdashboard", student.id, "Back to dashboard")
        ),
    )
}

fn staff_menu(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Principal => &[("/pd_disciplineactions", "Disciplinary actions")],
        Role::Faculty => &[("/fd_disciplineincidents", "Report a discipline incident")],
        Role::Committee => &[
            ("/cd_disciplineincidents", "Incidents assigned to me"),
            ("/cd_assignactions", "Assign actions"),
            ("/cd_disciplineactions", "All disciplinary actions"),
        ],
    }
}

/// Dashboard for a staff member, menu chosen by role.
pub fn staff_dashboard(staff: &StaffMember, notice: Notice<'_>) -> String {
    let mut menu = String::new();
    for (path, label) in staff_menu(staff.role) {
        let _ = writeln!(menu, "<li>{}</li>", link(path, staff.id, label));
    }

    layout(
        &format!("{} Dashboard", staff.role.label()),
        notice,
        &format!("<p>Welcome, {}.</p>\n<ul>\n{}</ul>", esc(&staff.name), menu),
    )
}

/// All actions, for committee and principal overviews.
pub fn actions_overview(staff: &StaffMember, actions: &[Action], notice: Notice<'_>) -> String {
    layout(
        "Disciplinary Actions",
        notice,
        &format!(
            "{}\n<p>{}</p>",
            actions_table(actions),
            link(&staff.role.dashboard_path(), staff.id, "Back to dashboard")
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn committee_menu_links_carry_user_id() {
        let staff = StaffMember {
            id: 5,
            name: "Cam".into(),
            username: "cam".into(),
            password_hash: String::new(),
            role: Role::Committee,
        };
        let html = staff_dashboard(&staff, Notice::none());
        assert!(html.contains("Committee Dashboard"));
        assert!(html.contains(r#"href="/cd_assignactions?user_id=5""#));
        assert!(!html.contains("/fd_disciplineincidents"));
    }
}
