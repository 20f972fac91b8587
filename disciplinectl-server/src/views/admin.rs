//! Admin pages: staff and student management, incident overview

use std::fmt::Write;

use super::{attr, esc, incidents::incidents_table, layout, options, Notice};
use crate::db::{Incident, StaffMember, Student};
use crate::models::Role;

/// Values shown in a staff form. Passwords are never echoed back.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaffFields<'a> {
    pub name: &'a str,
    pub username: &'a str,
    pub role: &'a str,
}

impl<'a> From<&'a StaffMember> for StaffFields<'a> {
    fn from(s: &'a StaffMember) -> Self {
        Self {
            name: &s.name,
            username: &s.username,
            role: s.role.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StudentFields<'a> {
    pub name: &'a str,
    pub username: &'a str,
}

impl<'a> From<&'a Student> for StudentFields<'a> {
    fn from(s: &'a Student) -> Self {
        Self {
            name: &s.name,
            username: &s.username,
        }
    }
}

pub fn dashboard() -> String {
    layout(
        "Admin Dashboard",
        Notice::none(),
        r#"<ul>
<li><a href="/staffmembers">Staff members</a></li>
<li><a href="/students">Students</a></li>
<li><a href="/disciplineincidents">Discipline incidents</a></li>
</ul>"#,
    )
}

/// Role `<option>`s. The selection is matched the way `Role::from_str` parses.
fn role_options(selected: &str) -> String {
    options(
        Role::ALL
            .iter()
            .map(|r| (r.as_str().to_string(), r.label().to_string())),
        &selected.trim().to_lowercase(),
    )
}

fn staff_fields(fields: StaffFields<'_>) -> String {
    format!(
        r#"<label>Name <input name="name" value="{}" required></label>
<label>Username <input name="username" value="{}" required></label>
<label>Password <input name="password" type="password" required></label>
<label>Role <select name="role" required>{}</select></label>"#,
        attr(fields.name),
        attr(fields.username),
        role_options(fields.role)
    )
}

pub fn staff_members(staff: &[StaffMember], notice: Notice<'_>, form: StaffFields<'_>) -> String {
    let mut rows = String::new();
    for s in staff {
        let _ = write!(
            rows,
            r#"<tr><td>{id}</td><td>{name}</td><td>{username}</td><td>{role}</td>
<td><a href="/edit_staff/{id}">Edit</a>
<form method="post" action="/delete_staff/{id}" class="inline"><button type="submit">Delete</button></form></td></tr>
"#,
            id = s.id,
            name = esc(&s.name),
            username = esc(&s.username),
            role = s.role.label(),
        );
    }

    layout(
        "Staff Members",
        notice,
        &format!(
            r#"<table>
<thead><tr><th>ID</th><th>Name</th><th>Username</th><th>Role</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>
<h2>Add staff member</h2>
<form method="post" action="/add_staff">
{fields}
<button type="submit">Add</button>
</form>
<p><a href="/admindashboard">Back to dashboard</a></p>"#,
            fields = staff_fields(form),
        ),
    )
}

pub fn edit_staff(id: i64, fields: StaffFields<'_>, notice: Notice<'_>) -> String {
    layout(
        "Edit Staff Member",
        notice,
        &format!(
            r#"<form method="post" action="/edit_staff/{id}">
{fields}
<button type="submit">Save</button>
</form>
<p><a href="/staffmembers">Back to staff members</a></p>"#,
            fields = staff_fields(fields),
        ),
    )
}

fn student_fields(fields: StudentFields<'_>) -> String {
    format!(
        r#"<label>Name <input name="name" value="{}" required></label>
<label>Username <input name="username" value="{}" required></label>
<label>Password <input name="password" type="password" required></label>"#,
        attr(fields.name),
        attr(fields.username)
    )
}

pub fn students(students: &[Student], notice: Notice<'_>, form: StudentFields<'_>) -> String {
    let mut rows = String::new();
    for s in students {
        let _ = write!(
            rows,
            r#"<tr><td>{id}</td><td>{name}</td><td>{username}</td>
<td><a href="/edit_student/{id}">Edit</a>
<form method="post" action="/delete_student/{id}" class="inline"><button type="submit">Delete</button></form></td></tr>
"#,
            id = s.id,
            name = esc(&s.name),
            username = esc(&s.username),
        );
    }

    layout(
        "Students",
        notice,
        &format!(
            r#"<table>
<thead><tr><th>ID</th><th>Name</th><th>Username</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>
<h2>Add student</h2>
<form method="post" action="/add_student">
{fields}
<button type="submit">Add</button>
</form>
<p><a href="/admindashboard">Back to dashboard</a></p>"#,
            fields = student_fields(form),
        ),
    )
}

pub fn edit_student(id: i64, fields: StudentFields<'_>, notice: Notice<'_>) -> String {
    layout(
        "Edit Student",
        notice,
        &format!(
            r#"<form method="post" action="/edit_student/{id}">
{fields}
<button type="submit">Save</button>
</form>
<p><a href="/students">Back to students</a></p>"#,
            fields = student_fields(fields),
        ),
    )
}

pub fn discipline_incidents(incidents: &[Incident]) -> String {
    layout(
        "Discipline Incidents",
        Notice::none(),
        &format!(
            r#"{}
<p><a href="/admindashboard">Back to dashboard</a></p>"#,
            incidents_table(incidents)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff(id: i64, name: &str, role: Role) -> StaffMember {
        StaffMember {
            id,
            name: name.to_string(),
            username: name.to_lowercase(),
            password_hash: "$2b$04$hash".to_string(),
            role,
        }
    }

    #[test]
    fn staff_list_hides_hashes_and_escapes() {
        let list = [staff(1, "<Ada>", Role::Faculty)];
        let html = staff_members(&list, Notice::none(), StaffFields::default());
        assert!(html.contains("&lt;Ada&gt;"));
        assert!(html.contains(r#"action="/delete_staff/1""#));
        assert!(!html.contains("$2b$04$hash"));
    }

    #[test]
    fn edit_form_preselects_role() {
        let member = staff(3, "Cam", Role::Committee);
        let html = edit_staff(3, StaffFields::from(&member), Notice::none());
        assert!(html.contains(r#"<option value="committee" selected>"#));
        assert!(html.contains(r#"action="/edit_staff/3""#));
    }

    #[test]
    fn submitted_role_matches_case_insensitively() {
        let fields = StaffFields {
            name: "Fay",
            username: "fay",
            role: " Faculty ",
        };
        let html = staff_members(&[], Notice::none(), fields);
        assert!(html.contains(r#"<option value="faculty" selected>"#));
    }
}
