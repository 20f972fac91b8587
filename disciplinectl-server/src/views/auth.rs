//! Home and login pages

use super::{attr, layout, Notice};

pub fn home() -> String {
    layout(
        "Discipline Management",
        Notice::none(),
        r#"<p>Record discipline incidents and the actions taken on them.</p>
<p><a href="/login">Sign in</a></p>"#,
    )
}

/// Login form. `username` is re-filled after a failed attempt.
pub fn login(error: Option<&str>, username: &str) -> String {
    let notice = Notice {
        message: None,
        error,
    };
    layout(
        "Login",
        notice,
        &format!(
            r#"<form method="post" action="/login">
<label>Username <input name="username" value="{}" required></label>
<label>Password <input name="password" type="password" required></label>
<button type="submit">Login</button>
</form>"#,
            attr(username)
        ),
    )
}
