//! Server-rendered HTML pages
//!
//! Plain functions from records to `String`. Every interpolated value
//! goes through `esc` (text) or `attr` (double-quoted attribute).

pub mod actions;
pub mod admin;
pub mod auth;
pub mod dashboards;
pub mod incidents;

use std::borrow::Cow;
use std::fmt::Write;

pub(crate) fn esc(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

pub(crate) fn attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Banner shown above a page: a success message, an error, or nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Notice<'a> {
    pub message: Option<&'a str>,
    pub error: Option<&'a str>,
}

impl<'a> Notice<'a> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn error(error: &'a str) -> Self {
        Self {
            message: None,
            error: Some(error),
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        if let Some(message) = self.message.filter(|m| !m.is_empty()) {
            let _ = write!(out, r#"<p class="message">{}</p>"#, esc(message));
        }
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            let _ = write!(out, r#"<p class="error">{}</p>"#, esc(error));
        }
        out
    }
}

/// Wrap body markup in the shared page chrome.
pub fn layout(title: &str, notice: Notice<'_>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Discipline Management</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<header><h1>{title}</h1><nav><a href="/">Home</a> <a href="/logout">Logout</a></nav></header>
<main>
{notice}{body}
</main>
</body>
</html>
"#,
        title = esc(title),
        notice = notice.render(),
        body = body,
    )
}

pub fn error_page(message: &str) -> String {
    layout(
        "Error",
        Notice::none(),
        &format!(
            r#"<p class="error">{}</p><p><a href="/login">Back to login</a></p>"#,
            esc(message)
        ),
    )
}

/// `<option>` list, marking the entry whose value equals `selected`.
pub(crate) fn options<'a, I>(items: I, selected: &str) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut out = String::new();
    for (value, label) in items {
        let mark = if value == selected { " selected" } else { "" };
        let _ = write!(
            out,
            r#"<option value="{}"{}>{}</option>"#,
            attr(&value),
            mark,
            esc(&label)
        );
    }
    out
}

/// Link to a role page carrying the caller's id.
pub(crate) fn link(path: &str, user_id: i64, label: &str) -> String {
    format!(r#"<a href="{}?user_id={}">{}</a>"#, attr(path), user_id, esc(label))
}
