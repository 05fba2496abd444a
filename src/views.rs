use axum::response::Html;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::auth::session::SessionUser;
use crate::feed::repo_types::Blog;

const DATE_FMT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// Minimal entity escaping for user-provided text dropped into markup.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn nav(user: Option<&SessionUser>) -> String {
    match user {
        Some(u) => format!(
            concat!(
                r#"<nav><span>Signed in as {}</span> "#,
                r#"<form method="post" action="/logout" class="inline">"#,
                r#"<button type="submit">Log out</button></form></nav>"#
            ),
            escape(&u.name)
        ),
        None => concat!(
            r#"<nav><a href="/">Feed</a> "#,
            r#"<a href="/signin">Sign in</a> "#,
            r#"<a href="/signup">Sign up</a></nav>"#
        )
        .to_string(),
    }
}

fn layout(title: &str, user: Option<&SessionUser>, error: Option<&str>, body: &str) -> Html<String> {
    let banner = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape(e)))
        .unwrap_or_default();
    Html(format!(
        concat!(
            "<!doctype html>\n",
            r#"<html><head><meta charset="utf-8"><title>{title}</title></head>"#,
            "<body>{nav}{banner}{body}</body></html>"
        ),
        title = escape(title),
        nav = nav(user),
        banner = banner,
        body = body,
    ))
}

pub fn feed_page(user: Option<&SessionUser>, blogs: &[Blog], error: Option<&str>) -> Html<String> {
    let mut body = String::from("<h1>Feed</h1>");
    if blogs.is_empty() {
        body.push_str("<p>No posts yet.</p>");
    }
    for blog in blogs {
        let date = blog
            .date_created
            .format(DATE_FMT)
            .unwrap_or_else(|_| String::new());
        body.push_str(&format!(
            concat!(
                r#"<article><h2>{}</h2><p class="meta">{} · {}</p>"#,
                "<p>{}</p></article>"
            ),
            escape(&blog.title),
            escape(&blog.author),
            date,
            escape(&blog.content),
        ));
    }
    layout("Feed", user, error, &body)
}

pub fn signup_page(user: Option<&SessionUser>, error: Option<&str>) -> Html<String> {
    let body = concat!(
        "<h1>Sign up</h1>",
        r#"<form method="post" action="/signup">"#,
        r#"<label>User ID <input name="user_id"></label>"#,
        r#"<label>Password <input name="password" type="password"></label>"#,
        r#"<label>Name <input name="name"></label>"#,
        r#"<button type="submit">Sign up</button></form>"#
    );
    layout("Sign up", user, error, body)
}

pub fn signin_page(user: Option<&SessionUser>, error: Option<&str>) -> Html<String> {
    let body = concat!(
        "<h1>Sign in</h1>",
        r#"<form method="post" action="/signin">"#,
        r#"<label>User ID <input name="user_id"></label>"#,
        r#"<label>Password <input name="password" type="password"></label>"#,
        r#"<button type="submit">Sign in</button></form>"#
    );
    layout("Sign in", user, error, body)
}
