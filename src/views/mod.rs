//! Server-rendered HTML for the dashboard pages.

pub mod components;
pub mod pages;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use url::Url;

use crate::services::Theme;

const STYLES: &str = r#"
:root { --bg:#0b0f19; --card:#121826; --fg:#e5e7eb; --muted:#9ca3af; --border:#1f2937; --primary:#38bdf8; }
html.light { --bg:#f8fafc; --card:#ffffff; --fg:#0f172a; --muted:#64748b; --border:#e2e8f0; --primary:#0284c7; }
body { margin:0; font-family:system-ui,sans-serif; background:var(--bg); color:var(--fg); }
a { color:var(--primary); text-decoration:none; }
a:hover { text-decoration:underline; }
header, footer { border-color:var(--border); padding:1rem 2rem; display:flex; justify-content:space-between; align-items:center; }
header { border-bottom:1px solid var(--border); }
footer { border-top:1px solid var(--border); color:var(--muted); font-size:.875rem; }
main { padding:2rem; max-width:72rem; margin:0 auto; }
.brand { font-weight:700; font-size:1.125rem; }
.grid { display:grid; gap:1.5rem; grid-template-columns:repeat(auto-fill,minmax(18rem,1fr)); }
.stack { display:grid; gap:1rem; }
.card { background:var(--card); border:1px solid var(--border); border-radius:.5rem; padding:1rem; }
.row { display:flex; justify-content:space-between; align-items:center; gap:.5rem; }
.muted { color:var(--muted); }
.dot { width:.75rem; height:.75rem; border-radius:9999px; display:inline-block; }
.bullish { background:rgba(34,197,94,.2); color:#22c55e; }
.bearish { background:rgba(239,68,68,.2); color:#ef4444; }
.neutral, .pending { background:rgba(234,179,8,.2); color:#eab308; }
.correct { color:#22c55e; } .incorrect { color:#ef4444; }
.dot.bullish { background:#22c55e; } .dot.bearish { background:#ef4444; }
.badge { display:inline-flex; border-radius:9999px; padding:.125rem .5rem; font-size:.75rem; font-weight:500; }
.avatar { width:3rem; height:3rem; border-radius:9999px; border:1px solid var(--border); display:inline-flex; align-items:center; justify-content:center; overflow:hidden; }
.notice { background:rgba(239,68,68,.15); border:1px solid #ef4444; border-radius:.5rem; padding:.75rem 1rem; margin-bottom:1.5rem; }
.empty { border:1px dashed var(--border); border-radius:.5rem; padding:3rem; text-align:center; color:var(--muted); }
.button { border:1px solid var(--border); border-radius:.375rem; padding:.5rem 1rem; background:transparent; color:var(--fg); cursor:pointer; }
"#;

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Escaped form of a remote URL for an `href` or `src` attribute. Only
/// absolute `http` and `https` URLs are linkable.
pub fn safe_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    match url.scheme() {
        "http" | "https" => Some(escape(url.as_str())),
        _ => None,
    }
}

/// Render an event date as e.g. `Mar 10, 2024`. Input that is neither a
/// date nor an RFC 3339 timestamp is returned unchanged.
pub fn format_event_date(raw: &str) -> String {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));

    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// First letter of each word of a name, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Wrap page content in the shared document shell (header, footer, theme).
pub fn layout(title: &str, theme: Theme, notice: Option<&str>, content: &str) -> String {
    let html_class = match theme {
        Theme::Light => " class=\"light\"",
        Theme::Dark => "",
    };
    let toggle_label = match theme {
        Theme::Dark => "Light mode",
        Theme::Light => "Dark mode",
    };
    let notice = notice
        .map(|msg| format!("<div class=\"notice\" role=\"alert\"><strong>Error</strong> {}</div>", escape(msg)))
        .unwrap_or_default();
    let year = Utc::now().year();

    format!(
        r#"<!DOCTYPE html>
<html lang="en"{html_class}>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Event Horizon</title>
<style>{STYLES}</style>
</head>
<body>
<header>
  <a class="brand" href="/">Event Horizon</a>
  <nav class="row">
    <a href="/spotlight">Spotlight</a>
    <form method="post" action="/theme/toggle">
      <button class="button" type="submit" aria-label="Toggle theme">{toggle_label}</button>
    </form>
  </nav>
</header>
<main>
{notice}{content}
</main>
<footer>
  <span>Created by OnlyPips &copy; {year}</span>
  <a href="/">Home</a>
</footer>
</body>
</html>
"#,
        title = escape(title),
    )
}
