use axum::extract::State;
use axum::http::header::REFERER;
use axum::http::HeaderMap;
use axum::response::Redirect;
use axum_extra::extract::CookieJar;
use metrics::counter;
use url::Url;

use crate::services::theme_cookie;
use crate::AppState;

/// Flip this browser's theme and send it back to the page it came from.
pub async fn toggle(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> (CookieJar, Redirect) {
    let theme = state.settings.theme_for(&jar).toggled();
    counter!("theme_toggles_total").increment(1);
    tracing::debug!(theme = theme.as_str(), "Theme toggled");

    let back = headers
        .get(REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(local_path)
        .unwrap_or_else(|| "/".to_string());

    (jar.add(theme_cookie(theme)), Redirect::to(&back))
}

/// Path and query of a referer, never its host. A path that a browser would
/// read as protocol-relative (`//host`, `/\host`) is refused.
fn local_path(referer: &str) -> Option<String> {
    let url = Url::parse(referer).ok()?;
    let path = url.path();
    if path.starts_with("//") || path.starts_with("/\\") {
        return None;
    }

    let mut local = path.to_string();
    if let Some(query) = url.query() {
        local.push('?');
        local.push_str(query);
    }
    Some(local)
}
