use crate::routes::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

pub async fn health(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if !wants_html(&headers) {
        return "ok".into_response();
    }

    match crate::views::health::health_html(&state.templates, state.projects.len()) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            warn!(error = %err, "failed to render health page");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

/// True when one of the `Accept` media ranges names `text/html`.
fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|range| range.split(';').next())
        .any(|media| media.trim().eq_ignore_ascii_case("text/html"))
}
