use crate::routes::AppState;
use crate::views::status::{partial_url, render_index_page};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use lucism_status::{
    models::find_project,
    probe::probe_endpoint,
    render::{mount, render, Container},
};
use tracing::{debug, warn};

/// Page with every project in its loading state. Each node fetches its own
/// resolved version from the project partial once the page loads.
pub async fn index_page(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let container = Container::new();
    for project in state.projects.iter() {
        let node = mount(&container, &project.name, project.link.as_deref());
        node.set_attribute("hx-get", &partial_url(&project.slug));
        node.set_attribute("hx-trigger", "load");
        node.set_attribute("hx-swap", "outerHTML");
    }

    let html = render_index_page(&state.templates, &container.inner_html(), container.len())
        .map_err(|err| {
            warn!(error = %err, "failed to render index page");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        })?;
    Ok(Html(html))
}

pub async fn project_status_partial(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, (StatusCode, String)> {
    let project = find_project(&state.projects, &slug)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("unknown project {slug}")))?;

    let container = Container::new();
    let handle = render(
        &container,
        &project.name,
        project.link.as_deref(),
        probe_endpoint(state.prober.clone(), project.endpoint.clone()),
    );
    let status = handle
        .settled()
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
    debug!(project = %project.slug, %status, "project status resolved");

    Ok(Html(container.inner_html()))
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404, PAGE NOT FOUND")
}
