pub mod health;
pub mod status;

use axum::{routing::get, Router};
use lucism_status::{
    config::ServerConfig,
    models::{default_projects, Project},
    probe::{ReqwestProber, StatusProber},
};
use minijinja::Environment;
use std::{path::Path, sync::Arc};
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<Vec<Project>>,
    pub prober: Arc<dyn StatusProber>,
    pub templates: Arc<Environment<'static>>,
}

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(status::index_page))
        .route("/partials/projects/:slug", get(status::project_status_partial))
        .route("/health", get(health::health))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(status::not_found)
        .with_state(state)
}

pub fn default_state(config: &ServerConfig) -> AppState {
    AppState {
        projects: Arc::new(default_projects()),
        prober: Arc::new(ReqwestProber::new()),
        templates: Arc::new(crate::views::layout::build_template_env(&config.templates_dir)),
    }
}
