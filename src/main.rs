mod routes;
mod views;

use lucism_status::config::ServerConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            std::process::exit(1);
        }
    };

    let state = routes::default_state(&config);
    let project_count = state.projects.len();
    let app = routes::build_router(state, &config.static_dir);

    info!(
        projects = project_count,
        static_dir = %config.static_dir.display(),
        "status page listening on http://{}",
        config.addr
    );
    axum::Server::bind(&config.addr)
        .serve(app.into_make_service())
        .await
        .expect("server failed");
}
