use crate::views::layout::render_page;
use lucism_status::render::CONTAINER_ID;
use minijinja::{context, Environment};

pub fn render_index_page(
    env: &Environment<'static>,
    projects_html: &str,
    project_count: usize,
) -> Result<String, minijinja::Error> {
    render_page(
        env,
        "index.html",
        "Lucism Status",
        context! {
            container_id => CONTAINER_ID,
            projects_html => projects_html,
            project_count => project_count,
        },
    )
}

pub fn partial_url(slug: &str) -> String {
    format!("/partials/projects/{slug}")
}
