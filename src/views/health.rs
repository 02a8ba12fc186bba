use crate::views::layout::render_page;
use minijinja::{context, Environment};

pub fn health_html(env: &Environment<'static>, project_count: usize) -> Result<String, minijinja::Error> {
    render_page(
        env,
        "health.html",
        "Lucism Status Health",
        context! { project_count => project_count },
    )
}
