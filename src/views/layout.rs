use minijinja::{context, Environment};
use std::path::Path;
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

pub fn build_template_env(templates_dir: &Path) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(minijinja::path_loader(templates_dir));
    env.set_auto_escape_callback(|_| minijinja::AutoEscape::Html);
    env
}

/// Renders `name` with the shared page chrome values.
pub fn render_page(
    env: &Environment<'static>,
    name: &str,
    title: &str,
    content: minijinja::Value,
) -> Result<String, minijinja::Error> {
    let context = context! {
        title => title,
        generated_at => rendered_at(OffsetDateTime::now_utc()),
        ..content
    };
    env.get_template(name)?.render(context)
}

const RENDERED_AT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute] UTC");

/// Footer timestamp in UTC, to the minute.
pub fn rendered_at(now: OffsetDateTime) -> String {
    now.to_offset(time::UtcOffset::UTC)
        .format(RENDERED_AT)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}
