//! CLI command implementations.

pub mod show;
pub mod validate;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use remedy_template::types::parse_date_time;
use remedy_template::{ArServerForm, Template, TemplateLoader};

use crate::args::{Cli, TemplateSource};

/// Connection and query-window overrides taken from global flags.
#[derive(Debug, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub endpoint: Option<String>,
    pub token: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl Overrides {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            host: cli.host.clone(),
            user: cli.user.clone(),
            password: cli.password.clone(),
            endpoint: cli.endpoint.clone(),
            token: cli.token.clone(),
            start: cli.start.clone(),
            end: cli.end.clone(),
        }
    }
}

/// Blank/whitespace-only values are ignored to allow fallback to the template.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_window_bound(flag: &str, value: Option<String>) -> Result<Option<DateTime<Utc>>> {
    non_blank(value)
        .map(|raw| {
            parse_date_time(raw.trim())
                .with_context(|| format!("Invalid --{flag} value '{raw}'"))
        })
        .transpose()
}

/// Build the template selected by `source`, layering environment variables
/// and then command-line overrides on top of it.
pub fn load_template(source: &TemplateSource, overrides: Overrides) -> Result<Template> {
    let form: ArServerForm = source.form.parse()?;
    let mut loader = TemplateLoader::new().with_form(form);

    if let Some(path) = &source.template
        && !path.to_string_lossy().trim().is_empty()
    {
        tracing::debug!(path = %path.display(), "loading template file");
        loader = loader.with_template_path(path.clone());
    } else {
        tracing::debug!(%form, "loading bundled default template");
    }

    loader = loader
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(host) = non_blank(overrides.host) {
        loader = loader.with_host_name(host);
    }
    if let Some(user) = non_blank(overrides.user) {
        loader = loader.with_user_name(user);
    }
    if let Some(password) = non_blank(overrides.password) {
        loader = loader.with_password(password);
    }
    if let Some(endpoint) = non_blank(overrides.endpoint) {
        loader = loader.with_endpoint(endpoint);
    }
    if let Some(token) = non_blank(overrides.token) {
        loader = loader.with_api_token(token);
    }
    if let Some(start) = parse_window_bound("start", overrides.start)? {
        loader = loader.with_start_date_time(start);
    }
    if let Some(end) = parse_window_bound("end", overrides.end)? {
        loader = loader.with_end_date_time(end);
    }

    loader.build().context("Failed to load template")
}
