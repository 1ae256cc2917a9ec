use std::time::Duration;

use clap::Args;
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/survey_expenses.toml";
const ENV_PREFIX: &str = "SURVEY_EXPENSES";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Project URL of the PostgREST backend, without `/rest/v1`.
    pub base_url: String,
    pub api_key: String,
    pub table: String,
    pub poll_interval_secs: u64,
    pub cache_path: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            table: "despesas".to_string(),
            poll_interval_secs: 5,
            cache_path: "config/expenses_cache.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    /// Backend settings are only needed when talking to the backend.
    pub fn require_backend(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::MissingSetting("base_url"));
        }
        if self.api_key.trim().is_empty() {
            return Err(AppError::MissingSetting("api_key"));
        }
        Ok(())
    }
}

/// Command-line overrides. The API key is read from the file or the
/// environment only.
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Override the backend URL (e.g. https://project.supabase.co).
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Override the table name.
    #[arg(long, global = true)]
    pub table: Option<String>,
    /// Override the polling interval, in seconds.
    #[arg(long, global = true)]
    pub poll_interval_secs: Option<u64>,
    /// Override the local cache file.
    #[arg(long, global = true)]
    pub cache_path: Option<String>,
    /// Override the log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

pub fn load(overrides: &Overrides) -> Result<AppConfig> {
    let config_path = overrides.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let builder = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;
    apply(&mut settings, overrides);
    Ok(settings)
}

fn apply(settings: &mut AppConfig, overrides: &Overrides) {
    if let Some(base_url) = &overrides.base_url {
        settings.base_url = base_url.clone();
    }
    if let Some(table) = &overrides.table {
        settings.table = table.clone();
    }
    if let Some(secs) = overrides.poll_interval_secs {
        settings.poll_interval_secs = secs;
    }
    if let Some(cache_path) = &overrides.cache_path {
        settings.cache_path = cache_path.clone();
    }
    if let Some(level) = &overrides.log_level {
        settings.log_level = level.clone();
    }
}
