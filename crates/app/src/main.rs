mod cache;
mod cli;
mod commands;
mod config;
mod error;
mod export;
mod render;
mod store;

use clap::Parser;
use gateway::{MemoryGateway, RestConfig, RestGateway};

use crate::{
    cache::ExpenseCache,
    cli::Cli,
    config::AppConfig,
    error::Result,
    store::ExpenseStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = config::load(&cli.overrides)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "survey_expenses={level},gateway={level},engine={level}",
            level = settings.log_level
        ))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli, &settings).await {
        tracing::error!("{err}");
        return Err(err);
    }
    Ok(())
}

async fn run(cli: Cli, settings: &AppConfig) -> Result<()> {
    let cache = ExpenseCache::new(&settings.cache_path);
    let interval = settings.poll_interval();

    if cli.offline {
        let records = cache.load()?;
        tracing::info!("offline session with {} cached expenses", records.len());
        let store = ExpenseStore::new(MemoryGateway::with_records(records), cache);
        return commands::run(&store, cli.command, interval).await;
    }

    settings.require_backend()?;
    let mut rest = RestConfig::new(&settings.base_url, &settings.api_key);
    rest.table = settings.table.clone();
    let store = ExpenseStore::new(RestGateway::new(&rest)?, cache);
    commands::run(&store, cli.command, interval).await
}
