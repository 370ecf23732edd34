mod catalog;
mod cli;
mod config;
mod content;
mod env;
mod error;
mod http;
mod import;
mod output;
mod project;
mod scaffold;
mod sketch;
mod store;

use catalog::GitHubCatalog;
use clap::Parser;
use config::SeedConfig;
use import::{ImportOrchestrator, RunReport};
use output::RunSummary;
use std::sync::Arc;
use store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{}", RunSummary::failure(&err.to_string()));
        std::process::exit(1);
    }
}

async fn run(cli: cli::Cli) -> error::Result<RunReport> {
    let mut config = SeedConfig::from_env()?;
    if let Some(db_path) = cli.db_path {
        config.db_path = db_path;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Catalog: {}", config.location.catalog_url);

    let store = SqliteStore::open(&config.db_path).await?;
    let catalog = GitHubCatalog::new(&config.http, &config.credentials);

    let mut orchestrator = ImportOrchestrator::new(
        Arc::new(catalog),
        Arc::new(store),
        config.account,
        config.location,
    )
    .with_progress(!cli.quiet);

    let result = orchestrator.run().await;
    tracing::debug!(state = %orchestrator.state(), "import finished");

    let report = result?;
    println!("{}", RunSummary::format(&report));
    Ok(report)
}
