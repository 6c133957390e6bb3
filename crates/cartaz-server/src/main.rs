//! cartaz - pt-BR movie/TV listings server backed by TMDB.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use cartaz_api::tmdb::TmdbClient;
use cartaz_server::{AppConfig, AppState, create_router};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, default_value = "cartaz.toml")]
    config: PathBuf,

    /// Override the bind address from the config file.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    let api_key = config
        .tmdb
        .resolve_api_key(std::env::var("TMDB_API_KEY").ok())?;
    let base_url = config
        .tmdb
        .base_url
        .parse()
        .with_context(|| format!("invalid TMDB base URL `{}`", config.tmdb.base_url))?;
    let tmdb = TmdbClient::builder()
        .base_url(base_url)
        .api_key(api_key)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .language(&config.tmdb.language)
        .build()
        .context("failed to build TMDB client")?;

    let state = AppState::new(tmdb, &config.tmdb.image_base_url, &config.tmdb.region);
    let router = create_router(state);

    let bind = cli.bind.unwrap_or(config.server.bind);
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!(%bind, "listening");

    axum::serve(listener, router)
        .await
        .context("server terminated unexpectedly")
}
