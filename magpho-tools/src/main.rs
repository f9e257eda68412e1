//! magpho-tools - Magazine × photography aesthetic tool server
//!
//! Loads the pre-generated catalog once at startup and serves every tool as
//! a JSON endpoint under `/api/tools`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use magpho_common::config::{default_config_path, CacheDirResolver, CompiledDefaults, TomlConfig};
use magpho_common::Catalog;
use magpho_tools::{build_router, AppState};

/// Command-line arguments for magpho-tools
#[derive(Parser, Debug)]
#[command(name = "magpho-tools")]
#[command(about = "Magazine and photography aesthetic tool server")]
#[command(version)]
struct Args {
    /// Directory holding magazines.json, photography.json and combinations.json
    #[arg(short, long)]
    cache_dir: Option<PathBuf>,

    /// Socket address to listen on, e.g. 127.0.0.1:5790
    #[arg(short, long, env = "MAGPHO_BIND")]
    bind: Option<String>,

    /// Config file (defaults to the platform config location)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read before tracing starts so its log level can apply
    let config_path = args.config.clone().or_else(default_config_path);
    let loaded = config_path
        .as_deref()
        .map(|path| (path, TomlConfig::load_file(path)));

    let log_level = match &loaded {
        Some((_, Ok(config))) => config.log_level.clone(),
        _ => None,
    }
    .unwrap_or_else(|| CompiledDefaults::default().log_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    info!(
        "Starting magpho-tools v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let toml = match loaded {
        Some((path, Ok(config))) => {
            info!("Loaded TOML configuration from {}", path.display());
            config
        }
        Some((path, Err(e))) => {
            warn!("Ignoring config file {}: {}", path.display(), e);
            TomlConfig::default()
        }
        None => TomlConfig::default(),
    };

    let resolver = CacheDirResolver::with_toml(args.cache_dir, toml);
    let cache_dir = resolver.resolve();

    let catalog = match Catalog::load(&cache_dir) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog from {}: {}", cache_dir.display(), e);
            return Err(e).context("Catalog unavailable; run the cache generator first");
        }
    };

    let state = AppState::new(catalog);
    let app = build_router(state);

    let bind_address = resolver.bind_address(args.bind.as_deref());
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!("magpho-tools listening on http://{}", bind_address);
    info!("Tool index: http://{}/api/tools", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
