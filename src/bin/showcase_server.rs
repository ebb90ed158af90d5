//! showcase_server - serves the achievement showcase over HTTP.
//!
//! Reads config from env vars (see `achievement_showcase::config`):
//!   SHOWCASE_BIND_ADDR       - listen address (default: 0.0.0.0:3000)
//!   SHOWCASE_CATALOG         - YAML catalog override (optional)
//!   SHOWCASE_STATIC_DIR      - directory served under /static (optional)
//!   SHOWCASE_MAX_UPLOAD_MB   - form body limit (default: 200)

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use achievement_showcase::error::Result as ShowcaseResult;
use achievement_showcase::{create_router, AppState, Catalog, RouterOptions, ServerConfig};

fn load_settings() -> ShowcaseResult<(ServerConfig, Catalog)> {
    let config = ServerConfig::from_env()?;
    let catalog = Catalog::load(config.catalog_path.as_deref())?;
    Ok((config, catalog))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "achievement_showcase=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (config, catalog) = load_settings().context("startup failed")?;
    tracing::info!(
        projects = catalog.projects().len(),
        awards = catalog.awards().len(),
        source = config
            .catalog_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "builtin".to_string()),
        "Catalog loaded"
    );

    let app = create_router(AppState::new(catalog), RouterOptions::from(&config));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("showcase_server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
