//! Axum web server for the portfolio site.

mod routes;
pub mod pages;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::sources::{BlueskyClient, CmsClient, YouTubeClient};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cms: Arc<CmsClient>,
    pub youtube: Arc<YouTubeClient>,
    pub bluesky: Arc<BlueskyClient>,
}

impl AppState {
    /// Build the state with platform clients configured from `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let cms = CmsClient::new(&config.content_api_url, &config.content_api_token);
        let youtube = YouTubeClient::new(
            &config.youtube_api_url,
            &config.youtube_api_key,
            &config.youtube_channel_id,
        );
        let bluesky = BlueskyClient::new(&config.bluesky_service);

        Self {
            config: Arc::new(config),
            cms: Arc::new(cms),
            youtube: Arc::new(youtube),
            bluesky: Arc::new(bluesky),
        }
    }
}

/// Build the application router with all middleware applied.
#[must_use]
pub fn create_app(state: AppState) -> axum::Router {
    routes::router()
        .nest_service("/static", ServeDir::new(find_static_dir()))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Find the static files directory.
///
/// Checks in order:
/// 1. ./static (development)
/// 2. /usr/share/portfolio-site/static (installed)
/// 3. Falls back to ./static
fn find_static_dir() -> PathBuf {
    let candidates = [
        PathBuf::from("./static"),
        PathBuf::from("/usr/share/portfolio-site/static"),
    ];

    for path in &candidates {
        if path.exists() && path.is_dir() {
            return path.clone();
        }
    }

    PathBuf::from("./static")
}

/// Start the web server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn serve(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let state = AppState::new(config);
    let app = create_app(state);

    info!(addr = %addr, "Starting web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app).await.context("Web server error")?;

    Ok(())
}
