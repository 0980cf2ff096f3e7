mod api;
mod middleware;

use std::sync::Arc;

use jpost_core::{route_table_for, Platform};
use jpost_poster::PlatformPoster;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = jpost_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let routes = route_table_for(&config)?;
    tracing::info!(
        routes = routes.len(),
        source = %config
            .routes_path
            .as_deref()
            .map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
        "route table ready"
    );
    let poster = PlatformPoster::from_app_config(&config)?;
    for platform in Platform::ALL {
        if poster.webhook_url(platform).is_none() {
            tracing::warn!(%platform, "no webhook configured; posts will be reported as failed");
        }
    }

    let app = build_app(AppState {
        routes: Arc::new(routes),
        poster: Arc::new(poster),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "jpost-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
