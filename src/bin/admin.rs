//! Admin frontend server: renders `/admin` pages from backend API calls.

use axum::Router;
use restaurant_manager::{admin_health_routes, admin_routes, AdminState, Config};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("restaurant_manager=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    tokio::fs::create_dir_all(&config.upload_dir).await?;
    let state = AdminState::from_config(&config)?;
    tracing::info!(api_url = %config.api_url, uploads = %config.upload_dir.display(), "admin configured");

    let app = Router::new()
        .merge(admin_health_routes(state.clone()))
        .merge(admin_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.admin_addr).await?;
    tracing::info!("admin listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
