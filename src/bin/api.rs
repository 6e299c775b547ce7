//! Backend API server: opens the store, mounts health and `/api` routes.

use axum::Router;
use restaurant_manager::{api_health_routes, api_routes, open_pool, AppState, Config};
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
    let pool = open_pool(&config).await?;

    let state = AppState { pool };
    let app = Router::new()
        .merge(api_health_routes(state.clone()))
        .merge(api_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.api_addr).await?;
    tracing::info!("api listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
