use anyhow::Result;
use shared::{get_db_connection, Config, WatchlistStore};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use api::routes;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting watchlist API server...");

    let config = Config::from_env()?;
    let db = get_db_connection(&config.database_url).await?;
    let store = WatchlistStore::new(db);
    store.init_schema().await?;
    info!("Connected to database");

    // Setup static file serving for the dashboard
    let static_dir = std::path::Path::new(&config.static_dir);
    info!("Serving dashboard from: {:?}", static_dir);

    // Ensure the static directory exists
    if let Err(e) = std::fs::create_dir_all(static_dir) {
        error!("Failed to create static directory: {}", e);
    }

    let app = routes::router(store)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.api_host, config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
