use potholemap::config::Config;
use potholemap::services::pipeline::Dashboard;
use potholemap::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "potholemap=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting pothole map dashboard");
    tracing::info!("Configuration loaded successfully");

    // Load both datasets and draw the map once; a failure here stops startup
    tracing::info!(
        "Loading routes from {} and potholes from {}",
        config.routes_csv_path.display(),
        config.pothole_csv_path.display()
    );
    let dashboard = Dashboard::load(&config).map_err(|e| {
        tracing::error!("Failed to load datasets: {}", e);
        e
    })?;
    tracing::info!(
        "Dashboard ready: {} markers, {} pothole rows",
        dashboard.map.markers().len(),
        dashboard.datasets.potholes.len()
    );

    let state = Arc::new(AppState {
        dashboard,
        table_labels: config.table_labels,
    });

    // Build router with CORS and tracing
    let app = potholemap::routes::create_app(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
