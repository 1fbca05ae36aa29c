use std::sync::Arc;

use face_yoga::api::routes::create_routes;
use face_yoga::config::{AppConfig, CatalogSeeder};
use face_yoga::repository::InMemoryStore;
use face_yoga::services::ExerciseService;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let store = Arc::new(InMemoryStore::new());

    if config.seed_demo_data {
        CatalogSeeder::new(ExerciseService::new(store.clone()))
            .seed_all()
            .await?;
    }

    // Create the application routes
    let app = create_routes(store);

    // Start the server
    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Face Yoga API starting on http://{} ({})", address, config.environment);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
