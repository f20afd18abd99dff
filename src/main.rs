use std::sync::Arc;

use room_service::config::{Config, StoreBackend};
use room_service::databases::mongo::MongoDb;
use room_service::routes::{router, AppState};
use room_service::store::{InMemoryRoomStore, MongoRoomStore, RoomStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "room_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut mongo = None;
    let store: Arc<dyn RoomStore> = match config.store {
        StoreBackend::Mongo => {
            let db = MongoDb::connect(&config).await?;
            let store = MongoRoomStore::new(&db);
            mongo = Some(db);
            Arc::new(store)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory room store, data will not survive a restart");
            Arc::new(InMemoryRoomStore::new())
        }
    };

    let app = router(AppState::new(store))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(config.listen_address()).await?;
    info!(address = %config.listen_address(), store = %config.store, "Room service listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = mongo {
        db.client.shutdown().await;
    }
    info!("Room service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
