use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{routes, state::ServerState};
use service::store::{SeaOrmStoreRepository, StoreService};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Assemble the router around an already-built store service.
pub fn build_app(stores: Arc<StoreService>, auth: configs::AuthConfig) -> Router {
    let state = ServerState::new(stores, auth);
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: connect the database, build the app and run the HTTP server
/// until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!("database migrations applied");
    }

    let repo = Arc::new(SeaOrmStoreRepository { db });
    let stores = Arc::new(StoreService::new(repo));
    if cfg.auth.bearer_token.is_some() {
        info!("bearer token required for /api/store");
    }
    let app = build_app(stores, cfg.auth.clone());

    let listener = tokio::net::TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting store api");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
