use std::{env, time::Duration};

use configs::DatabaseConfig;
use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

pub static DATABASE_URL: Lazy<Option<String>> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").ok()
});

/// A usable database URL, or an error naming the missing variable.
pub fn require_database_url(url: Option<&str>) -> anyhow::Result<String> {
    match url.map(str::trim) {
        Some(u) if !u.is_empty() => Ok(u.to_string()),
        _ => Err(anyhow::anyhow!("DATABASE_URL is not set")),
    }
}

/// Connect with pool defaults using `DATABASE_URL`.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let url = require_database_url(DATABASE_URL.as_deref())?;
    let cfg = DatabaseConfig { url, ..DatabaseConfig::default() };
    connect_with_config(&cfg).await
}

/// Connect using pool sizing and timeouts from configuration.
///
/// In-memory SQLite databases live and die with their connection, so the pool
/// is pinned to one connection that is never reaped or recycled.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    let in_memory = cfg.url.contains(":memory:");
    let (max, min) = if in_memory { (1, 1) } else { (cfg.max_connections, cfg.min_connections) };
    opts.max_connections(max)
        .min_connections(min)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    // idle/lifetime recycling would swap in a fresh, empty in-memory database
    if !in_memory {
        opts.idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }

    let db = Database::connect(opts).await?;
    info!(backend = ?db.get_database_backend(), max_connections = max, "database connected");
    Ok(db)
}
