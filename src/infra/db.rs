use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

/// Creates the Postgres pool without connecting. Connections are opened on
/// first use, so a database that is down at startup surfaces per request as
/// an unavailable store rather than a failed boot.
pub async fn init_db(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
    run_migrations: bool,
) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_lazy(database_url)
        .map_err(|e| anyhow::anyhow!("Invalid DATABASE_URL: {e}"))?;

    if run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| anyhow::anyhow!("Postgres migration failed (check DATABASE_URL/password): {e}"))?;
        info!("Database migrations applied");
    }

    info!("Database pool ready");
    Ok(pool)
}
