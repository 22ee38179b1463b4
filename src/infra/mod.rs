use std::sync::Arc;
use std::time::Duration;

use crate::{
    adapters::{persistence::PostgresPersistence, supabase::SupabaseWaitlistRepo},
    infra::{
        config::{AppConfig, StoreConfig},
        db::init_db,
    },
    use_cases::waitlist::WaitlistRepo,
};

pub mod app;
pub mod config;
pub mod db;
pub mod setup;

pub async fn postgres_persistence(
    database_url: &str,
    config: &AppConfig,
) -> anyhow::Result<PostgresPersistence> {
    let pool = init_db(
        database_url,
        config.database_max_connections,
        Duration::from_secs(config.database_acquire_timeout_secs),
        config.run_migrations,
    )
    .await?;
    let persistence = PostgresPersistence::new(pool);
    Ok(persistence)
}

/// Builds the configured waitlist store, or `None` when none is configured.
pub async fn waitlist_repo(config: &AppConfig) -> anyhow::Result<Option<Arc<dyn WaitlistRepo>>> {
    let repo: Arc<dyn WaitlistRepo> = match &config.store {
        StoreConfig::Postgres { database_url } => {
            Arc::new(postgres_persistence(database_url, config).await?)
        }
        StoreConfig::Supabase(supabase) => Arc::new(SupabaseWaitlistRepo::new(
            &supabase.url,
            &config.waitlist_table,
            supabase.anon_key.clone(),
            Duration::from_secs(config.store_timeout_secs),
        )?),
        StoreConfig::Unconfigured => {
            tracing::warn!(
                "No waitlist store configured (set DATABASE_URL or SUPABASE_URL and SUPABASE_ANON_KEY); signups will be rejected with 503"
            );
            return Ok(None);
        }
    };

    tracing::info!(store = config.store.kind(), "Waitlist store configured");
    Ok(Some(repo))
}
