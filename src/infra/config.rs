use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;
use url::Url;

/// Connection details for Supabase's REST gateway.
pub struct SupabaseConfig {
    pub url: Url,
    pub anon_key: SecretString,
}

/// Which store the waitlist is backed by. Postgres wins when both are set.
pub enum StoreConfig {
    Postgres { database_url: String },
    Supabase(SupabaseConfig),
    Unconfigured,
}

impl StoreConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreConfig::Postgres { .. } => "postgres",
            StoreConfig::Supabase(_) => "supabase",
            StoreConfig::Unconfigured => "unconfigured",
        }
    }

    fn resolve(
        database_url: Option<String>,
        supabase_url: Option<String>,
        supabase_anon_key: Option<String>,
    ) -> Self {
        if let Some(database_url) = database_url.filter(|u| !u.is_empty()) {
            return StoreConfig::Postgres { database_url };
        }

        match (supabase_url, supabase_anon_key) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => {
                match Url::parse(&url) {
                    Ok(url) => StoreConfig::Supabase(SupabaseConfig {
                        url,
                        anon_key: SecretString::new(key.into()),
                    }),
                    Err(err) => {
                        tracing::warn!(error = %err, "SUPABASE_URL is not a valid URL, ignoring");
                        StoreConfig::Unconfigured
                    }
                }
            }
            _ => StoreConfig::Unconfigured,
        }
    }
}

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub store: StoreConfig,
    pub database_max_connections: u32,
    pub database_acquire_timeout_secs: u64,
    /// Apply the embedded migrations on startup (Postgres only).
    pub run_migrations: bool,
    /// Table exposed by the Supabase gateway.
    pub waitlist_table: String,
    /// Request timeout for the Supabase gateway.
    pub store_timeout_secs: u64,
    pub log_file: String,
}

impl AppConfig {
    /// Log file path, readable before the rest of the config so tracing
    /// is up when config warnings are emitted.
    pub fn log_file_from_env() -> String {
        get_env_default("LOG_FILE", "app.log".to_string())
    }

    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        // All store settings are optional: a missing store degrades the
        // service instead of preventing startup.
        let store = StoreConfig::resolve(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("SUPABASE_URL").ok(),
            std::env::var("SUPABASE_ANON_KEY").ok(),
        );

        let database_max_connections: u32 = get_env_default("DATABASE_MAX_CONNECTIONS", 5);
        let database_acquire_timeout_secs: u64 = get_env_default("DATABASE_ACQUIRE_TIMEOUT_SECS", 5);
        let run_migrations: bool = get_env_default("RUN_MIGRATIONS", false);
        let waitlist_table: String = get_env_default("WAITLIST_TABLE", "waitlist".to_string());
        let store_timeout_secs: u64 = get_env_default("STORE_TIMEOUT_SECS", 10);
        let log_file = Self::log_file_from_env();

        Self {
            bind_addr,
            cors_origin,
            store,
            database_max_connections,
            database_acquire_timeout_secs,
            run_migrations,
            waitlist_table,
            store_timeout_secs,
            log_file,
        }
    }
}
