//! Waitlist store backed by Supabase's PostgREST gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::CONTENT_RANGE};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::helpers::url_join::join_under,
    entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    use_cases::waitlist::WaitlistRepo,
};

#[derive(Clone)]
pub struct SupabaseWaitlistRepo {
    client: Client,
    table_url: Url,
    api_key: SecretString,
}

impl SupabaseWaitlistRepo {
    pub fn new(
        base_url: &Url,
        table: &str,
        api_key: SecretString,
        timeout: Duration,
    ) -> AppResult<Self> {
        let table_url = join_under(base_url, &format!("rest/v1/{}", table))
            .map_err(|e| AppError::Internal(format!("invalid Supabase URL: {e}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            table_url,
            api_key,
        })
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        let key = self.api_key.expose_secret();
        self.client
            .request(method, self.table_url.clone())
            .header("apikey", key)
            .bearer_auth(key)
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    if err.is_connect() || err.is_timeout() {
        tracing::warn!(error = %err, "Supabase unreachable");
        AppError::StoreUnavailable("Supabase unreachable".into())
    } else {
        tracing::error!(error = ?err, "Supabase request failed");
        AppError::Database("Supabase request failed".into())
    }
}

fn status_error(status: StatusCode) -> AppError {
    match status {
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY | StatusCode::GATEWAY_TIMEOUT => {
            tracing::warn!(%status, "Supabase gateway unavailable");
            AppError::StoreUnavailable(format!("Supabase returned {status}"))
        }
        _ => {
            tracing::error!(%status, "Supabase rejected request");
            AppError::Database(format!("Supabase returned {status}"))
        }
    }
}

/// Total row count from a PostgREST `Content-Range` header (`0-4/5`, `*/0`).
pub fn parse_content_range_total(value: &str) -> Option<i64> {
    let (_, total) = value.rsplit_once('/')?;
    total.trim().parse().ok()
}

#[async_trait]
impl WaitlistRepo for SupabaseWaitlistRepo {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let resp = self
            .request(reqwest::Method::POST)
            .header("Prefer", "return=representation")
            .json(&[entry])
            .send()
            .await
            .map_err(transport_error)?;

        if !resp.status().is_success() {
            return Err(status_error(resp.status()));
        }

        let mut rows: Vec<WaitlistEntry> = resp.json().await.map_err(|e| {
            tracing::error!(error = ?e, "Unexpected Supabase insert response");
            AppError::Database("Unexpected Supabase response".into())
        })?;

        rows.pop()
            .ok_or_else(|| AppError::Database("Supabase returned no inserted row".into()))
    }

    async fn count(&self) -> AppResult<i64> {
        let resp = self
            .request(reqwest::Method::HEAD)
            .query(&[("select", "*")])
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(transport_error)?;

        if !resp.status().is_success() {
            return Err(status_error(resp.status()));
        }

        resp.headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total)
            .ok_or_else(|| AppError::Database("Supabase response had no row count".into()))
    }
}
