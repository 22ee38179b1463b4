use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::{application::helpers::url_join::join_under, client::view_state::WaitlistForm};

const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Errors seen by the client when talking to the waitlist service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required fields were missing (400 with the missing-fields message).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The store is down or not configured (503).
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Any other non-success response.
    #[error("Server error: {status} - {message}")]
    Server { status: StatusCode, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Message suitable for the inline error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::Validation(_) => "Please fill in all required fields.",
            ClientError::Unavailable(_) => "We can't reach the waitlist right now. Please try again later.",
            _ => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JoinResponse {
    pub success: bool,
    pub message: String,
    pub count: i64,
}

#[derive(Deserialize)]
struct CountBody {
    count: i64,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[async_trait]
pub trait WaitlistApi: Send + Sync {
    async fn join(&self, form: &WaitlistForm) -> Result<JoinResponse, ClientError>;
    async fn count(&self) -> Result<i64, ClientError>;
}

/// `WaitlistApi` over HTTP against `{base_url}/api/waitlist`.
pub struct HttpWaitlistApi {
    http_client: Client,
    endpoint: Url,
}

impl HttpWaitlistApi {
    pub fn new(base_url: &Url) -> Result<Self, ClientError> {
        let endpoint = join_under(base_url, "api/waitlist")
            .map_err(|e| ClientError::Config(format!("invalid base URL: {e}")))?;

        Ok(Self {
            http_client: Client::new(),
            endpoint,
        })
    }

    async fn error_from(resp: reqwest::Response) -> ClientError {
        let status = resp.status();
        let message = resp
            .json::<ErrorBody>()
            .await
            .map(|b| b.error)
            .unwrap_or_else(|_| status.to_string());

        classify(status, message)
    }
}

fn classify(status: StatusCode, message: String) -> ClientError {
    match status {
        StatusCode::BAD_REQUEST if message == MISSING_FIELDS_MESSAGE => {
            ClientError::Validation(message)
        }
        StatusCode::SERVICE_UNAVAILABLE => ClientError::Unavailable(message),
        _ => ClientError::Server { status, message },
    }
}

#[async_trait]
impl WaitlistApi for HttpWaitlistApi {
    async fn join(&self, form: &WaitlistForm) -> Result<JoinResponse, ClientError> {
        let resp = self
            .http_client
            .post(self.endpoint.clone())
            .json(form)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::error_from(resp).await);
        }

        Ok(resp.json().await?)
    }

    async fn count(&self) -> Result<i64, ClientError> {
        let resp = self.http_client.get(self.endpoint.clone()).send().await?;

        if !resp.status().is_success() {
            return Err(Self::error_from(resp).await);
        }

        Ok(resp.json::<CountBody>().await?.count)
    }
}
