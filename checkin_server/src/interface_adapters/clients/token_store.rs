use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::domain::entities::TokenRecord;
use crate::domain::ports::TokenStore;

// Thin reqwest client for a PostgREST-style table insert endpoint.
#[derive(Clone)]
pub struct HttpTokenStore {
    http: Client,
    base_url: String,
    table: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StoreErrorResponse {
    message: String,
}

#[derive(Debug)]
pub enum StoreClientError {
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
}

impl fmt::Display for StoreClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreClientError::Transport(err) => write!(f, "store transport error: {err}"),
            StoreClientError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "store upstream error {status}: {message}")
                } else {
                    write!(f, "store upstream error {status}")
                }
            }
        }
    }
}

impl std::error::Error for StoreClientError {}

impl HttpTokenStore {
    pub fn new(
        base_url: impl Into<String>,
        table: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            table: table.into(),
            api_key,
        })
    }

    pub fn insert_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    async fn post_record(&self, record: &TokenRecord) -> Result<(), StoreClientError> {
        let mut request = self
            .http
            .post(self.insert_url())
            .header("Prefer", "return=minimal")
            .json(&[record]);
        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {key}"));
        }

        let res = request.send().await.map_err(StoreClientError::Transport)?;
        let status = res.status();

        // Keep the upstream message so operators can see why a row was refused.
        if !status.is_success() {
            let message = res
                .json::<StoreErrorResponse>()
                .await
                .ok()
                .map(|payload| payload.message);
            return Err(StoreClientError::Upstream { status, message });
        }

        Ok(())
    }
}

#[async_trait]
impl TokenStore for HttpTokenStore {
    async fn insert(&self, record: TokenRecord) -> Result<(), String> {
        self.post_record(&record).await.map_err(|err| {
            tracing::warn!(token_id = %record.id, error = %err, "token store insert failed");
            err.to_string()
        })
    }
}
