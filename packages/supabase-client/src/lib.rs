//! Minimal Supabase REST client.
//!
//! Talks to the PostgREST endpoint (`/rest/v1/{table}`) of a Supabase
//! project using the anonymous key. Supports filtered/ordered selects,
//! inserts and updates returning the written row.
//!
//! A client built with an empty URL or key is still usable: reads return no
//! rows and writes fail with [`SupabaseError::Config`].
//!
//! # Example
//!
//! ```rust,ignore
//! use supabase_client::{Direction, SupabaseClient};
//!
//! let client = SupabaseClient::new(url, anon_key);
//!
//! let alerts: Vec<Alert> = client
//!     .from("emergency_alerts")
//!     .eq("status", "active")
//!     .order("created_at", Direction::Descending)
//!     .select()
//!     .await?;
//! ```

pub mod error;
pub mod query;

pub use error::{Result, SupabaseError};
pub use query::{Direction, TableQuery};

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// Supabase PostgREST client.
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(
        url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            ..Self::new(url, anon_key)
        })
    }

    /// Whether both the URL and the key are present.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Start a query against `table`.
    pub fn from(&self, table: &str) -> TableQuery<'_> {
        TableQuery::new(self, table)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
    }

    pub(crate) async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let resp = request.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Supabase request failed");
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
