use anyhow::{Context, Result};
use axum::http::HeaderValue;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Empty when running without a data service (fallback data only)
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub port: u16,
    pub query_stale_after: Duration,
    pub request_timeout: Duration,
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            supabase_url: lookup("SUPABASE_URL").unwrap_or_default(),
            supabase_anon_key: lookup("SUPABASE_ANON_KEY").unwrap_or_default(),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            query_stale_after: Duration::from_secs(
                lookup("QUERY_STALE_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .context("QUERY_STALE_SECS must be a whole number of seconds")?,
            ),
            request_timeout: Duration::from_secs(
                lookup("REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|| "10".to_string())
                    .parse()
                    .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            allowed_origins: parse_origins(lookup("ALLOWED_ORIGINS").as_deref().unwrap_or(""))?,
        })
    }

    /// Whether both data service values are present
    pub fn has_data_service(&self) -> bool {
        !self.supabase_url.trim().is_empty() && !self.supabase_anon_key.trim().is_empty()
    }
}

/// Comma-separated origins; each must be a valid header value so CORS never
/// ends up with an empty allow list.
fn parse_origins(raw: &str) -> Result<Vec<String>> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| -> Result<String> {
            HeaderValue::from_str(o)
                .with_context(|| format!("ALLOWED_ORIGINS contains an invalid origin: {:?}", o))?;
            Ok(o.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_data_service() {
        let config = config(&[]).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.query_stale_after, Duration::from_secs(30));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.allowed_origins.is_empty());
        assert!(!config.has_data_service());
    }

    #[test]
    fn reads_data_service_and_origins() {
        let config = config(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("ALLOWED_ORIGINS", "https://a.nz, ,https://b.nz"),
        ])
        .unwrap();

        assert!(config.has_data_service());
        assert_eq!(config.allowed_origins, vec!["https://a.nz", "https://b.nz"]);
    }

    #[test]
    fn invalid_origin_is_an_error() {
        let err = config(&[("ALLOWED_ORIGINS", "https://a.nz,https://b\u{7f}.nz")]).unwrap_err();

        assert!(err.to_string().contains("ALLOWED_ORIGINS"));
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = config(&[("PORT", "eighty")]).unwrap_err();

        assert!(err.to_string().contains("PORT"));
    }
}
