//! Error types for the Supabase client.

use thiserror::Error;

/// Result type for Supabase client operations.
pub type Result<T> = std::result::Result<T, SupabaseError>;

/// Supabase client errors.
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Client is missing its URL or API key
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from PostgREST
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A write targeted a row that does not exist
    #[error("No matching row in {table}")]
    NotFound { table: String },

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SupabaseError {
    /// True for failures caused by the remote side or the transport.
    pub fn is_remote(&self) -> bool {
        matches!(self, SupabaseError::Network(_) | SupabaseError::Api { .. })
    }
}
