//! FetchState - snapshot of one category's remote read
//!
//! Mirrors the tri-state shape a data-fetching layer hands to the UI:
//! the last records received (if any), whether the first fetch is still in
//! flight, and the last error (if any).

use thiserror::Error;

/// Error recorded in a fetch snapshot.
///
/// Cloneable so snapshots can be shared through watch channels; only the
/// rendered message of the underlying error is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&anyhow::Error> for FetchError {
    fn from(err: &anyhow::Error) -> Self {
        Self::new(format!("{:#}", err))
    }
}

impl From<anyhow::Error> for FetchError {
    fn from(err: anyhow::Error) -> Self {
        Self::from(&err)
    }
}

/// What a snapshot says about the data behind it.
///
/// The resolver collapses `Failed` and `Empty` into the same fallback output;
/// the distinction is kept here for callers that want to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// First fetch still in flight
    NotLoaded,
    /// At least one record is present
    Live,
    /// Fetch failed and nothing usable was returned
    Failed,
    /// Fetch succeeded with zero records, or never ran
    Empty,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::NotLoaded => "not_loaded",
            Availability::Live => "live",
            Availability::Failed => "failed",
            Availability::Empty => "empty",
        }
    }
}

/// Latest state of one category's remote read.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub records: Option<Vec<T>>,
    pub is_loading: bool,
    pub error: Option<FetchError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::pending()
    }
}

impl<T> FetchState<T> {
    /// Nothing received yet, first fetch in flight.
    pub fn pending() -> Self {
        Self {
            records: None,
            is_loading: true,
            error: None,
        }
    }

    /// Fetch settled without producing anything (e.g. torn down).
    pub fn idle() -> Self {
        Self {
            records: None,
            is_loading: false,
            error: None,
        }
    }

    pub fn loaded(records: Vec<T>) -> Self {
        Self {
            records: Some(records),
            is_loading: false,
            error: None,
        }
    }

    pub fn failed(error: FetchError) -> Self {
        Self {
            records: None,
            is_loading: false,
            error: Some(error),
        }
    }

    /// Classify this snapshot. Loading beats records, records beat errors.
    pub fn availability(&self) -> Availability {
        if self.is_loading {
            return Availability::NotLoaded;
        }
        match &self.records {
            Some(records) if !records.is_empty() => Availability::Live,
            _ if self.error.is_some() => Availability::Failed,
            _ => Availability::Empty,
        }
    }
}
