//! Table query builder.
//!
//! Builds PostgREST query strings (`col=eq.value`, `order=col.desc`) and
//! executes select / insert / update against a single table.

use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::{Result, SupabaseClient, SupabaseError};

/// Sort direction for `order=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct EqFilter {
    column: String,
    value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Ordering {
    column: String,
    direction: Direction,
}

/// A pending query against one table.
///
/// Nothing is sent until one of `select`, `maybe_single`, `insert` or
/// `update` is awaited.
pub struct TableQuery<'a> {
    client: &'a SupabaseClient,
    table: String,
    filters: Vec<EqFilter>,
    order: Option<Ordering>,
}

impl<'a> TableQuery<'a> {
    pub(crate) fn new(client: &'a SupabaseClient, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
            filters: Vec::new(),
            order: None,
        }
    }

    /// Add an equality filter (`column=eq.value`).
    pub fn eq(mut self, column: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push(EqFilter {
            column: column.into(),
            value: value.to_string(),
        });
        self
    }

    /// Order results by `column`.
    pub fn order(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order = Some(Ordering {
            column: column.into(),
            direction,
        });
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Query-string pairs for this query, in PostgREST syntax.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        for filter in &self.filters {
            params.push((filter.column.clone(), format!("eq.{}", filter.value)));
        }
        if let Some(order) = &self.order {
            params.push((
                "order".to_string(),
                format!("{}.{}", order.column, order.direction.as_str()),
            ));
        }
        params
    }

    /// Fetch all matching rows.
    ///
    /// An unconfigured client returns no rows without touching the network.
    pub async fn select<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        if !self.client.is_configured() {
            tracing::debug!(table = %self.table, "Supabase not configured, returning no rows");
            return Ok(Vec::new());
        }

        let request = self.request(Method::GET);
        let rows: Vec<T> = self.client.send(request).await?;
        tracing::debug!(table = %self.table, count = rows.len(), "Fetched rows");
        Ok(rows)
    }

    /// Fetch at most one matching row.
    pub async fn maybe_single<T: DeserializeOwned>(self) -> Result<Option<T>> {
        let rows: Vec<T> = self.select().await?;
        Ok(rows.into_iter().next())
    }

    /// Insert one row and return it as stored.
    pub async fn insert<B, T>(self, row: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.require_configured()?;

        let request = self
            .client
            .authorize(self.client.http().post(self.client.table_url(&self.table)))
            .header("Prefer", "return=representation")
            .json(row);
        let rows: Vec<T> = self.client.send(request).await?;
        self.first_row(rows)
    }

    /// Patch every row matching the filters and return the first updated row.
    ///
    /// Fails with `NotFound` when nothing matched.
    pub async fn update<B, T>(self, patch: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.require_configured()?;

        let request = self
            .request(Method::PATCH)
            .header("Prefer", "return=representation")
            .json(patch);
        let rows: Vec<T> = self.client.send(request).await?;
        self.first_row(rows)
    }

    fn request(&self, method: Method) -> RequestBuilder {
        let builder = self
            .client
            .http()
            .request(method, self.client.table_url(&self.table))
            .query(&self.params());
        self.client.authorize(builder)
    }

    fn require_configured(&self) -> Result<()> {
        if self.client.is_configured() {
            Ok(())
        } else {
            Err(SupabaseError::Config(format!(
                "cannot write to {} without SUPABASE_URL and SUPABASE_ANON_KEY",
                self.table
            )))
        }
    }

    fn first_row<T>(&self, rows: Vec<T>) -> Result<T> {
        rows.into_iter().next().ok_or_else(|| SupabaseError::NotFound {
            table: self.table.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &TableQuery<'_>) -> Vec<(String, String)> {
        query.params()
    }

    #[test]
    fn select_all_by_default() {
        let client = SupabaseClient::new("https://db.example.com", "key");
        let query = client.from("members");

        assert_eq!(pairs(&query), vec![("select".into(), "*".into())]);
    }

    #[test]
    fn filters_and_order_use_postgrest_syntax() {
        let client = SupabaseClient::new("https://db.example.com", "key");
        let query = client
            .from("emergency_alerts")
            .eq("status", "active")
            .order("created_at", Direction::Descending);

        assert_eq!(
            pairs(&query),
            vec![
                ("select".into(), "*".into()),
                ("status".into(), "eq.active".into()),
                ("order".into(), "created_at.desc".into()),
            ]
        );
    }

    #[test]
    fn later_order_replaces_earlier() {
        let client = SupabaseClient::new("https://db.example.com", "key");
        let query = client
            .from("pricing_plans")
            .order("created_at", Direction::Descending)
            .order("price", Direction::Ascending);

        assert_eq!(pairs(&query).last(), Some(&("order".into(), "price.asc".into())));
    }

    #[tokio::test]
    async fn unconfigured_select_returns_no_rows() {
        let client = SupabaseClient::new("", "");
        let rows: Vec<serde_json::Value> = client.from("members").select().await.unwrap();

        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn unconfigured_update_is_a_config_error() {
        let client = SupabaseClient::new("https://db.example.com", "   ");
        let result: Result<serde_json::Value> = client
            .from("members")
            .eq("id", "1")
            .update(&serde_json::json!({ "available": false }))
            .await;

        assert!(matches!(result, Err(SupabaseError::Config(_))));
    }
}
