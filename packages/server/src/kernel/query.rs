//! Query - cached fetch state for one category
//!
//! Holds the latest `FetchState<T>` in a watch channel so readers always see
//! the most recent snapshot and subscribers wake on every transition.
//!
//! - `is_loading` is only true until the first fetch settles; later
//!   re-fetches keep the previous snapshot visible.
//! - A failed re-fetch records the error but keeps the previous records.
//! - Results of a fetch superseded by a newer one are dropped.

use std::future::Future;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::common::{Category, FetchError, FetchState};

pub struct Query<T> {
    category: Category,
    state: watch::Sender<FetchState<T>>,
    /// Id of the most recently started fetch
    generation: AtomicU64,
    in_flight: AtomicUsize,
    created: Instant,
    /// Millis since `created` at which the last fetch settled, 0 = never
    settled_at_ms: AtomicU64,
}

impl<T: Clone + Send + Sync> Query<T> {
    pub fn new(category: Category) -> Self {
        let (state, _) = watch::channel(FetchState::pending());
        Self {
            category,
            state,
            generation: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            created: Instant::now(),
            settled_at_ms: AtomicU64::new(0),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Latest snapshot.
    pub fn snapshot(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state.subscribe()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Whether the last settled fetch is older than `stale_after`.
    ///
    /// A query that is loading or already fetching is never stale.
    pub fn is_stale(&self, stale_after: Duration) -> bool {
        if self.is_fetching() || self.state.borrow().is_loading {
            return false;
        }
        let settled = self.settled_at_ms.load(Ordering::SeqCst);
        let now = self.elapsed_ms();
        settled == 0 || now.saturating_sub(settled) >= stale_after.as_millis() as u64
    }

    /// Run `fetcher` and publish its outcome.
    pub async fn fetch<F, Fut>(&self, fetcher: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let in_flight = InFlight::enter(&self.in_flight);
        debug!(category = %self.category, generation, "Fetching");

        let result = fetcher().await;
        drop(in_flight);

        if let Err(e) = &result {
            warn!(category = %self.category, error = %e, "Fetch failed");
        }

        let published = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            match result {
                Ok(records) => {
                    debug!(category = %self.category, count = records.len(), "Fetch succeeded");
                    state.records = Some(records);
                    state.error = None;
                }
                Err(e) => {
                    state.error = Some(FetchError::from(&e));
                }
            }
            state.is_loading = false;
            true
        });

        if published {
            self.settled_at_ms
                .store(self.elapsed_ms().max(1), Ordering::SeqCst);
        } else {
            debug!(category = %self.category, generation, "Discarding superseded fetch result");
        }
    }

    fn elapsed_ms(&self) -> u64 {
        self.created.elapsed().as_millis() as u64
    }
}

/// Counts one running fetch; released on drop so a cancelled fetch is not
/// left counted.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[tokio::test]
    async fn starts_loading() {
        let query: Query<u32> = Query::new(Category::Members);

        assert_eq!(query.snapshot(), FetchState::pending());
        assert!(!query.is_stale(Duration::ZERO));
    }

    #[tokio::test]
    async fn success_clears_loading() {
        let query = Query::new(Category::Members);
        query.fetch(|| async { Ok(vec![1, 2]) }).await;

        assert_eq!(query.snapshot(), FetchState::loaded(vec![1, 2]));
    }

    #[tokio::test]
    async fn failed_refetch_keeps_previous_records() {
        let query = Query::new(Category::PricingPlans);
        query.fetch(|| async { Ok(vec![7]) }).await;
        query.fetch(|| async { Err(anyhow!("timeout")) }).await;

        let state = query.snapshot();
        assert_eq!(state.records, Some(vec![7]));
        assert!(!state.is_loading);
        assert_eq!(state.error, Some(FetchError::new("timeout")));
    }

    #[tokio::test]
    async fn superseded_result_is_discarded() {
        let query = std::sync::Arc::new(Query::new(Category::EmergencyAlerts));
        let (release, wait) = tokio::sync::oneshot::channel::<()>();

        let slow = {
            let query = query.clone();
            tokio::spawn(async move {
                query
                    .fetch(|| async move {
                        let _ = wait.await;
                        Ok(vec!["old"])
                    })
                    .await;
            })
        };
        while !query.is_fetching() {
            tokio::task::yield_now().await;
        }

        query.fetch(|| async { Ok(vec!["new"]) }).await;
        let _ = release.send(());
        slow.await.unwrap();

        assert_eq!(query.snapshot().records, Some(vec!["new"]));
    }

    #[tokio::test]
    async fn subscribers_see_transitions() {
        let query = Query::new(Category::Members);
        let mut rx = query.subscribe();

        query.fetch(|| async { Ok(vec![3]) }).await;

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().records, Some(vec![3]));
    }

    #[tokio::test]
    async fn cancelled_fetch_is_not_left_in_flight() {
        let query = Query::new(Category::Members);
        query.fetch(|| async { Ok(vec![1]) }).await;

        let cancelled = tokio::time::timeout(
            Duration::from_millis(10),
            query.fetch(|| async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(vec![2])
            }),
        )
        .await;

        assert!(cancelled.is_err());
        assert!(!query.is_fetching());
        assert!(query.is_stale(Duration::ZERO));
        assert_eq!(query.snapshot().records, Some(vec![1]));

        query.fetch(|| async { Ok(vec![3]) }).await;
        assert_eq!(query.snapshot().records, Some(vec![3]));
    }

    #[tokio::test]
    async fn settled_query_goes_stale() {
        let query = Query::new(Category::Members);
        query.fetch(|| async { Ok(vec![1]) }).await;

        assert!(query.is_stale(Duration::ZERO));
        assert!(!query.is_stale(Duration::from_secs(3600)));
    }
}
