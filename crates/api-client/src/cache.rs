//! In-memory memoization of fetched price histories.

use crate::MarketDataSource;
use crate::error::ApiError;
use async_trait::async_trait;
use core_types::{FetchedHistory, Interval, Symbol};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

type CacheKey = (Symbol, Interval);

/// Session-scoped memo table of fetch results, keyed by the exact (symbol, interval) pair.
///
/// Entries never expire and are never evicted; the table lives as long as the
/// process and a new process starts cold. Only the raw fetched form is stored,
/// and callers always receive their own copy.
///
/// The lock is not held while fetching. Two concurrent misses on the same key
/// therefore both invoke their fetcher and the last write wins, which is harmless
/// because a fetch is idempotent.
#[derive(Debug, Clone, Default)]
pub struct HistoryCache {
    entries: Arc<RwLock<HashMap<CacheKey, FetchedHistory>>>,
}

impl HistoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored result for `(symbol, interval)`, or runs `fetcher`,
    /// stores its successful result and returns it. Failures are not stored.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        symbol: &Symbol,
        interval: Interval,
        fetcher: F,
    ) -> Result<FetchedHistory, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<FetchedHistory, E>>,
    {
        let key = (symbol.clone(), interval);

        {
            let entries = self.entries.read().await;
            if let Some(hit) = entries.get(&key) {
                tracing::debug!(%symbol, %interval, "history cache hit");
                return Ok(hit.clone());
            }
        }

        tracing::debug!(%symbol, %interval, "history cache miss, fetching");
        let fetched = fetcher().await?;

        self.entries.write().await.insert(key, fetched.clone());
        Ok(fetched)
    }

    pub async fn contains(&self, symbol: &Symbol, interval: Interval) -> bool {
        self.entries
            .read()
            .await
            .contains_key(&(symbol.clone(), interval))
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// A `MarketDataSource` that answers from a `HistoryCache` before asking the inner source.
#[derive(Clone)]
pub struct CachedSource {
    inner: Arc<dyn MarketDataSource>,
    cache: HistoryCache,
}

impl CachedSource {
    pub fn new(inner: Arc<dyn MarketDataSource>, cache: HistoryCache) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &HistoryCache {
        &self.cache
    }
}

#[async_trait]
impl MarketDataSource for CachedSource {
    async fn fetch(
        &self,
        symbol: &Symbol,
        interval: Interval,
    ) -> Result<FetchedHistory, ApiError> {
        self.cache
            .get_or_fetch(symbol, interval, || self.inner.fetch(symbol, interval))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::{InstrumentMetadata, PriceHistory, PricePoint};
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fetched(symbol: &Symbol, interval: Interval) -> FetchedHistory {
        let point = PricePoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            open: dec!(10),
            high: dec!(11),
            low: dec!(9),
            close: dec!(10.5),
            volume: 100,
        };
        let mut metadata = InstrumentMetadata::new(symbol.clone());
        metadata.current_price = Some(dec!(10.5));
        FetchedHistory {
            history: PriceHistory::new(symbol.clone(), interval, vec![point]).unwrap(),
            metadata,
        }
    }

    struct CountingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MarketDataSource for CountingSource {
        async fn fetch(
            &self,
            symbol: &Symbol,
            interval: Interval,
        ) -> Result<FetchedHistory, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if symbol.as_str() == "DOWN" {
                return Err(ApiError::DataSourceUnavailable("timeout".to_string()));
            }
            Ok(fetched(symbol, interval))
        }
    }

    #[tokio::test]
    async fn hit_does_not_invoke_fetcher() {
        let cache = HistoryCache::new();
        let aapl = Symbol::parse("AAPL").unwrap();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let result = cache
                .get_or_fetch(&aapl, Interval::OneYear, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, ApiError>(fetched(&aapl, Interval::OneYear))
                })
                .await
                .unwrap();
            assert_eq!(result.history.len(), 1);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn key_includes_interval() {
        let source = CachedSource::new(
            Arc::new(CountingSource {
                calls: AtomicUsize::new(0),
            }),
            HistoryCache::new(),
        );
        let msft = Symbol::parse("MSFT").unwrap();

        source.fetch(&msft, Interval::OneYear).await.unwrap();
        source.fetch(&msft, Interval::Max).await.unwrap();
        source.fetch(&msft, Interval::OneYear).await.unwrap();

        assert_eq!(source.cache().len().await, 2);
        assert!(source.cache().contains(&msft, Interval::Max).await);
        assert!(!source.cache().contains(&msft, Interval::SixMonths).await);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let inner = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
        });
        let source = CachedSource::new(inner.clone(), HistoryCache::new());
        let down = Symbol::parse("DOWN").unwrap();

        for _ in 0..2 {
            let err = source.fetch(&down, Interval::OneYear).await.unwrap_err();
            assert!(matches!(err, ApiError::DataSourceUnavailable(_)));
        }

        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
        assert!(source.cache().is_empty().await);
    }

    #[tokio::test]
    async fn concurrent_misses_may_both_fetch_but_store_one_entry() {
        let cache = HistoryCache::new();
        let spy = Symbol::parse("SPY").unwrap();
        let calls = AtomicUsize::new(0);

        let fetch = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            Ok::<_, ApiError>(fetched(&spy, Interval::FiveYears))
        };

        let (a, b) = tokio::join!(
            cache.get_or_fetch(&spy, Interval::FiveYears, fetch),
            cache.get_or_fetch(&spy, Interval::FiveYears, fetch),
        );

        assert_eq!(a.unwrap(), b.unwrap());
        let n = calls.load(Ordering::SeqCst);
        assert!((1..=2).contains(&n));
        assert_eq!(cache.len().await, 1);
    }
}
