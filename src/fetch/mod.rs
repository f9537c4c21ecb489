//! # Parallel Fetch Orchestrator
//!
//! Fans out fetches for N independent keys and collects the successes.
//! Failed or missing items are logged and dropped; they never abort sibling
//! fetches and never fail the overall call. Callers that need to know about
//! partial failure inspect logs or accept best-effort semantics.
//!
//! The fan-out strategy is an explicit function of input cardinality so the
//! zero/one/many cases stay independently testable: an empty input touches
//! no machinery, a single item is awaited inline, and two or more items go
//! through a bounded concurrent stream.
//!
//! The same contract serves both levels of the pipeline: chapters within a
//! topic and modules within a chapter.

use crate::error::Result;
use futures::stream::{self, StreamExt};
use std::future::Future;
use tracing::{debug, warn};

/// Fan-out strategy chosen by input cardinality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPlan {
    /// No items: return immediately
    Empty,

    /// One item: await inline in the caller's task
    Direct,

    /// Two or more items: bounded concurrent fan-out with the given width
    Pooled(usize),
}

impl FetchPlan {
    /// Pick the strategy for `count` items under a concurrency cap
    pub fn for_items(count: usize, max_parallel: usize) -> Self {
        match count {
            0 => FetchPlan::Empty,
            1 => FetchPlan::Direct,
            n => FetchPlan::Pooled(n.min(max_parallel.max(1))),
        }
    }
}

/// Fetch every item, keeping only the successes.
///
/// `fetch_one` returns `Ok(Some(v))` on success, `Ok(None)` for "no
/// content", and `Err` on failure; the latter two are omitted from the
/// result. Result order is stable: it follows input order regardless of
/// completion order.
pub async fn fetch_many<K, V, F, Fut>(items: Vec<K>, max_parallel: usize, fetch_one: F) -> Vec<V>
where
    K: std::fmt::Debug,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<Option<V>>>,
{
    match FetchPlan::for_items(items.len(), max_parallel) {
        FetchPlan::Empty => Vec::new(),
        FetchPlan::Direct => {
            let Some(item) = items.into_iter().next() else {
                return Vec::new();
            };
            let label = format!("{:?}", item);
            match fetch_one(item).await {
                Ok(Some(value)) => vec![value],
                Ok(None) => {
                    debug!("no content for {}", label);
                    Vec::new()
                }
                Err(e) => {
                    warn!("fetch failed for {}: {}", label, e);
                    Vec::new()
                }
            }
        }
        FetchPlan::Pooled(width) => {
            debug!("fanning out {} fetches (width {})", items.len(), width);

            let results: Vec<(String, Result<Option<V>>)> = stream::iter(items)
                .map(|item| {
                    let label = format!("{:?}", item);
                    let fut = fetch_one(item);
                    async move { (label, fut.await) }
                })
                .buffered(width)
                .collect()
                .await;

            let mut values = Vec::with_capacity(results.len());
            for (label, result) in results {
                match result {
                    Ok(Some(value)) => values.push(value),
                    Ok(None) => debug!("no content for {}", label),
                    Err(e) => warn!("fetch failed for {}: {}", label, e),
                }
            }
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_plan_selection() {
        assert_eq!(FetchPlan::for_items(0, 8), FetchPlan::Empty);
        assert_eq!(FetchPlan::for_items(1, 8), FetchPlan::Direct);
        assert_eq!(FetchPlan::for_items(3, 8), FetchPlan::Pooled(3));
        assert_eq!(FetchPlan::for_items(20, 8), FetchPlan::Pooled(8));
        // A zero cap still yields a usable width
        assert_eq!(FetchPlan::for_items(2, 0), FetchPlan::Pooled(1));
    }

    #[tokio::test]
    async fn test_empty_input_returns_empty() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls2 = calls.clone();

        let results: Vec<String> = fetch_many(Vec::<String>::new(), 8, |_| {
            let calls = calls2.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(Some("unreachable".to_string()))
            }
        })
        .await;

        assert!(results.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_single_item_fetched_inline() {
        let results = fetch_many(vec!["only"], 8, |item| async move {
            Ok(Some(format!("content for {}", item)))
        })
        .await;

        assert_eq!(results, vec!["content for only".to_string()]);
    }

    #[tokio::test]
    async fn test_all_successes_returned_once_each() {
        let items = vec!["a", "b", "c", "d"];
        let results = fetch_many(items.clone(), 8, |item| async move {
            Ok(Some(item.to_string()))
        })
        .await;

        assert_eq!(results.len(), items.len());
        for item in items {
            assert_eq!(results.iter().filter(|r| r.as_str() == item).count(), 1);
        }
    }

    #[tokio::test]
    async fn test_partial_failure_drops_only_failed_item() {
        let results = fetch_many(vec![1, 2, 3], 8, |n| async move {
            if n == 2 {
                Err(ContentError::Other("simulated failure".to_string()))
            } else {
                Ok(Some(n * 10))
            }
        })
        .await;

        assert_eq!(results, vec![10, 30]);
    }

    #[tokio::test]
    async fn test_none_results_filtered() {
        let results = fetch_many(vec!["a", "missing", "b"], 8, |item| async move {
            if item == "missing" {
                Ok(None)
            } else {
                Ok(Some(item.to_string()))
            }
        })
        .await;

        assert_eq!(results, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_results_follow_input_order() {
        // Later items complete first; output order must still match input
        let results = fetch_many(vec![30u64, 20, 10], 8, |delay| async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(Some(delay))
        })
        .await;

        assert_eq!(results, vec![30, 20, 10]);
    }

    #[tokio::test]
    async fn test_fan_out_runs_concurrently() {
        // Three 50ms fetches should finish well under 150ms sequential time
        let start = std::time::Instant::now();
        let results = fetch_many(vec!["ch1", "ch2", "ch3"], 8, |item| async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(Some(item.to_string()))
        })
        .await;
        let elapsed = start.elapsed();

        assert_eq!(results.len(), 3);
        assert!(
            elapsed < Duration::from_millis(140),
            "fan-out took {:?}, expected < 140ms",
            elapsed
        );
    }
}
