//! # TTL-Based Caching Layer
//!
//! Generic key→(value, timestamp) store with expiry checked lazily on read.
//!
//! Two independent instances back the retrieval pipeline:
//! - the learner-context cache (single fixed key, short TTL), and
//! - the per-module content cache (composite `(module id, parse flag)` keys).
//!
//! The caches promise no transactional isolation: two callers resolving the
//! same expired key may both recompute and both write, and the last write
//! wins. That duplicate work is a bounded, rare cost, not a correctness
//! violation, because cached values are pure functions of their keys.

pub mod entry;
pub mod store;

pub use entry::CacheEntry;
pub use store::{CacheStats, TtlCache};
