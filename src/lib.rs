//! # OpenStax Retrieval (openstax-retrieval)
//!
//! Content retrieval and caching layer for personalized learning agents
//! built on the OpenStax *Biology for AP Courses* textbook.
//!
//! ## Features
//!
//! - TTL caching for module content and learner context (independent caches)
//! - Multi-tier source fallback (local files, cloud bucket, public mirror)
//! - Bounded parallel fetching with partial-failure tolerance
//! - Deterministic keyword topic matching with a generative fallback
//! - Chapter citations pointing at the public web edition
//!
//! ## Fetching content for a topic
//!
//! ```no_run
//! use openstax_retrieval::{
//!     Catalog, ContentService, GeminiRanker, RetrievalConfig, TopicMatcher,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = RetrievalConfig::from_env();
//!     config.validate()?;
//!
//!     let catalog = Arc::new(Catalog::load()?);
//!     let ranker = Arc::new(GeminiRanker::new(
//!         config.gemini_api_key.clone(),
//!         config.model.clone(),
//!         catalog.clone(),
//!         config.http_timeout,
//!     )?);
//!     let matcher = TopicMatcher::new(catalog.clone(), ranker);
//!     let service = ContentService::with_default_sources(&config, catalog, matcher);
//!
//!     let result = service.content_for_topic("ATP hydrolysis", 2).await?;
//!     println!("matched: {:?}", result.matched_chapters);
//!     Ok(())
//! }
//! ```
//!
//! ## Assembling learner context
//!
//! ```no_run
//! use openstax_retrieval::{ContextBuilder, RetrievalConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = RetrievalConfig::from_env();
//!     let builder = ContextBuilder::new(&config);
//!     let context = builder.combined().await;
//!     println!("{} bytes of learner context", context.len());
//! }
//! ```

pub mod cache;
pub mod catalog;
pub mod config;
pub mod content;
pub mod context;
pub mod error;
pub mod fetch;
pub mod matcher;
pub mod parse;
pub mod source;

pub use cache::{CacheEntry, CacheStats, TtlCache};
pub use catalog::Catalog;
pub use config::RetrievalConfig;
pub use content::{ChapterRecord, ContentService, ModuleKey, SourceRef, TopicContent};
pub use context::ContextBuilder;
pub use error::{ContentError, Result};
pub use fetch::{fetch_many, FetchPlan};
pub use matcher::{ChapterRanker, GeminiRanker, TopicMatcher};
pub use source::{BucketSource, MirrorSource, ModuleSource, SourceChain};
