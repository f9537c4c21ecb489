//! # Content Service
//!
//! The front door of the retrieval layer. Resolves textbook content at
//! three granularities:
//!
//! - **Module**: the smallest fetchable unit, resolved through the source
//!   chain and cached per `(module_id, parsed)` key
//! - **Chapter**: a titled group of modules, assembled with a bounded
//!   parallel fan-out over its module list
//! - **Topic**: free text matched to chapters, then fetched as a batch
//!
//! Absence is never cached: a module the chain cannot resolve today is
//! retried on the next request. A chapter with some unresolved modules is
//! still returned; the gaps are logged, not fatal.

use crate::cache::TtlCache;
use crate::catalog::Catalog;
use crate::config::RetrievalConfig;
use crate::error::Result;
use crate::fetch::fetch_many;
use crate::matcher::TopicMatcher;
use crate::parse::strip_markup;
use crate::source::{BucketSource, MirrorSource, SourceChain};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Cache key for module content: the parse flag is part of the identity so
/// raw and cleaned text never shadow each other
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleKey {
    pub module_id: String,
    pub parsed: bool,
}

impl ModuleKey {
    pub fn new(module_id: impl Into<String>, parsed: bool) -> Self {
        Self {
            module_id: module_id.into(),
            parsed,
        }
    }
}

/// Citation pointing at the public web edition of a chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRef {
    pub url: String,
    pub title: String,
}

/// A chapter with its assembled text content
#[derive(Debug, Clone, Serialize)]
pub struct ChapterRecord {
    pub slug: String,
    pub title: String,
    pub citation_url: String,
    pub module_ids: Vec<String>,
    pub content: String,
}

/// Result of a topic-level content request
#[derive(Debug, Clone, Serialize)]
pub struct TopicContent {
    pub matched_chapters: Vec<String>,
    pub combined_content: String,
    pub sources: Vec<SourceRef>,
}

/// Build the standard module source chain: bucket first, mirror second
pub fn default_source_chain(config: &RetrievalConfig) -> SourceChain {
    SourceChain::new(vec![
        Box::new(BucketSource::new(
            config.context_bucket.clone(),
            config.module_prefix.clone(),
            config.http_timeout,
        )),
        Box::new(MirrorSource::new(
            config.mirror_base.clone(),
            config.http_timeout,
        )),
    ])
}

/// Cached, chain-backed textbook content retrieval
pub struct ContentService {
    catalog: Arc<Catalog>,
    chain: SourceChain,
    matcher: TopicMatcher,
    module_cache: TtlCache<ModuleKey, String>,
    max_parallel: usize,
}

impl ContentService {
    /// Create a service with explicit collaborators
    pub fn new(
        config: &RetrievalConfig,
        catalog: Arc<Catalog>,
        chain: SourceChain,
        matcher: TopicMatcher,
    ) -> Self {
        Self {
            catalog,
            chain,
            matcher,
            module_cache: TtlCache::new(config.module_ttl),
            max_parallel: config.max_parallel,
        }
    }

    /// Create a service with the standard bucket-then-mirror source chain
    pub fn with_default_sources(
        config: &RetrievalConfig,
        catalog: Arc<Catalog>,
        matcher: TopicMatcher,
    ) -> Self {
        let chain = default_source_chain(config);
        Self::new(config, catalog, chain, matcher)
    }

    /// Fetch a module's content, optionally stripped of markup.
    ///
    /// Cache lookups key on `(module_id, parsed)`. A chain miss is returned
    /// as `None` and deliberately not cached, so transient outages heal on
    /// the next call.
    pub async fn module_content(&self, module_id: &str, parsed: bool) -> Option<String> {
        let key = ModuleKey::new(module_id, parsed);
        if let Some(cached) = self.module_cache.get(&key).await {
            return Some(cached);
        }

        let raw = self.chain.resolve(module_id).await?;
        let content = if parsed { strip_markup(&raw) } else { raw };
        self.module_cache.insert(key, content.clone()).await;
        Some(content)
    }

    /// Fetch a chapter: its modules fan out in parallel and the resolved
    /// ones are joined in declared order. Returns `None` for an unknown
    /// slug or when no module resolved at all.
    pub async fn fetch_chapter(&self, slug: &str) -> Option<ChapterRecord> {
        let title = match self.catalog.title(slug) {
            Some(title) => title,
            None => {
                warn!("unknown chapter slug '{}'", slug);
                return None;
            }
        };

        let module_ids: Vec<String> = self
            .catalog
            .module_ids(slug)
            .iter()
            .map(|id| id.to_string())
            .collect();
        if module_ids.is_empty() {
            warn!("chapter '{}' has no modules", slug);
            return None;
        }

        let texts = fetch_many(module_ids.clone(), self.max_parallel, |module_id| async move {
            Ok(self.module_content(&module_id, true).await)
        })
        .await;

        if texts.len() < module_ids.len() {
            warn!(
                "chapter '{}': {} of {} modules resolved",
                slug,
                texts.len(),
                module_ids.len()
            );
        }
        if texts.is_empty() {
            return None;
        }

        debug!("assembled chapter '{}' from {} module(s)", slug, texts.len());
        Some(ChapterRecord {
            slug: slug.to_string(),
            title: title.to_string(),
            citation_url: self.catalog.citation_url(slug),
            module_ids,
            content: texts.join("\n\n"),
        })
    }

    /// Fetch several chapters in parallel, dropping the ones that fail
    pub async fn fetch_chapters(&self, slugs: Vec<String>) -> Vec<ChapterRecord> {
        fetch_many(slugs, self.max_parallel, |slug| async move {
            Ok(self.fetch_chapter(&slug).await)
        })
        .await
    }

    /// Match a topic to chapters and assemble their content with citations
    pub async fn content_for_topic(
        &self,
        topic: &str,
        max_chapters: usize,
    ) -> Result<TopicContent> {
        let matched = self.matcher.match_topic(topic, max_chapters).await?;
        if matched.is_empty() {
            info!("no chapters matched topic '{}'", topic);
            return Ok(TopicContent {
                matched_chapters: Vec::new(),
                combined_content: String::new(),
                sources: Vec::new(),
            });
        }

        let chapters = self.fetch_chapters(matched.clone()).await;
        info!(
            "topic '{}': fetched {} of {} matched chapter(s)",
            topic,
            chapters.len(),
            matched.len()
        );

        let combined_content = chapters
            .iter()
            .map(|ch| format!("## {}\n\n{}", ch.title, ch.content))
            .collect::<Vec<_>>()
            .join("\n\n");
        let sources = chapters
            .iter()
            .map(|ch| SourceRef {
                url: ch.citation_url.clone(),
                title: ch.title.clone(),
            })
            .collect();

        Ok(TopicContent {
            matched_chapters: matched,
            combined_content,
            sources,
        })
    }

    /// Drop all cached module content
    pub async fn clear_module_cache(&self) {
        self.module_cache.clear().await;
        info!("module cache cleared");
    }

    /// Snapshot of module cache statistics
    pub async fn module_cache_stats(&self) -> crate::cache::CacheStats {
        self.module_cache.stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_key_identity() {
        assert_eq!(ModuleKey::new("m1", true), ModuleKey::new("m1", true));
        assert_ne!(ModuleKey::new("m1", true), ModuleKey::new("m1", false));
        assert_ne!(ModuleKey::new("m1", true), ModuleKey::new("m2", true));
    }

    #[test]
    fn test_default_chain_has_two_tiers() {
        let chain = default_source_chain(&RetrievalConfig::default());
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_topic_content_serializes() {
        let content = TopicContent {
            matched_chapters: vec!["6-4-atp-adenosine-triphosphate".to_string()],
            combined_content: "ATP is the energy currency.".to_string(),
            sources: vec![SourceRef {
                url: "https://openstax.org/books/biology-ap-courses/pages/6-4-atp-adenosine-triphosphate".to_string(),
                title: "ATP: Adenosine Triphosphate".to_string(),
            }],
        };

        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["matched_chapters"][0], "6-4-atp-adenosine-triphosphate");
        assert_eq!(json["sources"][0]["title"], "ATP: Adenosine Triphosphate");
    }
}
