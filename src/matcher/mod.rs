//! # Topic Matching
//!
//! Maps a free-text topic to an ordered list of chapter slugs in two steps:
//!
//! 1. **Keyword lookup** — a substring scan of the lower-cased topic against
//!    the static keyword table. Any hit short-circuits without touching the
//!    generative service; this is the fast path and must win whenever it
//!    yields anything.
//! 2. **Generative fallback** — only when no keyword matched, a
//!    [`ChapterRanker`] (Gemini in production) ranks chapters from the
//!    canonical vocabulary. Returned slugs are filtered against the catalog
//!    to defend against hallucinated identifiers.
//!
//! Misspelled or colloquial domain topics are the fallback's job; the
//! keyword scan is a pure substring match and is not expected to catch them.
//! A ranker failure fails the whole match operation: topic matching is one
//! logical operation, not a fan-out, so nothing is swallowed here.

pub mod gemini;

use crate::catalog::Catalog;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

pub use gemini::GeminiRanker;

/// Generative chapter ranking backend for topics no keyword covers
#[async_trait]
pub trait ChapterRanker: Send + Sync {
    /// Rank at most `max_chapters` chapter slugs for a topic, most relevant
    /// first. Must return an empty list for clearly non-domain topics rather
    /// than guessing. Slugs are not trusted; the matcher filters them.
    async fn rank(&self, topic: &str, max_chapters: usize) -> Result<Vec<String>>;
}

/// Two-step topic matcher over a chapter catalog
pub struct TopicMatcher {
    catalog: Arc<Catalog>,
    ranker: Arc<dyn ChapterRanker>,
}

impl TopicMatcher {
    /// Create a matcher over `catalog` with a generative fallback
    pub fn new(catalog: Arc<Catalog>, ranker: Arc<dyn ChapterRanker>) -> Self {
        Self { catalog, ranker }
    }

    /// Match a topic to at most `max_chapters` chapter slugs
    pub async fn match_topic(&self, topic: &str, max_chapters: usize) -> Result<Vec<String>> {
        let keyword_hits = keyword_matches(&self.catalog, topic, max_chapters);
        if !keyword_hits.is_empty() {
            info!(
                "topic '{}' matched {} chapter(s) via keywords",
                topic,
                keyword_hits.len()
            );
            return Ok(keyword_hits);
        }

        debug!("no keyword match for '{}', using generative ranker", topic);
        let ranked = self.ranker.rank(topic, max_chapters).await?;

        let valid: Vec<String> = ranked
            .into_iter()
            .filter(|slug| {
                let known = self.catalog.contains(slug);
                if !known {
                    debug!("ranker returned unknown chapter slug '{}'", slug);
                }
                known
            })
            .take(max_chapters)
            .collect();

        info!(
            "topic '{}' matched {} chapter(s) via generative ranking",
            topic,
            valid.len()
        );
        Ok(valid)
    }
}

/// Deterministic keyword lookup: collect chapter slugs for every keyword
/// that appears as a substring of the lower-cased topic, preserving the
/// table's per-keyword ordering and de-duplicating across keywords (first
/// occurrence wins).
pub fn keyword_matches(catalog: &Catalog, topic: &str, max_chapters: usize) -> Vec<String> {
    let topic_lower = topic.to_lowercase();
    let mut slugs: Vec<String> = Vec::new();

    for (keyword, chapters) in catalog.keyword_hints() {
        if topic_lower.contains(keyword) {
            for chapter in *chapters {
                if !slugs.iter().any(|s| s == chapter) {
                    slugs.push((*chapter).to_string());
                }
            }
        }
    }

    slugs.truncate(max_chapters);
    slugs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingRanker {
        calls: AtomicUsize,
        response: Result<Vec<String>>,
    }

    impl CountingRanker {
        fn returning(slugs: Vec<&str>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: Ok(slugs.into_iter().map(String::from).collect()),
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: Err(ContentError::MatchFailed("quota exceeded".to_string())),
            }
        }
    }

    #[async_trait]
    impl ChapterRanker for CountingRanker {
        async fn rank(&self, _topic: &str, _max_chapters: usize) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(slugs) => Ok(slugs.clone()),
                Err(_) => Err(ContentError::MatchFailed("quota exceeded".to_string())),
            }
        }
    }

    #[test]
    fn test_keyword_match_case_insensitive() {
        let catalog = Catalog::builtin();
        let slugs = keyword_matches(&catalog, "Explain ATP hydrolysis to me", 2);
        assert!(!slugs.is_empty());
        assert!(slugs.contains(&"6-4-atp-adenosine-triphosphate".to_string()));
    }

    #[test]
    fn test_keyword_match_dedup_first_wins() {
        let catalog = Catalog::builtin();
        // "atp" and "cellular energy" overlap on the ATP chapter
        let slugs = keyword_matches(&catalog, "atp and cellular energy", 4);
        let atp_count = slugs
            .iter()
            .filter(|s| s.as_str() == "6-4-atp-adenosine-triphosphate")
            .count();
        assert_eq!(atp_count, 1);
        assert_eq!(slugs[0], "6-4-atp-adenosine-triphosphate");
    }

    #[test]
    fn test_keyword_match_truncates() {
        let catalog = Catalog::builtin();
        let slugs = keyword_matches(&catalog, "atp and photosynthesis and dna", 2);
        assert_eq!(slugs.len(), 2);
    }

    #[test]
    fn test_no_keyword_match_for_unrelated_topic() {
        let catalog = Catalog::builtin();
        assert!(keyword_matches(&catalog, "quantum chromodynamics", 2).is_empty());
    }

    #[tokio::test]
    async fn test_keyword_path_skips_ranker() {
        let catalog = Arc::new(Catalog::builtin());
        let ranker = Arc::new(CountingRanker::returning(vec!["8-1-overview-of-photosynthesis"]));
        let matcher = TopicMatcher::new(catalog, ranker.clone());

        let slugs = matcher.match_topic("tell me about ATP", 2).await.unwrap();
        assert!(!slugs.is_empty());
        assert_eq!(ranker.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fallback_invokes_ranker_once() {
        let catalog = Arc::new(Catalog::builtin());
        let ranker = Arc::new(CountingRanker::returning(vec![
            "11-1-the-process-of-meiosis",
            "11-2-sexual-reproduction",
        ]));
        let matcher = TopicMatcher::new(catalog, ranker.clone());

        // Misspelled, so the keyword table cannot catch it
        let slugs = matcher.match_topic("meitosis", 2).await.unwrap();
        assert_eq!(
            slugs,
            vec![
                "11-1-the-process-of-meiosis".to_string(),
                "11-2-sexual-reproduction".to_string()
            ]
        );
        assert_eq!(ranker.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fallback_filters_hallucinated_slugs() {
        let catalog = Arc::new(Catalog::builtin());
        let ranker = Arc::new(CountingRanker::returning(vec![
            "99-9-not-a-real-chapter",
            "11-1-the-process-of-meiosis",
        ]));
        let matcher = TopicMatcher::new(catalog, ranker);

        let slugs = matcher.match_topic("meitosis", 2).await.unwrap();
        assert_eq!(slugs, vec!["11-1-the-process-of-meiosis".to_string()]);
    }

    #[tokio::test]
    async fn test_fallback_empty_for_non_domain_topic() {
        let catalog = Arc::new(Catalog::builtin());
        let ranker = Arc::new(CountingRanker::returning(vec![]));
        let matcher = TopicMatcher::new(catalog, ranker);

        let slugs = matcher.match_topic("shakespeare sonnets", 2).await.unwrap();
        assert!(slugs.is_empty());
    }

    #[tokio::test]
    async fn test_ranker_failure_is_hard_error() {
        let catalog = Arc::new(Catalog::builtin());
        let ranker = Arc::new(CountingRanker::failing());
        let matcher = TopicMatcher::new(catalog, ranker);

        let err = matcher.match_topic("meitosis", 2).await.unwrap_err();
        assert!(matches!(err, ContentError::MatchFailed(_)));
    }
}
