//! Integration tests for parallel chapter and module fetching.

use async_trait::async_trait;
use openstax_retrieval::error::{ContentError, Result};
use openstax_retrieval::{
    Catalog, ChapterRanker, ContentService, ModuleSource, RetrievalConfig, SourceChain,
    TopicMatcher,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Source that records requested module ids and answers per module
struct RecordingSource {
    missing: HashSet<String>,
    requested: Arc<Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
}

impl RecordingSource {
    fn answering_all() -> Self {
        Self::with_missing(&[])
    }

    fn with_missing(missing: &[&str]) -> Self {
        Self {
            missing: missing.iter().map(|s| s.to_string()).collect(),
            requested: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl ModuleSource for RecordingSource {
    fn name(&self) -> &str {
        "recording"
    }

    async fn try_fetch(&self, module_id: &str) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(module_id.to_string());
        if self.missing.contains(module_id) {
            Ok(None)
        } else {
            Ok(Some(format!("text of {}", module_id)))
        }
    }
}

struct UnusedRanker;

#[async_trait]
impl ChapterRanker for UnusedRanker {
    async fn rank(&self, _topic: &str, _max_chapters: usize) -> Result<Vec<String>> {
        Err(ContentError::MatchFailed("ranker should be unused".to_string()))
    }
}

fn service_with(source: RecordingSource) -> ContentService {
    let config = RetrievalConfig::default();
    let catalog = Arc::new(Catalog::builtin());
    let matcher = TopicMatcher::new(catalog.clone(), Arc::new(UnusedRanker));
    let chain = SourceChain::new(vec![Box::new(source)]);
    ContentService::new(&config, catalog, chain, matcher)
}

// 7-7 has three modules, which exercises the pooled fan-out path
const MULTI_MODULE_CHAPTER: &str = "7-7-regulation-of-cellular-respiration";

#[tokio::test]
async fn chapter_fetch_retrieves_every_module() {
    let source = RecordingSource::answering_all();
    let requested = source.requested.clone();
    let service = service_with(source);

    let record = service.fetch_chapter(MULTI_MODULE_CHAPTER).await.unwrap();

    assert_eq!(record.slug, MULTI_MODULE_CHAPTER);
    assert_eq!(record.module_ids.len(), 3);
    assert_eq!(requested.lock().unwrap().len(), 3);
    for module_id in &record.module_ids {
        assert!(record.content.contains(&format!("text of {}", module_id)));
    }
}

#[tokio::test]
async fn chapter_content_preserves_declared_module_order() {
    let service = service_with(RecordingSource::answering_all());

    let record = service.fetch_chapter(MULTI_MODULE_CHAPTER).await.unwrap();

    let mut last = 0;
    for module_id in &record.module_ids {
        let pos = record
            .content
            .find(&format!("text of {}", module_id))
            .unwrap();
        assert!(pos >= last, "module texts out of declared order");
        last = pos;
    }
}

#[tokio::test]
async fn chapter_survives_partially_missing_modules() {
    let service = service_with(RecordingSource::with_missing(&["m62791"]));

    let record = service.fetch_chapter(MULTI_MODULE_CHAPTER).await.unwrap();

    assert!(record.content.contains("text of m62790"));
    assert!(record.content.contains("text of m62792"));
    assert!(!record.content.contains("text of m62791"));
    // Declared module list is unchanged even when a fetch comes up empty
    assert_eq!(record.module_ids.len(), 3);
}

#[tokio::test]
async fn chapter_with_no_resolvable_modules_is_none() {
    let service = service_with(RecordingSource::with_missing(&["m62767"]));
    assert!(service
        .fetch_chapter("6-4-atp-adenosine-triphosphate")
        .await
        .is_none());
}

#[tokio::test]
async fn unknown_chapter_slug_is_none() {
    let source = RecordingSource::answering_all();
    let calls = source.calls.clone();
    let service = service_with(source);

    assert!(service.fetch_chapter("99-9-not-a-chapter").await.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 0, "no fetch for unknown slug");
}

#[tokio::test]
async fn empty_slug_list_fetches_nothing() {
    let source = RecordingSource::answering_all();
    let calls = source.calls.clone();
    let service = service_with(source);

    let records = service.fetch_chapters(Vec::new()).await;
    assert!(records.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn multi_chapter_fetch_keeps_input_order_and_drops_failures() {
    let service = service_with(RecordingSource::answering_all());

    let records = service
        .fetch_chapters(vec![
            "8-1-overview-of-photosynthesis".to_string(),
            "99-9-not-a-chapter".to_string(),
            "11-1-the-process-of-meiosis".to_string(),
        ])
        .await;

    let slugs: Vec<&str> = records.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["8-1-overview-of-photosynthesis", "11-1-the-process-of-meiosis"]
    );
}

#[tokio::test]
async fn chapter_fetch_populates_module_cache() {
    let source = RecordingSource::answering_all();
    let calls = source.calls.clone();
    let service = service_with(source);

    service.fetch_chapter(MULTI_MODULE_CHAPTER).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    // Refetching the chapter serves modules from cache
    service.fetch_chapter(MULTI_MODULE_CHAPTER).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn chapter_record_carries_citation() {
    let service = service_with(RecordingSource::answering_all());

    let record = service
        .fetch_chapter("6-4-atp-adenosine-triphosphate")
        .await
        .unwrap();

    assert_eq!(record.title, "ATP: Adenosine Triphosphate");
    assert_eq!(
        record.citation_url,
        "https://openstax.org/books/biology-ap-courses/pages/6-4-atp-adenosine-triphosphate"
    );
}
