//! Gemini-backed chapter ranking.
//!
//! Calls the Generative Language API with `responseMimeType` pinned to JSON
//! so the model is constrained to emit a bare array of chapter slugs. The
//! prompt carries the full chapter vocabulary; anything outside it is
//! filtered upstream by the matcher.

use crate::catalog::Catalog;
use crate::error::{ContentError, Result};
use crate::matcher::ChapterRanker;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const GENERATIVE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Chapter ranker backed by the Gemini generateContent endpoint
pub struct GeminiRanker {
    client: reqwest::Client,
    api_key: String,
    model: String,
    catalog: Arc<Catalog>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiRanker {
    /// Create a ranker; fails when no API key is configured
    pub fn new(
        api_key: Option<String>,
        model: String,
        catalog: Arc<Catalog>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.ok_or_else(|| {
            ContentError::Config("GEMINI_API_KEY is required for generative matching".to_string())
        })?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ContentError::Http)?;
        Ok(Self {
            client,
            api_key,
            model,
            catalog,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            GENERATIVE_API_BASE, self.model, self.api_key
        )
    }

    fn prompt(&self, topic: &str, max_chapters: usize) -> String {
        format!(
            "You match biology study topics to textbook chapters.\n\
             The available chapters, one per line as `- slug: title`:\n\n\
             {chapters}\n\n\
             Topic: {topic}\n\n\
             Return a JSON array of at most {max} chapter slugs from the list \
             above, ordered most relevant first. Use only slugs that appear in \
             the list. If the topic is not about biology or none of the \
             chapters apply, return an empty array [].\n\n\
             Examples:\n\
             Topic: how does photosynthesis work -> \
             [\"8-1-overview-of-photosynthesis\", \"8-2-the-light-dependent-reaction-of-photosynthesis\"]\n\
             Topic: french revolution -> []",
            chapters = self.catalog.chapter_list_for_prompt(),
            topic = topic,
            max = max_chapters,
        )
    }

    fn parse_slugs(body: &GenerateResponse) -> Result<Vec<String>> {
        let text = body
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| {
                ContentError::MatchFailed("generative response had no candidates".to_string())
            })?;

        let slugs: Vec<String> = serde_json::from_str(text.trim()).map_err(|e| {
            ContentError::MatchFailed(format!("generative response was not a slug array: {}", e))
        })?;
        Ok(slugs)
    }
}

#[async_trait]
impl ChapterRanker for GeminiRanker {
    async fn rank(&self, topic: &str, max_chapters: usize) -> Result<Vec<String>> {
        let request = json!({
            "contents": [{
                "parts": [{ "text": self.prompt(topic, max_chapters) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "temperature": 0.0
            }
        });

        debug!("ranking topic '{}' with model {}", topic, self.model);
        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(ContentError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::MatchFailed(format!(
                "generative API returned {}: {}",
                status, body
            )));
        }

        let body: GenerateResponse = response.json().await.map_err(ContentError::Http)?;
        Self::parse_slugs(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranker() -> GeminiRanker {
        GeminiRanker::new(
            Some("test-key".to_string()),
            "gemini-2.5-flash".to_string(),
            Arc::new(Catalog::builtin()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let result = GeminiRanker::new(
            None,
            "gemini-2.5-flash".to_string(),
            Arc::new(Catalog::builtin()),
            Duration::from_secs(5),
        );
        assert!(matches!(result, Err(ContentError::Config(_))));
    }

    #[test]
    fn test_endpoint_embeds_model_and_key() {
        let url = ranker().endpoint();
        assert!(url.contains("/models/gemini-2.5-flash:generateContent"));
        assert!(url.ends_with("key=test-key"));
    }

    #[test]
    fn test_prompt_carries_vocabulary_and_topic() {
        let prompt = ranker().prompt("krebs cycle", 3);
        assert!(prompt.contains("- 6-4-atp-adenosine-triphosphate:"));
        assert!(prompt.contains("Topic: krebs cycle"));
        assert!(prompt.contains("at most 3"));
    }

    #[test]
    fn test_parse_slugs_from_json_text() {
        let body: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "[\"11-1-the-process-of-meiosis\"]" }]
                }
            }]
        }))
        .unwrap();
        let slugs = GeminiRanker::parse_slugs(&body).unwrap();
        assert_eq!(slugs, vec!["11-1-the-process-of-meiosis".to_string()]);
    }

    #[test]
    fn test_parse_rejects_non_array_text() {
        let body: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "sorry, I cannot help" }] }
            }]
        }))
        .unwrap();
        assert!(matches!(
            GeminiRanker::parse_slugs(&body),
            Err(ContentError::MatchFailed(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_candidates() {
        let body: GenerateResponse = serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(matches!(
            GeminiRanker::parse_slugs(&body),
            Err(ContentError::MatchFailed(_))
        ));
    }
}
