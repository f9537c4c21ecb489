//! Fetches textbook content for a topic given on the command line.
//!
//! ```bash
//! GEMINI_API_KEY=... cargo run --example topic_content -- "ATP hydrolysis"
//! ```

use openstax_retrieval::{
    Catalog, ContentService, GeminiRanker, RetrievalConfig, TopicMatcher,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let topic = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ATP hydrolysis".to_string());

    let config = RetrievalConfig::from_env();
    config.validate()?;

    let catalog = Arc::new(Catalog::load()?);
    let ranker = Arc::new(GeminiRanker::new(
        config.gemini_api_key.clone(),
        config.model.clone(),
        catalog.clone(),
        config.http_timeout,
    )?);
    let matcher = TopicMatcher::new(catalog.clone(), ranker);
    let service = ContentService::with_default_sources(&config, catalog, matcher);

    let result = service.content_for_topic(&topic, 2).await?;

    println!("Matched chapters: {:?}", result.matched_chapters);
    println!();
    for source in &result.sources {
        println!("Source: {} <{}>", source.title, source.url);
    }
    println!();
    let preview: String = result.combined_content.chars().take(800).collect();
    println!("{}", preview);

    Ok(())
}
