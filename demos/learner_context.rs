//! Prints the assembled learner context and where it came from.
//!
//! ```bash
//! LOCAL_CONTEXT_DIR=./context cargo run --example learner_context
//! ```

use openstax_retrieval::{ContextBuilder, RetrievalConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = RetrievalConfig::from_env();
    let builder = ContextBuilder::new(&config);

    let context = builder.combined().await;
    println!("{}", context);
}
