//! # Module Source Fallback Chain
//!
//! A module (the smallest fetchable content unit) is resolved through an
//! ordered chain of providers behind one capability trait. Each provider may
//! answer, report "no answer", or fail; failures are logged and treated the
//! same as "no answer" so a flaky provider never blocks the chain. Only
//! exhaustion of the whole chain is a hard miss.
//!
//! Adding a provider means appending to the chain, not branching.

pub mod bucket;
pub mod mirror;

use crate::error::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

pub use bucket::BucketSource;
pub use mirror::MirrorSource;

/// A single content provider in a fallback chain.
///
/// `try_fetch` returns `Ok(Some(text))` when the provider has the document,
/// `Ok(None)` when it definitively does not, and `Err` on transport trouble.
/// The chain treats `Err` like `Ok(None)` after logging it.
#[async_trait]
pub trait ModuleSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Attempt to fetch the raw document for a module id
    async fn try_fetch(&self, module_id: &str) -> Result<Option<String>>;
}

/// Ordered chain of module sources, tried in sequence until one answers
pub struct SourceChain {
    sources: Vec<Box<dyn ModuleSource>>,
}

impl SourceChain {
    /// Create a chain from an ordered list of sources
    pub fn new(sources: Vec<Box<dyn ModuleSource>>) -> Self {
        Self { sources }
    }

    /// Number of sources in the chain
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the chain has no sources
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Resolve a module through the chain, short-circuiting on the first
    /// provider that answers. Provider errors are logged and skipped; `None`
    /// means the entire chain was exhausted.
    pub async fn resolve(&self, module_id: &str) -> Option<String> {
        for source in &self.sources {
            match source.try_fetch(module_id).await {
                Ok(Some(content)) => {
                    debug!(
                        "resolved module {} via '{}' ({} bytes)",
                        module_id,
                        source.name(),
                        content.len()
                    );
                    return Some(content);
                }
                Ok(None) => {
                    debug!("source '{}' has no content for {}", source.name(), module_id);
                }
                Err(e) => {
                    // Transport trouble is not an answer; keep going
                    warn!(
                        "source '{}' failed for {}: {}",
                        source.name(),
                        module_id,
                        e
                    );
                }
            }
        }

        warn!("all sources exhausted for module {}", module_id);
        None
    }
}
