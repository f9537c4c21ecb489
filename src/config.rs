//! Configuration for the retrieval layer
//!
//! All knobs are environment-driven with development-friendly defaults.
//! `.env` files are honored for local runs; deployed environments set the
//! variables directly.

use crate::catalog::MIRROR_RAW_BASE;
use crate::error::{ContentError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for content retrieval, caching, and topic matching
#[derive(Debug, Clone)]
pub struct RetrievalConfig {
    /// GCS bucket holding learner-context fragments and module documents
    pub context_bucket: String,

    /// Object-name prefix for learner-context fragments
    pub context_prefix: String,

    /// Object-name prefix for raw module documents
    pub module_prefix: String,

    /// Base URL of the origin-repository mirror for module content
    pub mirror_base: String,

    /// Optional local directory with context fragments (development mode)
    pub local_context_dir: Option<PathBuf>,

    /// Generative model id for topic-match fallback
    pub model: String,

    /// API key for the generative service; absent means the generative
    /// fallback is unavailable and constructing a ranker fails fast
    pub gemini_api_key: Option<String>,

    /// TTL for the per-module content cache
    pub module_ttl: Duration,

    /// TTL for the combined learner-context cache
    pub context_ttl: Duration,

    /// Upper bound on concurrent fetches in a fan-out
    pub max_parallel: usize,

    /// Per-call network timeout for provider requests
    pub http_timeout: Duration,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            context_bucket: "a2ui-demo-context".to_string(),
            context_prefix: "learner_context/".to_string(),
            module_prefix: "openstax_modules/".to_string(),
            mirror_base: MIRROR_RAW_BASE.to_string(),
            local_context_dir: None,
            model: "gemini-2.5-flash".to_string(),
            gemini_api_key: None,
            // Module content is static textbook text; one hour is plenty
            module_ttl: Duration::from_secs(3600),
            // Learner context changes between sessions; five minutes
            context_ttl: Duration::from_secs(300),
            max_parallel: 8,
            http_timeout: Duration::from_secs(10),
        }
    }
}

impl RetrievalConfig {
    /// Create a new builder
    pub fn builder() -> RetrievalConfigBuilder {
        RetrievalConfigBuilder::default()
    }

    /// Load configuration from the environment (honoring a `.env` file for
    /// local development)
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        Self {
            context_bucket: env_or("GCS_CONTEXT_BUCKET", defaults.context_bucket),
            context_prefix: env_or("GCS_CONTEXT_PREFIX", defaults.context_prefix),
            module_prefix: env_or("GCS_MODULE_PREFIX", defaults.module_prefix),
            mirror_base: env_or("OPENSTAX_MIRROR_BASE", defaults.mirror_base),
            local_context_dir: std::env::var("LOCAL_CONTEXT_DIR").ok().map(PathBuf::from),
            model: env_or("GENAI_MODEL", defaults.model),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            module_ttl: env_secs_or("MODULE_CACHE_TTL_SECS", defaults.module_ttl),
            context_ttl: env_secs_or("CONTEXT_CACHE_TTL_SECS", defaults.context_ttl),
            max_parallel: std::env::var("MAX_PARALLEL_FETCHES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_parallel),
            http_timeout: env_secs_or("HTTP_TIMEOUT_SECS", defaults.http_timeout),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.context_bucket.is_empty() {
            return Err(ContentError::Config(
                "context_bucket must not be empty".to_string(),
            ));
        }

        if self.max_parallel == 0 {
            return Err(ContentError::Config(
                "max_parallel must be greater than 0".to_string(),
            ));
        }

        if self.module_ttl.is_zero() || self.context_ttl.is_zero() {
            return Err(ContentError::Config(
                "cache TTLs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or(default)
}

fn env_secs_or(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(default)
}

/// Builder for retrieval configuration
#[derive(Debug, Default)]
pub struct RetrievalConfigBuilder {
    context_bucket: Option<String>,
    context_prefix: Option<String>,
    module_prefix: Option<String>,
    mirror_base: Option<String>,
    local_context_dir: Option<PathBuf>,
    model: Option<String>,
    gemini_api_key: Option<String>,
    module_ttl: Option<Duration>,
    context_ttl: Option<Duration>,
    max_parallel: Option<usize>,
    http_timeout: Option<Duration>,
}

impl RetrievalConfigBuilder {
    /// Set the GCS bucket name
    pub fn context_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.context_bucket = Some(bucket.into());
        self
    }

    /// Set the object-name prefix for context fragments
    pub fn context_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.context_prefix = Some(prefix.into());
        self
    }

    /// Set the object-name prefix for module documents
    pub fn module_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.module_prefix = Some(prefix.into());
        self
    }

    /// Set the mirror base URL
    pub fn mirror_base(mut self, base: impl Into<String>) -> Self {
        self.mirror_base = Some(base.into());
        self
    }

    /// Set a local directory for development-mode context fragments
    pub fn local_context_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.local_context_dir = Some(dir.into());
        self
    }

    /// Set the generative model id
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the generative service API key
    pub fn gemini_api_key(mut self, key: impl Into<String>) -> Self {
        self.gemini_api_key = Some(key.into());
        self
    }

    /// Set the module cache TTL
    pub fn module_ttl(mut self, ttl: Duration) -> Self {
        self.module_ttl = Some(ttl);
        self
    }

    /// Set the combined-context cache TTL
    pub fn context_ttl(mut self, ttl: Duration) -> Self {
        self.context_ttl = Some(ttl);
        self
    }

    /// Set the fan-out concurrency bound
    pub fn max_parallel(mut self, max: usize) -> Self {
        self.max_parallel = Some(max);
        self
    }

    /// Set the per-call HTTP timeout
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = Some(timeout);
        self
    }

    /// Build the configuration, filling unset fields from defaults
    pub fn build(self) -> RetrievalConfig {
        let defaults = RetrievalConfig::default();

        RetrievalConfig {
            context_bucket: self.context_bucket.unwrap_or(defaults.context_bucket),
            context_prefix: self.context_prefix.unwrap_or(defaults.context_prefix),
            module_prefix: self.module_prefix.unwrap_or(defaults.module_prefix),
            mirror_base: self.mirror_base.unwrap_or(defaults.mirror_base),
            local_context_dir: self.local_context_dir.or(defaults.local_context_dir),
            model: self.model.unwrap_or(defaults.model),
            gemini_api_key: self.gemini_api_key.or(defaults.gemini_api_key),
            module_ttl: self.module_ttl.unwrap_or(defaults.module_ttl),
            context_ttl: self.context_ttl.unwrap_or(defaults.context_ttl),
            max_parallel: self.max_parallel.unwrap_or(defaults.max_parallel),
            http_timeout: self.http_timeout.unwrap_or(defaults.http_timeout),
        }
    }
}
