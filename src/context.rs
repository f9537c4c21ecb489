//! # Learner Context Assembly
//!
//! Builds the combined learner context (profile, curriculum notes,
//! misconception guides) from a three-tier fallback chain:
//!
//! 1. Local directory, when configured (development workflow)
//! 2. Cloud bucket objects under the context prefix
//! 3. Embedded fallback texts compiled into the binary
//!
//! The assembled context is cached whole under a single key with a short
//! TTL, so a burst of generation requests costs one pass over the tiers
//! instead of six bucket reads each. Fragments keep their source filenames
//! as section headers so downstream prompts can cite them.

use crate::cache::TtlCache;
use crate::config::RetrievalConfig;
use crate::source::bucket::BucketSource;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Context fragment files, in assembly order
pub const CONTEXT_FILES: &[&str] = &[
    "01_maria_learner_profile.txt",
    "02_chemistry_bond_energy.txt",
    "03_chemistry_thermodynamics.txt",
    "04_biology_atp_cellular_respiration.txt",
    "05_misconception_resolution.txt",
    "06_mcat_practice_concepts.txt",
];

const COMBINED_CACHE_KEY: &str = "combined_context";

pub const EMBEDDED_LEARNER_PROFILE: &str = r#"
## Learner Profile: Maria Santos

**Background:**
- Pre-med sophomore majoring in Biochemistry
- Preparing for MCAT in 8 months
- Works part-time as a pharmacy technician (20 hrs/week)

**Learning Style:**
- Visual-kinesthetic learner
- Prefers analogies connecting to real-world applications
- Responds well to gym/fitness metaphors (exercises regularly)
- Benefits from spaced repetition for memorization

**Current Progress:**
- Completed: Cell structure, basic chemistry
- In progress: Cellular energetics (ATP, metabolism)
- Struggling with: Thermodynamics concepts, especially Gibbs free energy

**Known Misconceptions:**
- Believes "energy is stored in bonds" (common misconception)
- Needs clarification that bond BREAKING releases energy in ATP hydrolysis
"#;

pub const EMBEDDED_CURRICULUM_CONTEXT: &str = r#"
## Current Topic: ATP and Cellular Energy

**Learning Objectives:**
1. Explain why ATP is considered the "energy currency" of cells
2. Describe the structure of ATP and how it stores potential energy
3. Understand that energy is released during hydrolysis due to product stability, not bond breaking
4. Connect ATP usage to cellular processes like muscle contraction

**Key Concepts:**
- Adenosine triphosphate structure (adenine + ribose + 3 phosphate groups)
- Phosphoanhydride bonds and electrostatic repulsion
- Hydrolysis reaction: ATP + H2O → ADP + Pi + Energy
- Gibbs free energy change (ΔG = -30.5 kJ/mol)
- Coupled reactions in cellular metabolism

**Common Misconceptions to Address:**
- "Energy stored in bonds" - Actually, breaking bonds REQUIRES energy;
  the energy released comes from forming more stable products (ADP + Pi)
- ATP is not a long-term energy storage molecule (that's glycogen/fat)
"#;

pub const EMBEDDED_MISCONCEPTION_CONTEXT: &str = r#"
## Misconception Resolution: "Energy Stored in Bonds"

**The Misconception:**
Many students believe ATP releases energy because "energy is stored in the phosphate bonds."

**The Reality:**
- Breaking ANY chemical bond REQUIRES energy input (endothermic)
- Energy is released when NEW, more stable bonds FORM (exothermic)
- ATP hydrolysis releases energy because the products (ADP + Pi) are MORE STABLE than ATP

**Why ATP is "High Energy":**
- The three phosphate groups are negatively charged and repel each other
- This electrostatic repulsion creates molecular strain (like a compressed spring)
- When the terminal phosphate is removed, the products achieve better stability
- The energy comes from relieving this strain, not from "stored bond energy"

**Gym Analogy for Maria:**
Think of ATP like holding a heavy plank position:
- Holding the plank (ATP) requires constant energy expenditure to maintain
- Dropping to rest (ADP + Pi) releases that tension
- The "energy" wasn't stored in your muscles - it was the relief of an unstable state
"#;

/// Assembles learner context from local files, the bucket, or embedded data
pub struct ContextBuilder {
    local_dir: Option<PathBuf>,
    bucket: BucketSource,
    cache: TtlCache<String, String>,
}

impl ContextBuilder {
    /// Create a builder from configuration
    pub fn new(config: &RetrievalConfig) -> Self {
        let bucket = BucketSource::new(
            config.context_bucket.clone(),
            config.context_prefix.clone(),
            config.http_timeout,
        );
        Self {
            local_dir: config.local_context_dir.clone(),
            bucket,
            cache: TtlCache::new(config.context_ttl),
        }
    }

    /// Combined context across all fragments, cached under one key
    pub async fn combined(&self) -> String {
        if let Some(cached) = self.cache.get(&COMBINED_CACHE_KEY.to_string()).await {
            info!("using cached learner context");
            return cached;
        }

        let content = self.assemble().await;
        self.cache
            .insert(COMBINED_CACHE_KEY.to_string(), content.clone())
            .await;
        info!("assembled and cached learner context");
        content
    }

    /// Drop the cached context so the next call reassembles it
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
        info!("context cache cleared");
    }

    async fn assemble(&self) -> String {
        if let Some(content) = self.from_local_dir().await {
            info!("loaded context from local files");
            return content;
        }

        if let Some(content) = self.from_bucket().await {
            info!("loaded context from bucket");
            return content;
        }

        info!("using embedded fallback context");
        embedded_combined()
    }

    async fn from_local_dir(&self) -> Option<String> {
        let dir = self.local_dir.as_ref()?;
        let mut fragments = Vec::new();
        for filename in CONTEXT_FILES {
            let path = dir.join(filename);
            match tokio::fs::read_to_string(&path).await {
                Ok(content) if !content.trim().is_empty() => {
                    fragments.push((*filename, content));
                }
                Ok(_) => debug!("local context file {} is empty", filename),
                Err(e) => debug!("local context file {} unavailable: {}", filename, e),
            }
        }
        if fragments.is_empty() {
            None
        } else {
            Some(combine_fragments(&fragments))
        }
    }

    async fn from_bucket(&self) -> Option<String> {
        let mut fragments = Vec::new();
        for filename in CONTEXT_FILES {
            match self.bucket.read_object(filename).await {
                Ok(Some(content)) => fragments.push((*filename, content)),
                Ok(None) => warn!("context file {} not found in bucket", filename),
                Err(e) => warn!("failed to read context file {}: {}", filename, e),
            }
        }
        info!("loaded {} context files from bucket", fragments.len());
        if fragments.is_empty() {
            None
        } else {
            Some(combine_fragments(&fragments))
        }
    }

    /// Load a single context fragment through the same tier chain
    pub async fn load_fragment(&self, filename: &str) -> Option<String> {
        if let Some(dir) = &self.local_dir {
            match tokio::fs::read_to_string(dir.join(filename)).await {
                Ok(content) if !content.trim().is_empty() => return Some(content),
                Ok(_) => {}
                Err(e) => debug!("local fragment {} unavailable: {}", filename, e),
            }
        }

        match self.bucket.read_object(filename).await {
            Ok(Some(content)) => return Some(content),
            Ok(None) => {}
            Err(e) => warn!("failed to read fragment {}: {}", filename, e),
        }

        embedded_fragment(filename)
    }
}

/// Join named fragments with `=== filename ===` section headers, sorted by
/// filename so output is stable regardless of fetch order
pub fn combine_fragments(fragments: &[(&str, String)]) -> String {
    let mut sorted: Vec<&(&str, String)> = fragments.iter().collect();
    sorted.sort_by_key(|(name, _)| *name);
    sorted
        .iter()
        .map(|(name, content)| format!("=== {} ===\n{}\n", name, content))
        .collect::<Vec<_>>()
        .join("\n")
}

fn embedded_combined() -> String {
    format!(
        "\n{}\n\n{}\n\n{}\n",
        EMBEDDED_LEARNER_PROFILE, EMBEDDED_CURRICULUM_CONTEXT, EMBEDDED_MISCONCEPTION_CONTEXT
    )
}

fn embedded_fragment(filename: &str) -> Option<String> {
    if filename.contains("learner_profile") {
        return Some(EMBEDDED_LEARNER_PROFILE.to_string());
    }
    if filename.contains("misconception") {
        return Some(EMBEDDED_MISCONCEPTION_CONTEXT.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetrievalConfig;
    use std::time::Duration;

    fn config_with_dir(dir: PathBuf) -> RetrievalConfig {
        RetrievalConfig::builder()
            .local_context_dir(dir)
            .context_ttl(Duration::from_secs(300))
            .build()
    }

    #[test]
    fn test_combine_fragments_sorted_with_headers() {
        let fragments = vec![
            ("02_b.txt", "beta".to_string()),
            ("01_a.txt", "alpha".to_string()),
        ];
        let combined = combine_fragments(&fragments);
        let a_pos = combined.find("=== 01_a.txt ===").unwrap();
        let b_pos = combined.find("=== 02_b.txt ===").unwrap();
        assert!(a_pos < b_pos);
        assert!(combined.contains("=== 01_a.txt ===\nalpha\n"));
    }

    #[test]
    fn test_embedded_fragment_by_filename() {
        assert!(embedded_fragment("01_maria_learner_profile.txt")
            .unwrap()
            .contains("Maria Santos"));
        assert!(embedded_fragment("05_misconception_resolution.txt")
            .unwrap()
            .contains("Energy Stored in Bonds"));
        assert!(embedded_fragment("03_chemistry_thermodynamics.txt").is_none());
    }

    #[tokio::test]
    async fn test_local_dir_preferred() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(
            dir.path().join("01_maria_learner_profile.txt"),
            "local profile",
        )
        .await
        .unwrap();

        let builder = ContextBuilder::new(&config_with_dir(dir.path().to_path_buf()));
        let combined = builder.combined().await;
        assert!(combined.contains("=== 01_maria_learner_profile.txt ===\nlocal profile"));
        // The bucket tier was never needed, so no embedded text leaks in
        assert!(!combined.contains("Visual-kinesthetic"));
    }

    #[tokio::test]
    async fn test_empty_local_dir_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        // A bucket no one owns, so that tier yields nothing
        let config = RetrievalConfig::builder()
            .local_context_dir(dir.path().to_path_buf())
            .context_bucket("bucket-that-does-not-exist-ws8f2")
            .http_timeout(Duration::from_millis(500))
            .build();
        let builder = ContextBuilder::new(&config);

        let combined = builder.combined().await;
        assert!(combined.contains("Maria Santos"));
        assert!(combined.contains("ATP and Cellular Energy"));
        assert!(combined.contains("Energy Stored in Bonds"));
    }

    #[tokio::test]
    async fn test_combined_is_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("01_maria_learner_profile.txt");
        tokio::fs::write(&path, "first").await.unwrap();

        let builder = ContextBuilder::new(&config_with_dir(dir.path().to_path_buf()));
        let first = builder.combined().await;
        assert!(first.contains("first"));

        // Rewriting the file does not show up until the cache is cleared
        tokio::fs::write(&path, "second").await.unwrap();
        let cached = builder.combined().await;
        assert!(cached.contains("first"));

        builder.clear_cache().await;
        let fresh = builder.combined().await;
        assert!(fresh.contains("second"));
    }
}
