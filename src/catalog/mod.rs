//! # OpenStax Chapter Catalog
//!
//! Immutable chapter index for the OpenStax Biology for AP Courses textbook:
//! slug→title lookup, keyword hints for deterministic topic matching, the
//! chapter→module mapping, and URL derivation for both the raw-content
//! mirror and the citation pages.
//!
//! The catalog is plain static data loaded once at startup and passed down
//! by reference; no runtime invariant checking is needed beyond the
//! referential-integrity self-check in [`Catalog::validate`].

pub mod data;

use crate::error::{ContentError, Result};
use std::collections::HashMap;
use tracing::info;

/// Default GitHub raw base for fetching module CNXML content
pub const MIRROR_RAW_BASE: &str =
    "https://raw.githubusercontent.com/openstax/osbooks-biology-bundle/main/modules";

/// OpenStax website base for chapter citations
pub const OPENSTAX_WEB_BASE: &str = "https://openstax.org/books/biology-ap-courses/pages";

/// Read-only chapter catalog with fast lookups built over the static tables
pub struct Catalog {
    chapters: Vec<(&'static str, &'static str)>,
    titles: HashMap<&'static str, &'static str>,
    keyword_hints: Vec<(&'static str, &'static [&'static str])>,
    chapter_modules: HashMap<&'static str, &'static [&'static str]>,
}

impl Catalog {
    /// Build the catalog from the built-in tables
    pub fn builtin() -> Self {
        let chapters: Vec<_> = data::CHAPTERS.to_vec();
        let titles = chapters.iter().copied().collect();
        let chapter_modules = data::CHAPTER_MODULES.iter().copied().collect();

        Self {
            chapters,
            titles,
            keyword_hints: data::KEYWORD_HINTS.to_vec(),
            chapter_modules,
        }
    }

    /// Build and self-check the catalog; intended for process startup
    pub fn load() -> Result<Self> {
        let catalog = Self::builtin();
        catalog.validate()?;
        info!(
            "loaded chapter catalog: {} chapters, {} keyword hints",
            catalog.chapters.len(),
            catalog.keyword_hints.len()
        );
        Ok(catalog)
    }

    /// Referential-integrity self-check: every slug referenced by a keyword
    /// hint or a module mapping must exist in the canonical chapter table,
    /// and every chapter must have at least one module.
    pub fn validate(&self) -> Result<()> {
        for (keyword, slugs) in &self.keyword_hints {
            if slugs.is_empty() {
                return Err(ContentError::Config(format!(
                    "keyword '{}' maps to no chapters",
                    keyword
                )));
            }
            for slug in *slugs {
                if !self.titles.contains_key(slug) {
                    return Err(ContentError::Config(format!(
                        "keyword '{}' references unknown chapter '{}'",
                        keyword, slug
                    )));
                }
            }
        }

        for (slug, _) in &self.chapters {
            match self.chapter_modules.get(slug) {
                Some(modules) if !modules.is_empty() => {}
                _ => {
                    return Err(ContentError::Config(format!(
                        "chapter '{}' has no module mapping",
                        slug
                    )));
                }
            }
        }

        for slug in self.chapter_modules.keys() {
            if !self.titles.contains_key(slug) {
                return Err(ContentError::Config(format!(
                    "module mapping references unknown chapter '{}'",
                    slug
                )));
            }
        }

        Ok(())
    }

    /// Number of chapters in the catalog
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Whether the catalog is empty (never true for the built-in tables)
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Check whether a slug names a known chapter
    pub fn contains(&self, slug: &str) -> bool {
        self.titles.contains_key(slug)
    }

    /// Human-readable title for a chapter slug
    pub fn title(&self, slug: &str) -> Option<&'static str> {
        self.titles.get(slug).copied()
    }

    /// Module ids for a chapter, in declared reading order
    pub fn module_ids(&self, slug: &str) -> &[&'static str] {
        self.chapter_modules.get(slug).copied().unwrap_or(&[])
    }

    /// Keyword hint table in declared order (most specific phrases first
    /// within each subject group)
    pub fn keyword_hints(&self) -> &[(&'static str, &'static [&'static str])] {
        &self.keyword_hints
    }

    /// GitHub raw URL for a module's CNXML file
    pub fn mirror_url_for_module(&self, base: &str, module_id: &str) -> String {
        format!("{}/{}/index.cnxml", base.trim_end_matches('/'), module_id)
    }

    /// OpenStax website URL for a chapter (for citations)
    pub fn citation_url(&self, slug: &str) -> String {
        format!("{}/{}", OPENSTAX_WEB_BASE, slug)
    }

    /// Formatted `- slug: title` list of all chapters, used as the chapter
    /// vocabulary inside the generative matching prompt
    pub fn chapter_list_for_prompt(&self) -> String {
        let mut lines = Vec::with_capacity(self.chapters.len());
        for (slug, title) in &self.chapters {
            lines.push(format!("- {}: {}", slug, title));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_validates() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.len() > 100);
    }

    #[test]
    fn test_title_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.title("6-4-atp-adenosine-triphosphate"),
            Some("ATP: Adenosine Triphosphate")
        );
        assert_eq!(catalog.title("not-a-chapter"), None);
    }

    #[test]
    fn test_module_ids_preserve_declared_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.module_ids("7-7-regulation-of-cellular-respiration"),
            &["m62790", "m62791", "m62792"]
        );
        assert!(catalog.module_ids("unknown").is_empty());
    }

    #[test]
    fn test_url_derivation() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.mirror_url_for_module(MIRROR_RAW_BASE, "m62767"),
            "https://raw.githubusercontent.com/openstax/osbooks-biology-bundle/main/modules/m62767/index.cnxml"
        );
        assert_eq!(
            catalog.citation_url("6-4-atp-adenosine-triphosphate"),
            "https://openstax.org/books/biology-ap-courses/pages/6-4-atp-adenosine-triphosphate"
        );
    }

    #[test]
    fn test_chapter_list_for_prompt_format() {
        let catalog = Catalog::builtin();
        let list = catalog.chapter_list_for_prompt();
        assert!(list.contains("- 6-4-atp-adenosine-triphosphate: ATP: Adenosine Triphosphate"));
        assert_eq!(list.lines().count(), catalog.len());
    }
}
