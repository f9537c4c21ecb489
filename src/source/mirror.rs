//! Origin-repository mirror source
//!
//! Fetches module CNXML from the public GitHub raw mirror of the OpenStax
//! book bundle. The URL is derived from the module id alone, so this source
//! needs no credentials and works as the last resort when the bucket copy is
//! missing.

use crate::error::{ContentError, Result};
use crate::source::ModuleSource;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// GitHub raw mirror source for module content
pub struct MirrorSource {
    client: Client,
    base: String,
}

impl MirrorSource {
    /// Create a mirror source rooted at `base`
    /// (e.g. `https://raw.githubusercontent.com/openstax/osbooks-biology-bundle/main/modules`)
    pub fn new(base: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            base: base.into(),
        }
    }

    fn module_url(&self, module_id: &str) -> String {
        format!("{}/{}/index.cnxml", self.base.trim_end_matches('/'), module_id)
    }
}

#[async_trait]
impl ModuleSource for MirrorSource {
    fn name(&self) -> &str {
        "mirror"
    }

    async fn try_fetch(&self, module_id: &str) -> Result<Option<String>> {
        let url = self.module_url(module_id);
        debug!("mirror fetch: {}", url);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let text = response.text().await?;
                if text.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(text))
                }
            }
            status => Err(ContentError::provider(
                "mirror",
                format!("status {} for {}", status, url),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_url() {
        let source = MirrorSource::new(
            "https://raw.githubusercontent.com/openstax/osbooks-biology-bundle/main/modules",
            Duration::from_secs(5),
        );
        assert_eq!(
            source.module_url("m62767"),
            "https://raw.githubusercontent.com/openstax/osbooks-biology-bundle/main/modules/m62767/index.cnxml"
        );

        // Trailing slash on the base is tolerated
        let source = MirrorSource::new("https://example.com/modules/", Duration::from_secs(5));
        assert_eq!(
            source.module_url("m1"),
            "https://example.com/modules/m1/index.cnxml"
        );
    }
}
