//! Cloud object-storage source
//!
//! Reads module documents and context fragments from a public GCS bucket via
//! the plain `storage.googleapis.com/<bucket>/<object>` endpoint. A 404 is a
//! definitive "no answer"; any other non-success status is a provider error
//! that the caller's chain recovers from.

use crate::error::{ContentError, Result};
use crate::source::ModuleSource;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// GCS-backed content source
pub struct BucketSource {
    client: Client,
    bucket: String,
    prefix: String,
}

impl BucketSource {
    /// Create a bucket source for `bucket`, reading objects under `prefix`
    pub fn new(bucket: impl Into<String>, prefix: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            bucket: bucket.into(),
            prefix: prefix.into(),
        }
    }

    fn object_url(&self, object: &str) -> String {
        format!(
            "https://storage.googleapis.com/{}/{}{}",
            self.bucket, self.prefix, object
        )
    }

    /// Download a named object as text. `Ok(None)` on 404.
    pub async fn read_object(&self, object: &str) -> Result<Option<String>> {
        let url = self.object_url(object);
        debug!("bucket read: {}", url);

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
                "bucket",
                format!("status {} for {}", status, url),
            )),
        }
    }
}

#[async_trait]
impl ModuleSource for BucketSource {
    fn name(&self) -> &str {
        "bucket"
    }

    async fn try_fetch(&self, module_id: &str) -> Result<Option<String>> {
        self.read_object(&format!("{}.cnxml", module_id)).await
    }
}
