//! HTTP client for the upstream library API.

use tracing::debug;

use kinoteka_core::LibraryItem;

use crate::SourceError;
use crate::provider::LibrarySource;

pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// `base_url` points at the API root, e.g. `http://host:3000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, SourceError> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "library API request");

        let resp = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound);
        }

        if !resp.status().is_success() {
            return Err(SourceError::Upstream(format!(
                "library API returned {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| SourceError::Upstream(format!("parse JSON: {e}")))
    }
}

#[async_trait::async_trait]
impl LibrarySource for HttpSource {
    async fn fetch_library(&self, limit: u32) -> Result<Vec<LibraryItem>, SourceError> {
        self.get_json("/library", &[("limit", limit.to_string())])
            .await
    }

    async fn fetch_item(&self, id: u64) -> Result<LibraryItem, SourceError> {
        self.get_json("/library/item", &[("kp_id", id.to_string())])
            .await
    }
}
