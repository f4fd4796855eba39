//! reqwest-based bugs API client
//!
//! Direct implementation of the `BugClient` trait. Every call is a single
//! request; there is no retry, backoff or timeout handling.

use crate::client::BugClient;
use crate::error::{RequestError, Result};
use crate::types::{Bug, BugDraft, BugId, BugPatch, BugUpdate};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

/// Bugs API client speaking JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpBugClient {
    http: Client,
    base_url: Url,
}

impl HttpBugClient {
    /// Create a client for the API rooted at `base_url`
    /// (e.g. `http://localhost:9001/api`)
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| RequestError::InvalidUrl(format!("{base_url}: {e}")))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(RequestError::InvalidUrl(base_url.to_string()));
        }

        // Url::join replaces the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn bugs_url(&self) -> Result<Url> {
        self.endpoint("bugs")
    }

    fn bug_url(&self, id: BugId) -> Result<Url> {
        self.endpoint(&format!("bugs/{}", id))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| RequestError::InvalidUrl(format!("{path}: {e}")))
    }
}

/// Decode a JSON body, mapping any non-2xx status to `RequestError::Status`
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::Status {
            status: status.as_u16(),
            message: response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read response body>".to_string()),
        });
    }

    Ok(response.json().await?)
}

#[async_trait]
impl BugClient for HttpBugClient {
    async fn list_bugs(&self) -> Result<Vec<Bug>> {
        let url = self.bugs_url()?;
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let bugs: Vec<Bug> = decode(response).await?;

        debug!("Fetched {} bugs", bugs.len());
        Ok(bugs)
    }

    async fn create_bug(&self, draft: &BugDraft) -> Result<Bug> {
        let url = self.bugs_url()?;
        debug!("POST {}", url);

        let response = self.http.post(url).json(draft).send().await?;
        decode(response).await
    }

    async fn update_bug(&self, id: BugId, patch: &BugPatch) -> Result<BugUpdate> {
        let url = self.bug_url(id)?;
        debug!("PATCH {}", url);

        let response = self.http.patch(url).json(patch).send().await?;
        decode(response).await
    }
}
