//! Data sources for the docs, version and events commands
//!
//! Local JSON fixtures are read first; with `fetch-remote` enabled the docs
//! index and the tag list are refreshed over HTTP once at startup.

use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::application::errors::SourceError;
use crate::application::services::{DocsIndex, Event, Tag};
use crate::infrastructure::config::SourcesConfig;

const USER_AGENT: &str = concat!("angie-bot/", env!("CARGO_PKG_VERSION"));

/// Everything the leaf commands need
#[derive(Debug, Default)]
pub struct SourceData {
    pub docs: DocsIndex,
    pub tags: Vec<Tag>,
    pub events: Vec<Event>,
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn read_optional<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T, SourceError> {
    match path {
        Some(path) => {
            let data = read_json(path)?;
            tracing::info!("Loaded {}", path.display());
            Ok(data)
        }
        None => Ok(T::default()),
    }
}

/// Read the configured fixture files. Missing entries give empty data.
pub fn load(config: &SourcesConfig) -> Result<SourceData, SourceError> {
    Ok(SourceData {
        docs: read_optional(config.docs.as_deref())?,
        tags: read_optional(config.versions.as_deref())?,
        events: read_optional(config.events.as_deref())?,
    })
}

/// Blocking HTTP client for the startup refresh. Must not run inside a tokio runtime.
pub struct RemoteSource {
    client: reqwest::blocking::Client,
}

impl RemoteSource {
    pub fn new() -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SourceError::Http(e.to_string()))?;
        Ok(Self { client })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| SourceError::Http(format!("{}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(SourceError::Http(format!("{}: HTTP {}", url, response.status())));
        }

        let body = response
            .text()
            .map_err(|e| SourceError::Http(format!("{}: {}", url, e)))?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `api-list.json` next to the API reference
    pub fn fetch_docs(&self, docs_base_url: &str) -> Result<DocsIndex, SourceError> {
        let url = format!("{}/api-list.json", docs_base_url.trim_end_matches('/'));
        self.get_json(&url)
    }

    pub fn fetch_tags(&self, repository: &str) -> Result<Vec<Tag>, SourceError> {
        let url = format!("https://api.github.com/repos/{}/tags?per_page=100", repository);
        self.get_json(&url)
    }
}

/// Load fixtures, then refresh from the network when enabled.
/// A failed refresh keeps the fixture data.
pub fn load_with_remote(config: &SourcesConfig) -> Result<SourceData, SourceError> {
    let mut data = load(config)?;
    if !config.fetch_remote {
        return Ok(data);
    }

    let remote = RemoteSource::new()?;

    match remote.fetch_docs(&config.docs_base_url) {
        Ok(docs) => {
            tracing::info!("Fetched {} doc barrels", docs.len());
            data.docs = docs;
        }
        Err(e) => tracing::warn!("Failed to fetch docs: {}", e),
    }

    match remote.fetch_tags(&config.repository) {
        Ok(tags) => {
            tracing::info!("Fetched {} tags for {}", tags.len(), config.repository);
            data.tags = tags;
        }
        Err(e) => tracing::warn!("Failed to fetch tags: {}", e),
    }

    Ok(data)
}
