//! Prompt loader: fetch, check status, parse.

use super::offline::OfflineCache;
use crate::kernel::prompt::PromptList;
use crate::kernel::services::ports::{LoadError, ResourceFetcher, ResourceLocation};
use std::sync::Arc;

pub struct Loader {
    fetcher: Arc<dyn ResourceFetcher>,
    offline: Option<OfflineCache>,
}

impl Loader {
    pub fn new(fetcher: Arc<dyn ResourceFetcher>) -> Self {
        Self {
            fetcher,
            offline: None,
        }
    }

    pub fn with_offline_cache(mut self, cache: OfflineCache) -> Self {
        self.offline = Some(cache);
        self
    }

    /// Load the prompt list from `location`.
    ///
    /// `on_finished` runs exactly once, on success and failure alike, before
    /// the result is returned. There are no retries.
    pub async fn load<F>(
        &self,
        location: &ResourceLocation,
        on_finished: F,
    ) -> Result<PromptList, LoadError>
    where
        F: FnOnce(),
    {
        let result = self.fetch_and_parse(location).await;
        on_finished();
        result
    }

    async fn fetch_and_parse(&self, location: &ResourceLocation) -> Result<PromptList, LoadError> {
        let body = match self.fetcher.fetch(location).await {
            Ok(response) if response.is_success() => {
                if let Some(cache) = &self.offline {
                    cache.store(location, &response.body).await;
                }
                response.body
            }
            Ok(response) => return Err(LoadError::HttpStatus(response.status)),
            Err(err) => match self.offline_body(location).await {
                Some(body) => {
                    tracing::warn!(%location, error = %err, "fetch failed, using offline copy");
                    body
                }
                None => return Err(LoadError::Transport(err.to_string())),
            },
        };

        PromptList::from_json(&body).map_err(|e| LoadError::ParseFailure(e.to_string()))
    }

    async fn offline_body(&self, location: &ResourceLocation) -> Option<Vec<u8>> {
        match &self.offline {
            Some(cache) => cache.load(location).await,
            None => None,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/loader.rs"]
mod tests;
