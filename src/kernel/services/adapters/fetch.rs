//! Resource fetchers for local files and HTTP URLs.

use crate::kernel::services::ports::{
    BoxFuture, FetchError, FetchResponse, ResourceFetcher, ResourceLocation,
};
use std::path::Path;

/// Reads local files. A missing file is reported as status 404 so it surfaces
/// the same way as a missing remote resource.
#[derive(Debug, Default, Clone)]
pub struct FileFetcher;

impl FileFetcher {
    pub async fn read(&self, path: &Path) -> Result<FetchResponse, FetchError> {
        match tokio::fs::read(path).await {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FetchResponse::status(404)),
            Err(e) => Err(FetchError(format!("{}: {}", path.display(), e))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError(e.to_string()))?;
        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Ok(FetchResponse::status(status));
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError(e.to_string()))?;
        Ok(FetchResponse {
            status,
            body: body.to_vec(),
        })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatches on the location kind.
#[derive(Debug, Clone, Default)]
pub struct DefaultFetcher {
    file: FileFetcher,
    http: HttpFetcher,
}

impl ResourceFetcher for DefaultFetcher {
    fn fetch<'a>(
        &'a self,
        location: &'a ResourceLocation,
    ) -> BoxFuture<'a, Result<FetchResponse, FetchError>> {
        Box::pin(async move {
            match location {
                ResourceLocation::File(path) => self.file.read(path).await,
                ResourceLocation::Http(url) => self.http.get(url).await,
            }
        })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/fetch.rs"]
mod tests;
