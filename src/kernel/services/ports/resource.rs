//! Prompt resource contracts: where prompts come from and how loading fails.

use super::runtime::BoxFuture;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_RESOURCE: &str = "prompts.json";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceLocation {
    File(PathBuf),
    Http(String),
}

impl ResourceLocation {
    /// `http://` and `https://` values are URLs, everything else is a path.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ResourceLocation::Http(trimmed.to_string())
        } else {
            ResourceLocation::File(PathBuf::from(trimmed))
        }
    }

    pub fn is_http(&self) -> bool {
        matches!(self, ResourceLocation::Http(_))
    }
}

impl Default for ResourceLocation {
    fn default() -> Self {
        ResourceLocation::File(PathBuf::from(DEFAULT_RESOURCE))
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLocation::File(path) => write!(f, "{}", path.display()),
            ResourceLocation::Http(url) => f.write_str(url),
        }
    }
}

/// Raw transport result. `status` follows HTTP semantics for every location
/// kind; a missing local file reports 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FetchError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    #[error("invalid prompt file: {0}")]
    ParseFailure(String),
    #[error("failed to fetch prompts: {0}")]
    Transport(String),
}

pub trait ResourceFetcher: Send + Sync {
    fn fetch<'a>(
        &'a self,
        location: &'a ResourceLocation,
    ) -> BoxFuture<'a, Result<FetchResponse, FetchError>>;
}
