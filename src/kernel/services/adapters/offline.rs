//! 离线缓存
//!
//! 远程资源加载成功后保存原始内容；之后若网络不可达，则回退到缓存内容。
//! 所有错误都被吞掉，不影响正常加载流程。

use super::paths::{ensure_dir, get_offline_dir, hash_key};
use crate::kernel::services::ports::ResourceLocation;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct OfflineCache {
    dir: PathBuf,
}

impl OfflineCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Cache under the default config directory, if one can be determined.
    pub fn default_location() -> Option<Self> {
        get_offline_dir().map(Self::new)
    }

    fn entry_path(&self, location: &ResourceLocation) -> PathBuf {
        self.dir
            .join(format!("{}.json", hash_key(&location.to_string())))
    }

    /// Only remote resources are cached.
    pub async fn store(&self, location: &ResourceLocation, body: &[u8]) {
        if !location.is_http() {
            return;
        }
        let path = self.entry_path(location);
        let dir = self.dir.clone();
        let body = body.to_vec();
        let result = tokio::task::spawn_blocking(move || {
            ensure_dir(&dir)?;
            std::fs::write(&path, body)
        })
        .await;
        match result {
            Ok(Ok(())) => tracing::debug!(%location, "offline copy updated"),
            Ok(Err(e)) => tracing::debug!(%location, error = %e, "offline copy not written"),
            Err(e) => tracing::debug!(%location, error = %e, "offline copy task failed"),
        }
    }

    pub async fn load(&self, location: &ResourceLocation) -> Option<Vec<u8>> {
        if !location.is_http() {
            return None;
        }
        tokio::fs::read(self.entry_path(location)).await.ok()
    }
}
