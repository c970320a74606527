use super::message::AppMessage;
use crate::kernel::services::adapters::clipboard::{LegacyClipboard, SystemClipboard};
use crate::kernel::services::adapters::fetch::DefaultFetcher;
use crate::kernel::services::adapters::loader::Loader;
use crate::kernel::services::adapters::offline::OfflineCache;
use crate::kernel::services::ports::{
    ClipboardWriter, CopyAttempt, CopyError, CopyOutcome, LegacyCopy, ResourceFetcher,
    ResourceLocation, Settings,
};
use crate::kernel::{Effect, Timer};
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

/// IO collaborators the runtime drives. Tests swap in fakes.
pub struct RuntimeServices {
    pub fetcher: Arc<dyn ResourceFetcher>,
    pub clipboard: Arc<dyn ClipboardWriter>,
    pub legacy: Arc<dyn LegacyCopy>,
    pub offline: Option<OfflineCache>,
}

impl RuntimeServices {
    pub fn from_settings(settings: &Settings) -> Self {
        let offline = if settings.offline_cache {
            OfflineCache::default_location()
        } else {
            None
        };
        Self {
            fetcher: Arc::new(DefaultFetcher::default()),
            clipboard: Arc::new(SystemClipboard::spawn()),
            legacy: Arc::new(LegacyClipboard::new(settings.clipboard.fallback)),
            offline,
        }
    }
}

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    loader: Arc<Loader>,
    clipboard: Arc<dyn ClipboardWriter>,
    legacy: Arc<dyn LegacyCopy>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>, services: RuntimeServices) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;

        let mut loader = Loader::new(services.fetcher);
        if let Some(cache) = services.offline {
            loader = loader.with_offline_cache(cache);
        }

        Ok(Self {
            runtime,
            tx,
            loader: Arc::new(loader),
            clipboard: services.clipboard,
            legacy: services.legacy,
        })
    }

    pub fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::LoadPrompts(location) => self.load_prompts(location),
            Effect::WriteClipboard { index, text } => self.write_clipboard(index, text),
            Effect::Schedule { after, timer } => self.schedule(after, timer),
        }
    }

    pub fn load_prompts(&self, location: ResourceLocation) {
        let tx = self.tx.clone();
        let loader = self.loader.clone();
        self.runtime.spawn(async move {
            tracing::info!(%location, "loading prompts");
            let finished_tx = tx.clone();
            let result = loader
                .load(&location, move || {
                    let _ = finished_tx.send(AppMessage::LoadingFinished);
                })
                .await;
            let _ = tx.send(AppMessage::PromptsLoaded(result));
        });
    }

    pub fn write_clipboard(&self, index: usize, text: String) {
        let tx = self.tx.clone();
        let clipboard = self.clipboard.clone();
        let legacy = self.legacy.clone();
        self.runtime.spawn(async move {
            let outcome = copy_text(clipboard, legacy, text).await;
            let _ = tx.send(AppMessage::ClipboardWritten { index, outcome });
        });
    }

    /// Fire-and-forget timer; never cancelled.
    pub fn schedule(&self, after: Duration, timer: Timer) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(after).await;
            let _ = tx.send(AppMessage::TimerFired(timer));
        });
    }
}

async fn copy_text(
    clipboard: Arc<dyn ClipboardWriter>,
    legacy: Arc<dyn LegacyCopy>,
    text: String,
) -> CopyOutcome {
    let primary = match clipboard.write_text(&text).await {
        CopyAttempt::Copied => return CopyOutcome::Primary,
        CopyAttempt::Failed(err) => err,
    };
    tracing::info!(error = %primary, "clipboard write failed, trying fallback");

    let fallback = tokio::task::spawn_blocking(move || legacy.copy(&text))
        .await
        .unwrap_or_else(|e| CopyAttempt::Failed(CopyError::Io(e.to_string())));
    match fallback {
        CopyAttempt::Copied => CopyOutcome::Fallback,
        CopyAttempt::Failed(fallback) => CopyOutcome::Failed { primary, fallback },
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
