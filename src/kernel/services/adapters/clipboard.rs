//! 剪贴板服务
//!
//! 主路径：系统剪贴板（arboard），在独立线程中持有，避免阻塞 UI。
//! 备用路径：见 `legacy`（剪贴板辅助进程 / OSC52）。

pub mod legacy;
pub mod osc52;

use crate::kernel::services::ports::{BoxFuture, ClipboardWriter, CopyAttempt, CopyError};
use std::sync::mpsc;
use tokio::sync::oneshot;

pub use legacy::{ClipboardHolder, HelperCommand, LegacyClipboard};

struct WriteRequest {
    text: String,
    reply: oneshot::Sender<CopyAttempt>,
}

/// System clipboard owned by a dedicated thread.
///
/// Some platforms drop clipboard contents together with the last handle, so
/// the handle lives as long as the service.
pub struct SystemClipboard {
    tx: mpsc::Sender<WriteRequest>,
}

impl SystemClipboard {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel::<WriteRequest>();
        let spawned = std::thread::Builder::new()
            .name("promptboard-clipboard".to_string())
            .spawn(move || serve(rx));
        if let Err(e) = spawned {
            tracing::error!(error = %e, "failed to start clipboard thread");
        }
        Self { tx }
    }
}

fn serve(rx: mpsc::Receiver<WriteRequest>) {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => Some(clipboard),
        Err(e) => {
            tracing::info!(error = %e, "system clipboard unavailable");
            None
        }
    };

    for request in rx {
        let attempt: CopyAttempt = match clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(request.text)
                .map_err(|e| CopyError::Rejected(e.to_string()))
                .into(),
            None => CopyAttempt::Failed(CopyError::Unavailable),
        };
        let _ = request.reply.send(attempt);
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> BoxFuture<'a, CopyAttempt> {
        Box::pin(async move {
            let (reply, rx) = oneshot::channel();
            let request = WriteRequest {
                text: text.to_string(),
                reply,
            };
            if self.tx.send(request).is_err() {
                return CopyAttempt::Failed(CopyError::Unavailable);
            }
            rx.await
                .unwrap_or(CopyAttempt::Failed(CopyError::Unavailable))
        })
    }
}
