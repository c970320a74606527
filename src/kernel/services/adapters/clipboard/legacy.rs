//! Legacy copy path, used when the system clipboard rejects a write.
//!
//! The text is handed to a short-lived clipboard helper process (the
//! "holder"), or written to the terminal as an OSC52 sequence.

use super::osc52::{self, Osc52Env};
use crate::kernel::services::ports::{CopyAttempt, CopyError, FallbackMode, LegacyCopy};
use std::io::{self, Write};
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const HELPER_TIMEOUT: Duration = Duration::from_secs(2);
const HELPER_POLL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl HelperCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

/// Helpers for the current platform, in preference order.
pub fn platform_helpers() -> Vec<HelperCommand> {
    if cfg!(target_os = "macos") {
        vec![HelperCommand::new("pbcopy", Vec::<String>::new())]
    } else if cfg!(target_os = "windows") {
        vec![HelperCommand::new("clip", Vec::<String>::new())]
    } else {
        let mut helpers = Vec::new();
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            helpers.push(HelperCommand::new("wl-copy", Vec::<String>::new()));
        }
        helpers.push(HelperCommand::new("xclip", ["-selection", "clipboard"]));
        helpers.push(HelperCommand::new("xsel", ["--clipboard", "--input"]));
        helpers
    }
}

/// A running helper process holding the text until it is handed over.
///
/// Dropping the holder always releases the process: a helper that has not
/// exited yet is killed and reaped.
pub struct ClipboardHolder {
    child: Child,
    program: String,
}

impl ClipboardHolder {
    pub fn create(helper: &HelperCommand) -> io::Result<Self> {
        let child = helper.command().spawn()?;
        Ok(Self {
            child,
            program: helper.program.clone(),
        })
    }

    /// Write the text and close the helper's stdin.
    pub fn populate(&mut self, text: &str) -> io::Result<()> {
        let mut stdin = self
            .child
            .stdin
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "helper stdin closed"))?;
        stdin.write_all(text.as_bytes())?;
        stdin.flush()
    }

    /// Wait for the helper to take ownership of the text.
    pub fn commit(&mut self, timeout: Duration) -> Result<(), CopyError> {
        let deadline = Instant::now() + timeout;
        loop {
            match self.child.try_wait() {
                Ok(Some(status)) if status.success() => return Ok(()),
                Ok(Some(status)) => {
                    return Err(CopyError::Rejected(format!(
                        "{} exited with {}",
                        self.program, status
                    )))
                }
                Ok(None) if Instant::now() >= deadline => {
                    return Err(CopyError::Io(format!("{} timed out", self.program)))
                }
                Ok(None) => std::thread::sleep(HELPER_POLL),
                Err(e) => return Err(CopyError::Io(e.to_string())),
            }
        }
    }
}

impl Drop for ClipboardHolder {
    fn drop(&mut self) {
        if !matches!(self.child.try_wait(), Ok(Some(_))) {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
        tracing::trace!(program = %self.program, "clipboard holder released");
    }
}

pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

pub struct LegacyClipboard {
    mode: FallbackMode,
    helpers: Vec<HelperCommand>,
    helper_timeout: Duration,
    osc52_env: Osc52Env,
    osc52_out: SharedWriter,
}

impl LegacyClipboard {
    pub fn new(mode: FallbackMode) -> Self {
        Self {
            mode,
            helpers: platform_helpers(),
            helper_timeout: HELPER_TIMEOUT,
            osc52_env: Osc52Env::detect(),
            osc52_out: Arc::new(Mutex::new(io::stdout())),
        }
    }

    pub fn with_helpers(mut self, helpers: Vec<HelperCommand>) -> Self {
        self.helpers = helpers;
        self
    }

    pub fn with_helper_timeout(mut self, timeout: Duration) -> Self {
        self.helper_timeout = timeout;
        self
    }

    pub fn with_osc52_output(mut self, out: SharedWriter, env: Osc52Env) -> Self {
        self.osc52_out = out;
        self.osc52_env = env;
        self
    }

    fn copy_with_helpers(&self, text: &str) -> Result<(), CopyError> {
        let mut last_err = CopyError::Unavailable;
        for helper in &self.helpers {
            match copy_with_helper(helper, text, self.helper_timeout) {
                Ok(()) => {
                    tracing::debug!(program = %helper.program, "copied via helper");
                    return Ok(());
                }
                Err(err) => {
                    tracing::debug!(program = %helper.program, error = %err, "helper failed");
                    if err != CopyError::Unavailable {
                        last_err = err;
                    }
                }
            }
        }
        Err(last_err)
    }

    fn copy_with_osc52(&self, text: &str) -> Result<(), CopyError> {
        let mut out = self
            .osc52_out
            .lock()
            .map_err(|_| CopyError::Io("osc52 writer poisoned".to_string()))?;
        osc52::write_sequence(&mut *out, text, self.osc52_env).map_err(|e| match e {
            osc52::Osc52Error::TooLarge { bytes } => CopyError::TooLarge(bytes),
            osc52::Osc52Error::Io(msg) => CopyError::Io(msg),
        })
    }
}

fn copy_with_helper(helper: &HelperCommand, text: &str, timeout: Duration) -> Result<(), CopyError> {
    let mut holder = match ClipboardHolder::create(helper) {
        Ok(holder) => holder,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(CopyError::Unavailable),
        Err(e) => return Err(CopyError::Io(e.to_string())),
    };
    holder
        .populate(text)
        .map_err(|e| CopyError::Io(e.to_string()))?;
    holder.commit(timeout)
}

impl LegacyCopy for LegacyClipboard {
    fn copy(&self, text: &str) -> CopyAttempt {
        let result = match self.mode {
            FallbackMode::None => Err(CopyError::Unavailable),
            FallbackMode::Command => self.copy_with_helpers(text),
            FallbackMode::Osc52 => self.copy_with_osc52(text),
            FallbackMode::Auto => self
                .copy_with_helpers(text)
                .or_else(|_| self.copy_with_osc52(text)),
        };
        result.into()
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/clipboard/legacy.rs"]
mod tests;
