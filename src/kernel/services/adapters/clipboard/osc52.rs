use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Write;

const OSC52_PREFIX: &str = "\x1b]52;c;";
const OSC52_SUFFIX_BEL: &str = "\x07";

const TMUX_PREFIX: &str = "\x1bPtmux;\x1b\x1b]52;c;";
const TMUX_SUFFIX: &str = "\x07\x1b\\";

// Many terminals apply fairly small OSC52 length limits; keep this conservative.
pub const OSC52_MAX_BYTES: usize = 100 * 1024; // 100KB

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Osc52Error {
    #[error("text too large for OSC52 ({} KB, limit {} KB)", .bytes / 1024, OSC52_MAX_BYTES / 1024)]
    TooLarge { bytes: usize },
    #[error("io error: {0}")]
    Io(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Osc52Env {
    pub is_tmux: bool,
}

impl Osc52Env {
    pub fn detect() -> Self {
        Self {
            is_tmux: std::env::var_os("TMUX").is_some(),
        }
    }
}

pub fn build_sequence(text: &str, env: Osc52Env) -> Result<String, Osc52Error> {
    let bytes = text.as_bytes();
    if bytes.len() > OSC52_MAX_BYTES {
        return Err(Osc52Error::TooLarge { bytes: bytes.len() });
    }

    let b64 = STANDARD.encode(bytes);
    if env.is_tmux {
        Ok(format!("{TMUX_PREFIX}{b64}{TMUX_SUFFIX}"))
    } else {
        Ok(format!("{OSC52_PREFIX}{b64}{OSC52_SUFFIX_BEL}"))
    }
}

pub fn write_sequence<W: Write + ?Sized>(
    w: &mut W,
    text: &str,
    env: Osc52Env,
) -> Result<(), Osc52Error> {
    let seq = build_sequence(text, env)?;
    w.write_all(seq.as_bytes())
        .and_then(|_| w.flush())
        .map_err(|e| Osc52Error::Io(e.to_string()))
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/clipboard/osc52.rs"]
mod tests;
