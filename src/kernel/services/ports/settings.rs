use crate::kernel::timer::{
    Timings, DEFAULT_COPYING_MS, DEFAULT_HIGHLIGHT_MS, DEFAULT_NOTIFICATION_MS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default)]
    pub timings: TimingSettings,
    #[serde(default)]
    pub clipboard: ClipboardSettings,
    #[serde(default = "default_offline_cache")]
    pub offline_cache: bool,
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
}

fn default_offline_cache() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resource: None,
            timings: TimingSettings::default(),
            clipboard: ClipboardSettings::default(),
            offline_cache: default_offline_cache(),
            keybindings: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingSettings {
    #[serde(default = "default_highlight_ms")]
    pub highlight_ms: u64,
    #[serde(default = "default_copying_ms")]
    pub copying_ms: u64,
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
}

fn default_highlight_ms() -> u64 {
    DEFAULT_HIGHLIGHT_MS
}

fn default_copying_ms() -> u64 {
    DEFAULT_COPYING_MS
}

fn default_notification_ms() -> u64 {
    DEFAULT_NOTIFICATION_MS
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            highlight_ms: DEFAULT_HIGHLIGHT_MS,
            copying_ms: DEFAULT_COPYING_MS,
            notification_ms: DEFAULT_NOTIFICATION_MS,
        }
    }
}

impl TimingSettings {
    pub fn to_timings(self) -> Timings {
        Timings {
            highlight: Duration::from_millis(self.highlight_ms),
            copying: Duration::from_millis(self.copying_ms),
            notification: Duration::from_millis(self.notification_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Helper commands first, then OSC52.
    #[default]
    Auto,
    Command,
    Osc52,
    None,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ClipboardSettings {
    #[serde(default)]
    pub fallback: FallbackMode,
}
