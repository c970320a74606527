use std::time::Duration;

pub const DEFAULT_HIGHLIGHT_MS: u64 = 1000;
pub const DEFAULT_COPYING_MS: u64 = 500;
pub const DEFAULT_NOTIFICATION_MS: u64 = 2000;

/// A fire-and-forget scheduled task. The runtime sleeps, then feeds the timer
/// back into the store as `Action::TimerFired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Drop the transient highlight of `index`, unless a newer highlight
    /// (different generation) replaced it in the meantime.
    HighlightExpired { index: usize, generation: u64 },
    /// End the "copying" state of `index` and advance to the next card.
    CopyingFinished { index: usize },
    NotificationExpired { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub highlight: Duration,
    pub copying: Duration,
    pub notification: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            highlight: Duration::from_millis(DEFAULT_HIGHLIGHT_MS),
            copying: Duration::from_millis(DEFAULT_COPYING_MS),
            notification: Duration::from_millis(DEFAULT_NOTIFICATION_MS),
        }
    }
}
