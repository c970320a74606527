use crate::kernel::cursor::Cursor;
use crate::kernel::prompt::PromptList;
use crate::kernel::services::ports::LoadError;
use crate::kernel::timer::Timings;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(LoadError),
}

/// Transient visual state of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardFeedback {
    /// Generation of the active highlight, if any.
    pub highlight: Option<u64>,
    pub copying: bool,
}

impl CardFeedback {
    pub fn is_highlighted(&self) -> bool {
        self.highlight.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationState {
    pub visible: bool,
    pub generation: u64,
}

/// Pending request for the view to bring a card on screen.
///
/// `generation` is unique per request, so repeated requests for the same
/// card are still distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub index: usize,
    pub smooth: bool,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct BoardState {
    pub prompts: PromptList,
    pub status: LoadStatus,
    pub loading_visible: bool,
    pub cursor: Cursor,
    pub feedback: Vec<CardFeedback>,
    pub notification: NotificationState,
    pub scroll_request: Option<ScrollRequest>,
    /// Bumped every time `prompts` is replaced so views know to re-render.
    pub revision: u64,
    pub timings: Timings,
    pub(crate) load_requested: bool,
    highlight_seq: u64,
}

impl BoardState {
    pub fn new(timings: Timings) -> Self {
        Self {
            prompts: PromptList::default(),
            status: LoadStatus::Loading,
            loading_visible: true,
            cursor: Cursor::NONE,
            feedback: Vec::new(),
            notification: NotificationState::default(),
            scroll_request: None,
            revision: 0,
            timings,
            load_requested: false,
            highlight_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn error(&self) -> Option<&LoadError> {
        match &self.status {
            LoadStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn card(&self, index: usize) -> Option<&CardFeedback> {
        self.feedback.get(index)
    }

    pub(crate) fn set_prompts(&mut self, prompts: PromptList) {
        self.feedback = vec![CardFeedback::default(); prompts.len()];
        self.prompts = prompts;
        self.cursor = Cursor::NONE;
        self.scroll_request = None;
        self.status = LoadStatus::Ready;
        self.revision = self.revision.wrapping_add(1);
    }

    pub(crate) fn next_highlight_generation(&mut self) -> u64 {
        self.highlight_seq = self.highlight_seq.wrapping_add(1);
        self.highlight_seq
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
