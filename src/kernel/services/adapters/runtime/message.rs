use crate::kernel::prompt::PromptList;
use crate::kernel::services::ports::{CopyOutcome, LoadError};
use crate::kernel::{Action, Timer};

#[derive(Debug)]
pub enum AppMessage {
    LoadingFinished,
    PromptsLoaded(Result<PromptList, LoadError>),
    ClipboardWritten { index: usize, outcome: CopyOutcome },
    TimerFired(Timer),
}

impl From<AppMessage> for Action {
    fn from(message: AppMessage) -> Self {
        match message {
            AppMessage::LoadingFinished => Action::LoadingFinished,
            AppMessage::PromptsLoaded(result) => Action::PromptsLoaded(result),
            AppMessage::ClipboardWritten { index, outcome } => {
                Action::ClipboardWritten { index, outcome }
            }
            AppMessage::TimerFired(timer) => Action::TimerFired(timer),
        }
    }
}
