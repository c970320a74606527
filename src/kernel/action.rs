use crate::kernel::prompt::PromptList;
use crate::kernel::services::ports::{CopyOutcome, LoadError, ResourceLocation};
use crate::kernel::timer::Timer;

#[derive(Debug, Clone)]
pub enum Action {
    /// Start the one-shot prompt load.
    Load(ResourceLocation),
    /// The loader is done, successfully or not; hide the loading indicator.
    LoadingFinished,
    PromptsLoaded(Result<PromptList, LoadError>),
    NavigateNext,
    NavigatePrevious,
    /// Copy the prompt under the cursor, if any.
    CopyCurrent,
    /// Copy an arbitrary index. Out-of-range values, negative included, are
    /// ignored.
    CopyPrompt {
        index: isize,
    },
    ClipboardWritten {
        index: usize,
        outcome: CopyOutcome,
    },
    TimerFired(Timer),
}
