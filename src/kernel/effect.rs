use crate::kernel::services::ports::ResourceLocation;
use crate::kernel::timer::Timer;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadPrompts(ResourceLocation),
    WriteClipboard { index: usize, text: String },
    Schedule { after: Duration, timer: Timer },
}
