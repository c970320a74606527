use super::services::ports::{CopyOutcome, LoadError};
use super::{Action, BoardState, Cursor, Effect, LoadStatus, ScrollRequest, Timer};
use crate::kernel::prompt::PromptList;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn none() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: BoardState,
}

impl Store {
    pub fn new(state: BoardState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Load(location) => {
                if self.state.load_requested {
                    tracing::debug!(%location, "prompt load already issued");
                    return DispatchResult::none();
                }
                self.state.load_requested = true;
                self.state.status = LoadStatus::Loading;
                self.state.loading_visible = true;
                DispatchResult {
                    effects: vec![Effect::LoadPrompts(location)],
                    state_changed: true,
                }
            }
            Action::LoadingFinished => {
                let changed = self.state.loading_visible;
                self.state.loading_visible = false;
                DispatchResult::changed(changed)
            }
            Action::PromptsLoaded(result) => self.prompts_loaded(result),
            Action::NavigateNext => {
                let len = self.state.len();
                if len == 0 {
                    return DispatchResult::none();
                }
                self.state.cursor.next(len);
                self.highlight_current()
            }
            Action::NavigatePrevious => {
                let len = self.state.len();
                if len == 0 {
                    return DispatchResult::none();
                }
                self.state.cursor.previous(len);
                self.highlight_current()
            }
            Action::CopyCurrent => match self.state.cursor.index() {
                Some(index) => self.copy_prompt(index as isize),
                None => DispatchResult::none(),
            },
            Action::CopyPrompt { index } => self.copy_prompt(index),
            Action::ClipboardWritten { index, outcome } => self.clipboard_written(index, outcome),
            Action::TimerFired(timer) => self.timer_fired(timer),
        }
    }

    fn prompts_loaded(&mut self, result: Result<PromptList, LoadError>) -> DispatchResult {
        self.state.loading_visible = false;
        match result {
            Ok(prompts) => {
                tracing::info!(count = prompts.len(), "prompts loaded");
                self.state.set_prompts(prompts);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load prompts");
                self.state.status = LoadStatus::Failed(err);
            }
        }
        DispatchResult::changed(true)
    }

    /// Clear every highlight, highlight the cursor card, scroll it into view and
    /// schedule the highlight's removal.
    fn highlight_current(&mut self) -> DispatchResult {
        let Some(index) = self.state.cursor.index() else {
            return DispatchResult::none();
        };
        for card in &mut self.state.feedback {
            card.highlight = None;
        }
        match self.highlight(index) {
            Some(effect) => DispatchResult {
                effects: vec![effect],
                state_changed: true,
            },
            None => DispatchResult::changed(true),
        }
    }

    fn highlight(&mut self, index: usize) -> Option<Effect> {
        let generation = self.state.next_highlight_generation();
        let card = self.state.feedback.get_mut(index)?;
        card.highlight = Some(generation);
        self.state.scroll_request = Some(ScrollRequest {
            index,
            smooth: true,
            generation,
        });
        Some(Effect::Schedule {
            after: self.state.timings.highlight,
            timer: Timer::HighlightExpired { index, generation },
        })
    }

    fn copy_prompt(&mut self, index: isize) -> DispatchResult {
        let Some((index, prompt)) = usize::try_from(index)
            .ok()
            .and_then(|index| self.state.prompts.get(index).map(|p| (index, p)))
        else {
            return DispatchResult::none();
        };
        tracing::debug!(index, "copy requested");
        DispatchResult {
            effects: vec![Effect::WriteClipboard {
                index,
                text: prompt.text.clone(),
            }],
            state_changed: false,
        }
    }

    fn clipboard_written(&mut self, index: usize, outcome: CopyOutcome) -> DispatchResult {
        match outcome {
            CopyOutcome::Primary => {
                let Some(card) = self.state.feedback.get_mut(index) else {
                    return DispatchResult::none();
                };
                card.copying = true;
                self.state.cursor = Cursor::at(index);

                let mut effects = vec![self.show_notification()];
                effects.push(Effect::Schedule {
                    after: self.state.timings.copying,
                    timer: Timer::CopyingFinished { index },
                });
                DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
            CopyOutcome::Fallback => DispatchResult {
                effects: vec![self.show_notification()],
                state_changed: true,
            },
            CopyOutcome::Failed { primary, fallback } => {
                tracing::warn!(
                    index,
                    primary = %primary,
                    fallback = %fallback,
                    "copy to clipboard failed"
                );
                DispatchResult::none()
            }
        }
    }

    fn show_notification(&mut self) -> Effect {
        let notification = &mut self.state.notification;
        notification.visible = true;
        notification.generation = notification.generation.wrapping_add(1);
        Effect::Schedule {
            after: self.state.timings.notification,
            timer: Timer::NotificationExpired {
                generation: notification.generation,
            },
        }
    }

    fn timer_fired(&mut self, timer: Timer) -> DispatchResult {
        match timer {
            Timer::HighlightExpired { index, generation } => {
                let Some(card) = self.state.feedback.get_mut(index) else {
                    return DispatchResult::none();
                };
                if card.highlight != Some(generation) {
                    return DispatchResult::none();
                }
                card.highlight = None;
                DispatchResult::changed(true)
            }
            Timer::CopyingFinished { index } => {
                let len = self.state.len();
                let Some(card) = self.state.feedback.get_mut(index) else {
                    return DispatchResult::none();
                };
                card.copying = false;
                // Advance the view (not the cursor) to the following card.
                let next = (index + 1) % len;
                DispatchResult {
                    effects: self.highlight(next).into_iter().collect(),
                    state_changed: true,
                }
            }
            Timer::NotificationExpired { generation } => {
                let notification = &mut self.state.notification;
                if !notification.visible || notification.generation != generation {
                    return DispatchResult::none();
                }
                notification.visible = false;
                DispatchResult::changed(true)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
