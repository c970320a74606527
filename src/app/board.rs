//! PromptBoard: glue between input, the store, the async runtime and the view.

use super::keymap::{BoardCommand, Keymap};
use crate::core::event::{InputEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime, RuntimeServices};
use crate::kernel::services::ports::{ResourceLocation, Settings};
use crate::kernel::{Action, BoardState, Store};
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::views::board::theme::BoardTheme;
use crate::views::BoardView;
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

const WHEEL_ROWS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

pub struct PromptBoard {
    store: Store,
    view: BoardView,
    keymap: Keymap,
    runtime: AsyncRuntime,
    rx: Receiver<AppMessage>,
    location: ResourceLocation,
    dirty: bool,
}

impl PromptBoard {
    pub fn new(
        location: ResourceLocation,
        settings: &Settings,
        services: RuntimeServices,
    ) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let runtime = AsyncRuntime::new(tx, services)?;
        Ok(Self {
            store: Store::new(BoardState::new(settings.timings.to_timings())),
            view: BoardView::default(),
            keymap: Keymap::from_rules(&settings.keybindings),
            runtime,
            rx,
            location,
            dirty: true,
        })
    }

    pub fn with_theme(mut self, theme: BoardTheme) -> Self {
        self.view = BoardView::new(theme);
        self
    }

    pub fn state(&self) -> &BoardState {
        self.store.state()
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn location(&self) -> &ResourceLocation {
        &self.location
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    pub fn is_animating(&self) -> bool {
        self.view.is_animating()
    }

    /// Issue the one prompt load.
    pub fn start(&mut self) {
        self.dispatch(Action::Load(self.location.clone()));
    }

    pub fn dispatch(&mut self, action: Action) {
        let result = self.store.dispatch(action);
        if result.state_changed {
            self.dirty = true;
        }
        for effect in result.effects {
            self.runtime.run_effect(effect);
        }
    }

    /// Apply every message already delivered. Returns whether any arrived.
    pub fn pump(&mut self) -> bool {
        let mut any = false;
        while let Ok(message) = self.rx.try_recv() {
            self.apply(message);
            any = true;
        }
        any
    }

    /// Block up to `timeout` for the next message, then drain the rest.
    pub fn wait_message(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(message) => {
                self.apply(message);
                self.pump();
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                tracing::error!("runtime channel closed");
                false
            }
        }
    }

    fn apply(&mut self, message: AppMessage) {
        tracing::trace!(?message, "app message");
        self.dispatch(message.into());
    }

    /// Advance view animations by one frame.
    pub fn tick(&mut self) -> bool {
        let moved = self.view.tick();
        if moved {
            self.dirty = true;
        }
        moved
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    return EventResult::Ignored;
                }
                match self.keymap.resolve(&key.key()) {
                    Some(command) => self.run_command(command),
                    None => EventResult::Ignored,
                }
            }
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Resize(..) | InputEvent::FocusGained => {
                self.dirty = true;
                EventResult::Consumed
            }
            InputEvent::FocusLost | InputEvent::Paste(_) => EventResult::Ignored,
        }
    }

    fn run_command(&mut self, command: BoardCommand) -> EventResult {
        match command {
            BoardCommand::NavigateNext => self.dispatch(Action::NavigateNext),
            BoardCommand::NavigatePrevious => self.dispatch(Action::NavigatePrevious),
            BoardCommand::CopyCurrent => {
                if self.state().cursor.index().is_none() {
                    return EventResult::Ignored;
                }
                self.dispatch(Action::CopyCurrent);
            }
            BoardCommand::ScrollUp => self.scroll_by(-1),
            BoardCommand::ScrollDown => self.scroll_by(1),
            BoardCommand::PageUp => self.scroll_by(-self.page_rows()),
            BoardCommand::PageDown => self.scroll_by(self.page_rows()),
            BoardCommand::Quit => return EventResult::Quit,
        }
        EventResult::Consumed
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventResult {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let pos = Pos::new(mouse.column, mouse.row);
                match self.view.hit_test(pos) {
                    Some(index) => {
                        self.dispatch(Action::CopyPrompt {
                            index: index as isize,
                        });
                        EventResult::Consumed
                    }
                    None => EventResult::Ignored,
                }
            }
            MouseEventKind::ScrollUp => {
                self.scroll_by(-WHEEL_ROWS);
                EventResult::Consumed
            }
            MouseEventKind::ScrollDown => {
                self.scroll_by(WHEEL_ROWS);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn page_rows(&self) -> i32 {
        self.view.page_rows().max(1) as i32
    }

    fn scroll_by(&mut self, delta: i32) {
        self.view.scroll_by(delta);
        self.dirty = true;
    }

    pub fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        let mut painter = Painter::new();
        self.view.paint(&mut painter, area, self.store.state());
        backend.draw(area, painter.cmds());
        self.dirty = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/board.rs"]
mod tests;
