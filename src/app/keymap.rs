//! 快捷键：按键 → 面板命令

use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::kernel::services::adapters::parse_keybinding;
use crate::kernel::services::ports::KeybindingRule;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardCommand {
    NavigateNext,
    NavigatePrevious,
    CopyCurrent,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Quit,
}

impl BoardCommand {
    pub const ALL: [BoardCommand; 8] = [
        BoardCommand::NavigateNext,
        BoardCommand::NavigatePrevious,
        BoardCommand::CopyCurrent,
        BoardCommand::ScrollUp,
        BoardCommand::ScrollDown,
        BoardCommand::PageUp,
        BoardCommand::PageDown,
        BoardCommand::Quit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BoardCommand::NavigateNext => "navigateNext",
            BoardCommand::NavigatePrevious => "navigatePrevious",
            BoardCommand::CopyCurrent => "copyCurrent",
            BoardCommand::ScrollUp => "scrollUp",
            BoardCommand::ScrollDown => "scrollDown",
            BoardCommand::PageUp => "pageUp",
            BoardCommand::PageDown => "pageDown",
            BoardCommand::Quit => "quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: FxHashMap<Key, BoardCommand>,
}

impl Keymap {
    pub fn with_defaults() -> Self {
        let mut bindings = FxHashMap::default();
        bindings.reserve(12);

        bindings.insert(Key::simple(KeyCode::Down), BoardCommand::NavigateNext);
        bindings.insert(Key::simple(KeyCode::Char('j')), BoardCommand::NavigateNext);
        bindings.insert(Key::simple(KeyCode::Up), BoardCommand::NavigatePrevious);
        bindings.insert(Key::simple(KeyCode::Char('k')), BoardCommand::NavigatePrevious);
        bindings.insert(Key::simple(KeyCode::Enter), BoardCommand::CopyCurrent);

        bindings.insert(Key::ctrl(KeyCode::Up), BoardCommand::ScrollUp);
        bindings.insert(Key::ctrl(KeyCode::Down), BoardCommand::ScrollDown);
        bindings.insert(Key::simple(KeyCode::PageUp), BoardCommand::PageUp);
        bindings.insert(Key::simple(KeyCode::PageDown), BoardCommand::PageDown);

        bindings.insert(Key::simple(KeyCode::Char('q')), BoardCommand::Quit);
        bindings.insert(Key::simple(KeyCode::Esc), BoardCommand::Quit);
        bindings.insert(Key::ctrl(KeyCode::Char('c')), BoardCommand::Quit);

        Self { bindings }
    }

    /// Defaults, then each rule in order. A command prefixed with `-`
    /// removes the binding instead.
    pub fn from_rules(rules: &[KeybindingRule]) -> Self {
        let mut keymap = Self::with_defaults();
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "invalid keybinding");
                continue;
            };
            let (unbind, name) = match rule.command.trim().strip_prefix('-') {
                Some(name) => (true, name),
                None => (false, rule.command.as_str()),
            };
            let Some(command) = BoardCommand::from_name(name) else {
                tracing::warn!(command = %rule.command, "unknown command in keybinding");
                continue;
            };
            if unbind {
                if keymap.bindings.get(&key) == Some(&command) {
                    keymap.unbind(&key);
                }
            } else {
                keymap.bind(key, command);
            }
        }
        keymap
    }

    pub fn bind(&mut self, key: Key, command: BoardCommand) {
        self.bindings.insert(normalize(key), command);
    }

    pub fn unbind(&mut self, key: &Key) -> Option<BoardCommand> {
        self.bindings.remove(&normalize(*key))
    }

    pub fn resolve(&self, key: &Key) -> Option<BoardCommand> {
        self.bindings.get(&normalize(*key)).copied()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Terminals report Shift+letter as an uppercase char; bindings store the
/// lowercase letter plus SHIFT.
fn normalize(key: Key) -> Key {
    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_uppercase() => Key::new(
            KeyCode::Char(ch.to_ascii_lowercase()),
            key.modifiers | KeyModifiers::SHIFT,
        ),
        _ => key,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/keymap.rs"]
mod tests;
