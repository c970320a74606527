//! 应用层：输入事件 → 命令 → store，副作用交给异步运行时

mod board;
pub mod keymap;

pub use board::{EventResult, PromptBoard};
pub use keymap::{BoardCommand, Keymap};
