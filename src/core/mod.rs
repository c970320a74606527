//! Core types shared by every frontend.

pub mod event;

pub use event::{InputEvent, Key, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
