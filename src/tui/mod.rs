//! Terminal frontend (crossterm + ratatui).
//!
//! Kept apart from `kernel` and `views` so the board can be driven headless.

pub mod crossterm;
pub mod terminal_guard;
