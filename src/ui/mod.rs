//! UI layer (thin wrapper over `ratatui`).
//!
//! Views record `PaintCmd`s; a backend turns them into terminal cells. Only
//! `backend::terminal` mentions `ratatui` types.

pub mod backend;
pub mod core;
