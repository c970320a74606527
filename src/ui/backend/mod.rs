//! Rendering backends.
//!
//! Both backends share `raster`, so headless tests see the same cells the
//! terminal does.

use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

pub mod raster;
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
