//! Turns paint commands into cell writes on any grid.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, PaintCmd};
use crate::ui::core::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A grid of cells. Writes outside `bounds()` are ignored by `rasterize`.
pub trait Surface {
    fn bounds(&self) -> Rect;

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style);

    fn patch_style(&mut self, x: u16, y: u16, style: Style);
}

pub fn rasterize<S: Surface + ?Sized>(surface: &mut S, cmds: &[PaintCmd]) {
    for cmd in cmds {
        match cmd {
            PaintCmd::Fill { rect, style } => fill(surface, *rect, *style),
            PaintCmd::Restyle { rect, style } => restyle(surface, *rect, *style),
            PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            } => text_run(surface, *pos, text, *style, *clip),
            PaintCmd::Border { rect, style, kind } => border(surface, *rect, *style, *kind),
        }
    }
}

fn fill<S: Surface + ?Sized>(surface: &mut S, rect: Rect, style: Style) {
    let clip = rect.intersect(surface.bounds());
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            surface.put(x, y, " ", style);
        }
    }
}

fn restyle<S: Surface + ?Sized>(surface: &mut S, rect: Rect, style: Style) {
    let clip = rect.intersect(surface.bounds());
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            surface.patch_style(x, y, style);
        }
    }
}

fn text_run<S: Surface + ?Sized>(
    surface: &mut S,
    pos: Pos,
    text: &str,
    style: Style,
    clip: Option<Rect>,
) {
    let bounds = surface.bounds();
    let clip = clip.unwrap_or(bounds).intersect(bounds);
    if clip.is_empty() || pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }

    let y = pos.y;
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x >= clip.right() || x.saturating_add(w) > clip.right() {
            // Wide glyphs are never cut in half.
            break;
        }
        if x >= clip.x {
            surface.put(x, y, g, style);
            for dx in 1..w {
                surface.put(x + dx, y, " ", style);
            }
        }
        x = x.saturating_add(w);
    }
}

fn border<S: Surface + ?Sized>(surface: &mut S, rect: Rect, style: Style, kind: BorderKind) {
    let rect = rect.intersect(surface.bounds());
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    let (tl, tr, bl, br, h, v) = kind.glyphs();
    let mut buf = [0u8; 4];
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    surface.put(rect.x, rect.y, tl.encode_utf8(&mut buf), style);
    surface.put(right, rect.y, tr.encode_utf8(&mut buf), style);
    surface.put(rect.x, bottom, bl.encode_utf8(&mut buf), style);
    surface.put(right, bottom, br.encode_utf8(&mut buf), style);
    for x in rect.x + 1..right {
        surface.put(x, rect.y, h.encode_utf8(&mut buf), style);
        surface.put(x, bottom, h.encode_utf8(&mut buf), style);
    }
    for y in rect.y + 1..bottom {
        surface.put(rect.x, y, v.encode_utf8(&mut buf), style);
        surface.put(right, y, v.encode_utf8(&mut buf), style);
    }
}
