use super::geom::{Pos, Rect};
use super::style::Style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderKind {
    Plain,
    Rounded,
    Thick,
}

impl BorderKind {
    /// `(top-left, top-right, bottom-left, bottom-right, horizontal, vertical)`
    pub fn glyphs(self) -> (char, char, char, char, char, char) {
        match self {
            BorderKind::Plain => ('┌', '┐', '└', '┘', '─', '│'),
            BorderKind::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
            BorderKind::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    /// Blank the area with `style`.
    Fill { rect: Rect, style: Style },
    /// Patch the style of existing cells, keeping their symbols.
    Restyle { rect: Rect, style: Style },
    Text {
        pos: Pos,
        text: String,
        style: Style,
        clip: Option<Rect>,
    },
    Border {
        rect: Rect,
        style: Style,
        kind: BorderKind,
    },
}

/// Records paint commands for a backend to replay.
#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn fill(&mut self, rect: Rect, style: Style) {
        if !rect.is_empty() {
            self.cmds.push(PaintCmd::Fill { rect, style });
        }
    }

    pub fn restyle(&mut self, rect: Rect, style: Style) {
        if !rect.is_empty() {
            self.cmds.push(PaintCmd::Restyle { rect, style });
        }
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style, clip: Rect) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
            clip: Some(clip),
        });
    }

    pub fn border(&mut self, rect: Rect, style: Style, kind: BorderKind) {
        self.cmds.push(PaintCmd::Border { rect, style, kind });
    }
}
