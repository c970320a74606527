//! 提示卡片面板（纯渲染 + 命中测试）
//!
//! `render` 把提示列表物化为卡片元素；`BoardView` 负责布局、滚动、绘制与鼠标命中测试。

pub mod layout;
pub mod literal;
pub mod scroll;
pub mod theme;

use crate::kernel::{BoardState, CardFeedback, LoadStatus, PromptList, ScrollRequest};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, Painter};
use layout::{compute_board_layout, BoardLayout, CardSlot, CARD_INSET_X};
use literal::{display_lines, sanitize_line};
use scroll::ScrollState;
use theme::BoardTheme;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_MESSAGE: &str = "No prompts found in configuration file.";
pub const LOADING_MESSAGE: &str = "Loading prompts...";
pub const ERROR_MESSAGE: &str = "Failed to load prompts.";
pub const NOTIFICATION_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_ICON: &str = "📋";

const HEADER_TITLE: &str = "Prompts";
const HEADER_HINT: &str = "↑/↓ navigate · Enter copy · click copies · q quit";

/// One rendered card, tagged with the index of its prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardElement {
    pub index: usize,
    pub title: String,
    /// Display lines of the prompt text, before wrapping.
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBoard {
    /// The list was empty.
    Placeholder,
    Cards(Vec<CardElement>),
}

impl RenderedBoard {
    pub fn cards(&self) -> &[CardElement] {
        match self {
            RenderedBoard::Placeholder => &[],
            RenderedBoard::Cards(cards) => cards,
        }
    }
}

/// Materialise the prompt list. Prompt text is always treated as literal.
pub fn render(prompts: &PromptList) -> RenderedBoard {
    if prompts.is_empty() {
        return RenderedBoard::Placeholder;
    }
    RenderedBoard::Cards(
        prompts
            .iter()
            .enumerate()
            .map(|(index, prompt)| CardElement {
                index,
                title: sanitize_line(&prompt.title),
                lines: display_lines(&prompt.text),
            })
            .collect(),
    )
}

pub struct BoardView {
    revision: Option<u64>,
    board: RenderedBoard,
    layout: Option<BoardLayout>,
    scroll: ScrollState,
    handled_scroll: Option<u64>,
    pending_reveal: Option<ScrollRequest>,
    list_area: Rect,
    theme: BoardTheme,
}

impl BoardView {
    pub fn new(theme: BoardTheme) -> Self {
        Self {
            revision: None,
            board: RenderedBoard::Placeholder,
            layout: None,
            scroll: ScrollState::default(),
            handled_scroll: None,
            pending_reveal: None,
            list_area: Rect::default(),
            theme,
        }
    }

    pub fn board(&self) -> &RenderedBoard {
        &self.board
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll.offset()
    }

    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating()
    }

    /// Height of the card list as of the last paint.
    pub fn page_rows(&self) -> u16 {
        self.list_area.h
    }

    /// Discard everything rendered so far and render `prompts` from scratch.
    pub fn replace(&mut self, prompts: &PromptList, revision: u64) {
        self.board = render(prompts);
        self.revision = Some(revision);
        self.layout = None;
        self.scroll.reset();
        self.pending_reveal = None;
    }

    /// Pick up a new prompt list or scroll request from `state`.
    pub fn sync(&mut self, state: &BoardState) {
        if self.revision != Some(state.revision) {
            self.replace(&state.prompts, state.revision);
        }
        if let Some(request) = state.scroll_request {
            if self.handled_scroll != Some(request.generation) {
                self.handled_scroll = Some(request.generation);
                self.pending_reveal = Some(request);
            }
        }
    }

    pub fn tick(&mut self) -> bool {
        self.scroll.tick()
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let content = self.layout.as_ref().map_or(0, |l| l.content_height);
        self.scroll.scroll_by(delta, content, self.list_area.h);
    }

    /// Card under `pos`, as of the last paint.
    pub fn hit_test(&self, pos: Pos) -> Option<usize> {
        if !self.list_area.contains(pos) {
            return None;
        }
        let layout = self.layout.as_ref()?;
        let row = self.scroll.offset() + (pos.y - self.list_area.y) as u32;
        layout.slot_at_row(row).map(|slot| slot.index)
    }

    pub fn paint(&mut self, painter: &mut Painter, area: Rect, state: &BoardState) {
        self.sync(state);
        if area.is_empty() {
            return;
        }

        let (header, rest) = area.split_top(1);
        let (_, body) = rest.split_top(1);
        self.paint_header(painter, header);
        let body = body.inset(1, 0);
        self.list_area = Rect::default();

        if state.loading_visible {
            painter.text(
                Pos::new(body.x, body.y),
                LOADING_MESSAGE,
                self.theme.loading,
                body,
            );
        } else {
            match &state.status {
                // Loader finished but its result has not been applied yet.
                LoadStatus::Loading => {}
                LoadStatus::Failed(err) => self.paint_error(painter, body, &err.to_string()),
                LoadStatus::Ready if matches!(self.board, RenderedBoard::Placeholder) => {
                    painter.text(
                        Pos::new(body.x, body.y),
                        EMPTY_MESSAGE,
                        self.theme.placeholder,
                        body,
                    );
                }
                LoadStatus::Ready => self.paint_cards(painter, body, state),
            }
        }

        if state.notification.visible {
            self.paint_notification(painter, area);
        }
    }

    fn paint_header(&self, painter: &mut Painter, header: Rect) {
        let x = header.x.saturating_add(1);
        painter.text(Pos::new(x, header.y), HEADER_TITLE, self.theme.header, header);
        let hint_x = x
            .saturating_add(HEADER_TITLE.width() as u16)
            .saturating_add(3);
        painter.text(Pos::new(hint_x, header.y), HEADER_HINT, self.theme.hint, header);
    }

    fn paint_error(&self, painter: &mut Painter, body: Rect, detail: &str) {
        let (panel, _) = body.split_top(4);
        painter.border(panel, self.theme.error_border, BorderKind::Rounded);
        let inner = panel.inset(CARD_INSET_X, 1);
        painter.text(Pos::new(inner.x, inner.y), ERROR_MESSAGE, self.theme.error, inner);
        painter.text(
            Pos::new(inner.x, inner.y.saturating_add(1)),
            sanitize_line(detail),
            self.theme.hint,
            inner,
        );
    }

    fn paint_notification(&self, painter: &mut Painter, area: Rect) {
        let toast = format!(" ✓ {NOTIFICATION_MESSAGE} ");
        let width = toast.width() as u16;
        let x = area.right().saturating_sub(width.saturating_add(1)).max(area.x);
        let y = area.bottom() - 1;
        painter.text(Pos::new(x, y), toast, self.theme.notification, area);
    }

    fn paint_cards(&mut self, painter: &mut Painter, body: Rect, state: &BoardState) {
        self.list_area = body;
        if body.w < 2 {
            return;
        }
        let layout = match self.layout.take() {
            Some(layout) if layout.width == body.w => layout,
            _ => compute_board_layout(self.board.cards(), body.w),
        };
        self.scroll.clamp(layout.content_height, body.h);
        if let Some(request) = self.pending_reveal.take() {
            if let Some(slot) = layout.slot(request.index) {
                self.scroll
                    .reveal(slot.top, layout.content_height, body.h, request.smooth);
            }
        }

        let offset = self.scroll.offset();
        let bottom = offset + body.h as u32;
        let cards = self.board.cards();
        for slot in &layout.slots {
            if slot.bottom() <= offset {
                continue;
            }
            if slot.top >= bottom {
                break;
            }
            let title = cards.get(slot.index).map_or("", |c| c.title.as_str());
            let feedback = state.card(slot.index).copied().unwrap_or_default();
            self.paint_card(painter, body, offset, slot, title, feedback);
        }
        self.layout = Some(layout);
    }

    fn paint_card(
        &self,
        painter: &mut Painter,
        body: Rect,
        offset: u32,
        slot: &CardSlot,
        title: &str,
        feedback: CardFeedback,
    ) {
        let theme = &self.theme;
        let (border_style, kind) = if feedback.copying {
            (theme.border_copying, BorderKind::Thick)
        } else if feedback.is_highlighted() {
            (theme.border_highlight, BorderKind::Thick)
        } else {
            (theme.border, BorderKind::Rounded)
        };
        let (tl, tr, bl, br, h, v) = kind.glyphs();
        let inner_w = body.w.saturating_sub(2) as usize;
        let last = slot.height.saturating_sub(1);

        for row in 0..slot.height {
            let content_row = slot.top + row;
            if content_row < offset {
                continue;
            }
            let rel = content_row - offset;
            if rel >= body.h as u32 {
                break;
            }
            let y = body.y + rel as u16;
            let line = Rect::new(body.x, y, body.w, 1);

            if row == 0 || row == last {
                let (left, right) = if row == 0 { (tl, tr) } else { (bl, br) };
                let edge: String = std::iter::once(left)
                    .chain(std::iter::repeat(h).take(inner_w))
                    .chain(std::iter::once(right))
                    .collect();
                painter.text(Pos::new(body.x, y), edge, border_style, line);
            } else {
                painter.text(Pos::new(body.x, y), v.to_string(), border_style, line);
                painter.text(Pos::new(line.right() - 1, y), v.to_string(), border_style, line);

                let inner = Rect::new(
                    body.x + CARD_INSET_X,
                    y,
                    body.w.saturating_sub(CARD_INSET_X * 2),
                    1,
                );
                if row == 1 {
                    painter.text(Pos::new(inner.x, y), COPY_ICON, theme.icon, inner);
                    let title_x = inner.x.saturating_add(COPY_ICON.width() as u16 + 1);
                    painter.text(Pos::new(title_x, y), title, theme.title, inner);
                } else if let Some(text) = slot.lines.get(row as usize - 2) {
                    painter.text(Pos::new(inner.x, y), text.as_str(), theme.text, inner);
                }
            }

            if feedback.copying {
                painter.restyle(line, theme.card_copying);
            }
        }
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new(BoardTheme::default())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/board/mod.rs"]
mod tests;
