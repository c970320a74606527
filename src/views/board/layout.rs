use super::CardElement;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Blank rows between two cards.
pub const CARD_GAP: u32 = 1;
/// Border plus one column of padding on each side.
pub const CARD_INSET_X: u16 = 2;
/// Top border, title row, bottom border.
const CARD_CHROME_ROWS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSlot {
    pub index: usize,
    /// First row in content coordinates (0 = top of the first card).
    pub top: u32,
    pub height: u32,
    pub lines: Vec<String>,
}

impl CardSlot {
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    pub fn contains_row(&self, row: u32) -> bool {
        row >= self.top && row < self.bottom()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardLayout {
    pub width: u16,
    pub slots: Vec<CardSlot>,
    pub content_height: u32,
}

impl BoardLayout {
    pub fn slot(&self, index: usize) -> Option<&CardSlot> {
        self.slots.get(index)
    }

    pub fn slot_at_row(&self, row: u32) -> Option<&CardSlot> {
        // Slots are sorted by `top`.
        let idx = self.slots.partition_point(|slot| slot.bottom() <= row);
        self.slots.get(idx).filter(|slot| slot.contains_row(row))
    }
}

pub fn compute_board_layout(cards: &[CardElement], width: u16) -> BoardLayout {
    let text_width = width.saturating_sub(CARD_INSET_X * 2) as usize;
    let mut top = 0u32;
    let mut slots = Vec::with_capacity(cards.len());

    for card in cards {
        let lines: Vec<String> = card
            .lines
            .iter()
            .flat_map(|line| wrap_line(line, text_width))
            .collect();
        let height = (lines.len() + CARD_CHROME_ROWS) as u32;
        slots.push(CardSlot {
            index: card.index,
            top,
            height,
            lines,
        });
        top += height + CARD_GAP;
    }

    BoardLayout {
        width,
        content_height: top.saturating_sub(CARD_GAP),
        slots,
    }
}

/// Greedy wrap at display `width`, preferring the last whitespace. A word
/// longer than `width` is broken between graphemes.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 || UnicodeWidthStr::width(line) <= width {
        return vec![line.to_string()];
    }

    let mut out = Vec::new();
    let mut cur = String::new();
    let mut cur_w = 0usize;
    // Byte offset and width just past the last whitespace in `cur`.
    let mut brk: Option<(usize, usize)> = None;

    for g in line.graphemes(true) {
        let w = UnicodeWidthStr::width(g);
        if cur_w + w > width && !cur.is_empty() {
            match brk.take() {
                Some((byte, brk_w)) => {
                    let rest = cur.split_off(byte);
                    out.push(cur.trim_end().to_string());
                    cur = rest;
                    cur_w -= brk_w;
                }
                None => {
                    out.push(std::mem::take(&mut cur));
                    cur_w = 0;
                }
            }
            if cur_w + w > width && !cur.is_empty() {
                out.push(std::mem::take(&mut cur));
                cur_w = 0;
            }
        }
        cur.push_str(g);
        cur_w += w;
        if g.chars().all(char::is_whitespace) {
            brk = Some((cur.len(), cur_w));
        }
    }
    if !cur.is_empty() || out.is_empty() {
        out.push(cur);
    }
    out
}

#[cfg(test)]
#[path = "../../../tests/unit/views/board/layout.rs"]
mod tests;
