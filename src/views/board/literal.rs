//! Prompt text as inert terminal text.
//!
//! Control characters would be interpreted by the terminal, so each one is
//! replaced with a visible stand-in: C0 controls and DEL use caret notation
//! (`^[`, `^G`, `^?`), C1 controls become U+FFFD. Tabs expand to the next tab
//! stop. Everything else, including markup such as `<script>`, is kept as is.

use unicode_width::UnicodeWidthChar;

pub const TAB_WIDTH: usize = 4;

const REPLACEMENT: char = '\u{FFFD}';

/// Split `text` into display lines. `\n` and `\r\n` end a line.
pub fn display_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| sanitize_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

/// Render a single line. Line breaks inside `line` are shown as `^J`.
pub fn sanitize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0usize;
    for ch in line.chars() {
        match ch {
            '\t' => {
                let pad = TAB_WIDTH - col % TAB_WIDTH;
                out.extend(std::iter::repeat(' ').take(pad));
                col += pad;
            }
            '\u{0}'..='\u{1f}' => {
                out.push('^');
                out.push(char::from(ch as u8 + 0x40));
                col += 2;
            }
            '\u{7f}' => {
                out.push_str("^?");
                col += 2;
            }
            '\u{80}'..='\u{9f}' => {
                out.push(REPLACEMENT);
                col += 1;
            }
            _ => {
                out.push(ch);
                col += ch.width().unwrap_or(0);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../../tests/unit/views/board/literal.rs"]
mod tests;
