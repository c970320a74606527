//! 卡片面板主题：颜色集中管理，按终端色彩能力降级。

use crate::ui::core::style::{Color, Mod, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("PROMPTBOARD_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if ["truecolor", "24bit", "direct"]
        .iter()
        .any(|tag| colorterm.contains(tag) || term.contains(tag))
    {
        return TerminalColorSupport::TrueColor;
    }
    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }
    TerminalColorSupport::Ansi16
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTheme {
    pub header: Style,
    pub hint: Style,
    pub border: Style,
    pub border_highlight: Style,
    pub border_copying: Style,
    pub card_copying: Style,
    pub icon: Style,
    pub title: Style,
    pub text: Style,
    pub loading: Style,
    pub placeholder: Style,
    pub error_border: Style,
    pub error: Style,
    pub notification: Style,
}

impl BoardTheme {
    pub fn for_terminal(support: TerminalColorSupport) -> Self {
        let c = |r, g, b| adapt(Color::Rgb(r, g, b), support);
        let accent = c(0x66, 0x7e, 0xea);
        let success = c(0x28, 0xa7, 0x45);
        let danger = c(0xdc, 0x35, 0x45);
        let muted = c(0x88, 0x88, 0x88);

        Self {
            header: Style::new().fg(accent).add_mod(Mod::BOLD),
            hint: Style::new().fg(muted),
            border: Style::new().fg(muted),
            border_highlight: Style::new().fg(accent).add_mod(Mod::BOLD),
            border_copying: Style::new().fg(success).add_mod(Mod::BOLD),
            card_copying: Style::new().bg(c(0x1e, 0x3a, 0x28)),
            icon: Style::new(),
            title: Style::new().add_mod(Mod::BOLD),
            text: Style::new(),
            loading: Style::new().fg(muted).add_mod(Mod::ITALIC),
            placeholder: Style::new().fg(danger),
            error_border: Style::new().fg(danger),
            error: Style::new().fg(danger).add_mod(Mod::BOLD),
            notification: Style::new()
                .fg(Color::Indexed(15))
                .bg(success)
                .add_mod(Mod::BOLD),
        }
    }
}

impl Default for BoardTheme {
    fn default() -> Self {
        Self::for_terminal(TerminalColorSupport::TrueColor)
    }
}

fn adapt(color: Color, support: TerminalColorSupport) -> Color {
    let Color::Rgb(r, g, b) = color else {
        return color;
    };
    match support {
        TerminalColorSupport::TrueColor => color,
        TerminalColorSupport::Ansi256 => Color::Indexed(rgb_to_xterm256(r, g, b)),
        TerminalColorSupport::Ansi16 => Color::Indexed(rgb_to_ansi16(r, g, b)),
    }
}

/// Nearest entry of the 6x6x6 colour cube.
fn rgb_to_xterm256(r: u8, g: u8, b: u8) -> u8 {
    let level = |v: u8| -> u8 {
        if v < 48 {
            0
        } else if v < 115 {
            1
        } else {
            (v - 35) / 40
        }
    };
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> u8 {
    let max = r.max(g).max(b);
    let bright = if max > 0xc0 { 8 } else { 0 };
    let bit = |v: u8| u8::from(max > 0 && v as u16 * 2 >= max as u16);
    let base = bit(r) | (bit(g) << 1) | (bit(b) << 2);
    if max < 0x40 {
        0
    } else {
        base + bright
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/board/theme.rs"]
mod tests;
