//! Design tokens for the terminal renderer.
//!
//! Colours mirror the web palette (`#10b981` safe, `#f59e0b` warning,
//! `#ef4444` toxic) as 24-bit ANSI; terminals without true-colour support
//! approximate them.

use colored::{Color, ColoredString, Colorize};

pub mod palette {
    use colored::Color;

    pub const SAFE: Color = Color::TrueColor { r: 16, g: 185, b: 129 };
    pub const WARNING: Color = Color::TrueColor { r: 245, g: 158, b: 11 };
    pub const HIGH: Color = Color::TrueColor { r: 249, g: 115, b: 22 };
    pub const TOXIC: Color = Color::TrueColor { r: 239, g: 68, b: 68 };
    pub const PRIMARY: Color = Color::TrueColor { r: 59, g: 130, b: 246 };
    pub const SECONDARY: Color = Color::TrueColor { r: 139, g: 92, b: 246 };
    pub const INFO: Color = Color::TrueColor { r: 14, g: 165, b: 233 };
    pub const ACCENT: Color = Color::TrueColor { r: 236, g: 72, b: 153 };
    pub const NEUTRAL: Color = Color::TrueColor { r: 107, g: 114, b: 128 };
    pub const TRACK: Color = Color::TrueColor { r: 209, g: 213, b: 219 };
}

pub mod spacing {
    pub const INDENT: &str = "  ";
    pub const RULE_WIDTH: usize = 48;
}

pub mod size {
    pub const GAUGE_WIDTH: usize = 30;
    pub const MINI_GAUGE_WIDTH: usize = 10;
    pub const CHART_WIDTH: usize = 36;
    pub const SEVERITY_BAR_WIDTH: usize = 20;
    pub const TECHNIQUE_MAX: usize = 25;
}

pub mod glyph {
    pub const FILLED: char = '█';
    pub const EMPTY: char = '░';
    pub const RULE: char = '─';
}

pub fn heading(text: &str) -> ColoredString {
    text.bold()
}

pub fn muted(text: &str) -> ColoredString {
    text.color(palette::NEUTRAL)
}

pub fn rule() -> ColoredString {
    muted(&glyph::RULE.to_string().repeat(spacing::RULE_WIDTH))
}

/// A bar of `width` cells with `filled` of them in `color`.
pub fn bar(filled: usize, width: usize, color: Color) -> String {
    let filled = filled.min(width);
    format!(
        "{}{}",
        glyph::FILLED.to_string().repeat(filled).color(color),
        glyph::EMPTY.to_string().repeat(width - filled).color(palette::TRACK)
    )
}

/// Number of cells a `percentage` (0-100) fills in a bar of `width`.
pub fn cells_for(percentage: f64, width: usize) -> usize {
    let ratio = (percentage / 100.0).clamp(0.0, 1.0);
    ((ratio * width as f64).round() as usize).min(width)
}
