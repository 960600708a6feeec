//! Terminal output utilities.
//!
//! Box drawing, meter bar, ANSI helpers.

use std::io;

use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Whether stdout is a terminal that will render escape codes.
pub fn stdout_is_tty() -> bool {
    io::stdout().is_tty()
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    println!("{}", box_top_line(title));
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    println!("{}", box_content_line(content));
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

fn box_top_line(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

fn box_content_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        format!("│ {}{} │", content, " ".repeat(padding))
    } else {
        format!("│ {} │", content)
    }
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Meter
// ============================================================================

/// Cells of a meter `width` wide that are filled at `percent`.
pub fn meter_fill(percent: u8, width: usize) -> usize {
    if percent >= 100 {
        width
    } else {
        width * percent as usize / 100
    }
}

/// Render a meter as one line of block characters, coloured when `color` is set.
pub fn meter_line(percent: u8, width: usize, color: bool) -> String {
    let filled = meter_fill(percent, width);
    let bar = "█".repeat(filled);
    let rest = "░".repeat(width - filled);

    if !color {
        return format!("{bar}{rest}");
    }

    let tint = match percent {
        0..=25 => Color::Red,
        26..=45 => Color::Yellow,
        46..=70 => Color::Green,
        _ => Color::Cyan,
    };
    format!("{}{}", bar.with(tint), rest.dark_grey())
}

/// Print a meter inside a box line.
pub fn box_meter(percent: u8) {
    let width = BOX_WIDTH - 4 - 5;
    let line = meter_line(percent, width, stdout_is_tty());
    box_line(&format!("{line} {percent:>3}%"));
}
