//! Formatting utilities used for console outputs.

use unicode_width::UnicodeWidthStr;

/// Left-align `s` in `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Right-align `s` in `width` terminal columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", " ".repeat(fill), s)
}

pub fn separator() -> String {
    "-".repeat(40)
}

/// Render a float the way reports show it: integral values keep one
/// decimal (`-1.0`), others are shown with up to six decimals.
pub fn format_float(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        let s = format!("{:.6}", v);
        s.trim_end_matches('0').to_string()
    }
}
