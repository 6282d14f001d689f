//! Small layout and text helpers shared by the UI layer.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Truncates `text` to at most `max` terminal cells, appending `…` when
/// anything was cut. Widths are measured in display cells, not chars.
pub fn truncate_to_width(text: &str, max: u16) -> String {
    let max = max as usize;
    if UnicodeWidthStr::width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Pads `text` on the right to exactly `width` cells, truncating if it is
/// too wide. Keeps slot columns aligned regardless of glyph width.
pub fn pad_to_width(text: &str, width: u16) -> String {
    let current = UnicodeWidthStr::width(text);
    let width = width as usize;
    if current > width {
        return truncate_to_width(text, width as u16);
    }
    let mut out = text.to_string();
    out.extend(std::iter::repeat_n(' ', width - current));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_to_width("Home", 10), "Home");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("Preferences", 6), "Prefe…");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn pad_fills_to_exact_width() {
        assert_eq!(pad_to_width("⌂", 3), "⌂  ");
        assert_eq!(pad_to_width("ABC", 2), "A…");
    }
}
