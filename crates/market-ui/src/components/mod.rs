//! Reusable widgets shared by the storefront pages.

pub mod cart_drawer;
pub mod checkout_modal;
pub mod navbar;

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `width` display columns, ending with `…` when
/// anything was cut.
pub fn fit_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Pad `text` with trailing spaces to `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let fitted = fit_width(text, width);
    let used = UnicodeWidthStr::width(fitted.as_str());
    format!("{fitted}{}", " ".repeat(width.saturating_sub(used)))
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width_short_text_unchanged() {
        assert_eq!(fit_width("Smart Hub", 20), "Smart Hub");
    }

    #[test]
    fn test_fit_width_truncates_with_ellipsis() {
        let out = fit_width("Premium Wireless Headphones", 10);
        assert_eq!(out, "Premium W…");
        assert_eq!(UnicodeWidthStr::width(out.as_str()), 10);
    }

    #[test]
    fn test_fit_width_wide_chars() {
        // CJK characters occupy two columns each.
        let out = fit_width("日本語テキスト", 5);
        assert!(UnicodeWidthStr::width(out.as_str()) <= 5);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_fit_width_zero() {
        assert_eq!(fit_width("abc", 0), "");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abc…");
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(50, 20, area);
        assert_eq!(r, Rect::new(25, 10, 50, 20));

        let small = Rect::new(0, 0, 30, 10);
        let r = centered_rect(50, 20, small);
        assert_eq!((r.width, r.height), (30, 10));
    }
}
