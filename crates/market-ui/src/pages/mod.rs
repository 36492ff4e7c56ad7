//! Storefront pages.
//!
//! Each page module owns its view-local state (selection, overlays, form
//! focus) and a `render` function. Session mutations are never made here;
//! [`crate::app::App`] applies them to the store.

pub mod blog;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod pricing;
pub mod services;
pub mod shop;

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::themes::Theme;

/// Top-level navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Shop,
    Gallery,
    Blog,
    Services,
    Pricing,
    Contact,
}

impl Page {
    /// Navbar order.
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Shop,
        Page::Gallery,
        Page::Blog,
        Page::Services,
        Page::Pricing,
        Page::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Shop => "Shop",
            Page::Gallery => "Gallery",
            Page::Blog => "Blog",
            Page::Services => "Services",
            Page::Pricing => "Pricing",
            Page::Contact => "Contact",
        }
    }

    /// Parse the `--page` CLI value. Unknown names fall back to `Home`.
    pub fn from_name(name: &str) -> Self {
        Page::ALL
            .into_iter()
            .find(|p| p.title().eq_ignore_ascii_case(name))
            .unwrap_or(Page::Home)
    }

    /// Page bound to a `1`–`7` hotkey.
    pub fn from_hotkey(ch: char) -> Option<Self> {
        let n = ch.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Page::ALL.get(i).copied())
    }

    pub fn hotkey(self) -> char {
        let idx = Page::ALL.iter().position(|p| *p == self).unwrap_or(0);
        char::from(b'1' + idx as u8)
    }
}

/// Move `index` by `delta` within `0..len`, wrapping at both ends.
pub(crate) fn step_index(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((index as isize + delta).rem_euclid(len)) as usize
}

/// Page heading followed by a dimmed subtitle and a blank line.
pub(crate) fn heading_lines<'a>(title: &'a str, subtitle: &'a str, theme: &Theme) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(title, theme.heading)),
        Line::from(Span::styled(subtitle, theme.dim)),
        Line::from(""),
    ]
}

/// Centred placeholder used for empty lists.
pub(crate) fn render_empty(frame: &mut Frame, area: Rect, title: &str, hint: &str, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(title.to_string(), theme.bold)),
        Line::from(Span::styled(hint.to_string(), theme.dim)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_name() {
        assert_eq!(Page::from_name("shop"), Page::Shop);
        assert_eq!(Page::from_name("CONTACT"), Page::Contact);
        assert_eq!(Page::from_name("checkout"), Page::Home);
    }

    #[test]
    fn test_page_hotkeys_roundtrip() {
        for page in Page::ALL {
            assert_eq!(Page::from_hotkey(page.hotkey()), Some(page));
        }
        assert_eq!(Page::from_hotkey('0'), None);
        assert_eq!(Page::from_hotkey('8'), None);
        assert_eq!(Page::from_hotkey('x'), None);
    }

    #[test]
    fn test_step_index_wraps() {
        assert_eq!(step_index(0, -1, 4), 3);
        assert_eq!(step_index(3, 1, 4), 0);
        assert_eq!(step_index(1, 2, 4), 3);
        assert_eq!(step_index(5, 1, 0), 0);
    }
}
