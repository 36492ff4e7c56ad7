use crate::pages::Page;
use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Brand mark shown at the left of the navbar.
pub const LOGO: &str = " L ";

/// Storefront navbar rendering two lines:
///
/// 1. Logo, brand name, theme indicator and the cart badge.
/// 2. Page tabs with their hotkeys, the active page highlighted.
pub struct Navbar<'a> {
    pub active: Page,
    /// Total quantity across cart lines.
    pub cart_count: u32,
    pub dark_mode: bool,
    pub theme: &'a Theme,
}

impl<'a> Navbar<'a> {
    pub fn new(active: Page, cart_count: u32, dark_mode: bool, theme: &'a Theme) -> Self {
        Self {
            active,
            cart_count,
            dark_mode,
            theme,
        }
    }

    /// The badge is hidden while the cart is empty.
    pub fn badge(&self) -> Option<String> {
        (self.cart_count > 0).then(|| format!(" {} ", self.cart_count))
    }

    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let mode = if self.dark_mode { "☀ t" } else { "☾ t" };

        let mut brand = vec![
            Span::styled(LOGO, self.theme.badge),
            Span::raw(" "),
            Span::styled("Luxe", self.theme.brand),
            Span::styled("Market", self.theme.brand_accent),
            Span::raw("    "),
            Span::styled(mode, self.theme.nav),
            Span::raw("   "),
            Span::styled("🛍 c", self.theme.nav),
        ];
        if let Some(badge) = self.badge() {
            brand.push(Span::raw(" "));
            brand.push(Span::styled(badge, self.theme.badge));
        }

        let mut tabs = Vec::with_capacity(Page::ALL.len() * 2);
        for page in Page::ALL {
            let style = if page == self.active {
                self.theme.nav_active
            } else {
                self.theme.nav
            };
            tabs.push(Span::styled(format!("{} {}", page.hotkey(), page.title()), style));
            tabs.push(Span::styled("   ", self.theme.separator));
        }
        tabs.pop();

        vec![Line::from(brand), Line::from(tabs)]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_navbar_line_count() {
        let theme = Theme::dark();
        assert_eq!(Navbar::new(Page::Home, 0, true, &theme).to_lines().len(), 2);
    }

    #[test]
    fn test_badge_hidden_when_empty() {
        let theme = Theme::dark();
        let nav = Navbar::new(Page::Shop, 0, true, &theme);
        assert!(nav.badge().is_none());
        assert!(!text(&nav.to_lines()[0]).ends_with(' '));
    }

    #[test]
    fn test_badge_shows_item_count() {
        let theme = Theme::light();
        let nav = Navbar::new(Page::Shop, 3, false, &theme);
        assert_eq!(nav.badge().as_deref(), Some(" 3 "));
        assert!(text(&nav.to_lines()[0]).contains(" 3 "));
    }

    #[test]
    fn test_tabs_list_every_page_in_order() {
        let theme = Theme::dark();
        let tabs = text(&Navbar::new(Page::Blog, 0, true, &theme).to_lines()[1]);
        let mut last = 0;
        for page in Page::ALL {
            let pos = tabs.find(page.title()).expect("page tab present");
            assert!(pos >= last);
            last = pos;
        }
        assert!(tabs.starts_with("1 Home"));
    }

    #[test]
    fn test_active_tab_highlighted() {
        let theme = Theme::dark();
        let lines = Navbar::new(Page::Pricing, 0, true, &theme).to_lines();
        let active = lines[1]
            .spans
            .iter()
            .find(|s| s.content.contains("Pricing"))
            .expect("pricing tab");
        assert_eq!(active.style, theme.nav_active);
    }
}
