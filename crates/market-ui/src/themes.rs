use ratatui::style::{Color, Modifier, Style};

/// Complete palette carrying every style used by market-ui pages and
/// components.
///
/// The palette is derived from the session's dark-mode flag on every frame;
/// it holds no state of its own.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Navbar ───────────────────────────────────────────────────────────────
    pub brand: Style,
    pub brand_accent: Style,
    pub nav: Style,
    pub nav_active: Style,
    pub badge: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,
    pub heading: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,

    // ── Catalog ──────────────────────────────────────────────────────────────
    pub price: Style,
    pub rating: Style,
    pub category: Style,
    pub recommended: Style,

    // ── Containers ───────────────────────────────────────────────────────────
    pub border: Style,
    pub border_focus: Style,
    /// Highlighted list row.
    pub selected: Style,
    pub input: Style,
    pub placeholder: Style,
    pub button: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background palette.
    pub fn dark() -> Self {
        Self {
            brand: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            brand_accent: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            nav: Style::default().fg(Color::Gray),
            nav_active: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            badge: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            price: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            rating: Style::default().fg(Color::Yellow),
            category: Style::default().fg(Color::Cyan),
            recommended: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            border: Style::default().fg(Color::DarkGray),
            border_focus: Style::default().fg(Color::Yellow),
            selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD),
            input: Style::default().fg(Color::White),
            placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            button: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Light-background palette.
    ///
    /// Dark text with saturated accents so content stays legible on a
    /// white or light-grey canvas.
    pub fn light() -> Self {
        Self {
            brand: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            brand_accent: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            nav: Style::default().fg(Color::DarkGray),
            nav_active: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            badge: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Blue),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Magenta),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            price: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            rating: Style::default().fg(Color::Magenta),
            category: Style::default().fg(Color::Blue),
            recommended: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            border: Style::default().fg(Color::Gray),
            border_focus: Style::default().fg(Color::Blue),
            selected: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            input: Style::default().fg(Color::Black),
            placeholder: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            button: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Palette for the session's current theme flag.
    pub fn for_session(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Border style for a container that may hold keyboard focus.
    pub fn border_for(&self, focused: bool) -> Style {
        if focused {
            self.border_focus
        } else {
            self.border
        }
    }

    /// Row style for a list entry.
    pub fn row(&self, selected: bool) -> Style {
        if selected {
            self.selected
        } else {
            self.text
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_creation() {
        let t = Theme::dark();
        assert_eq!(t.text.fg, Some(Color::White));
        assert_eq!(t.price.fg, Some(Color::Yellow));
        assert_eq!(t.success.fg, Some(Color::Green));
        assert_eq!(t.error.fg, Some(Color::Red));
        assert!(t.error.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_light_theme_creation() {
        let t = Theme::light();
        assert_eq!(t.text.fg, Some(Color::Black));
        assert_eq!(t.heading.fg, Some(Color::Blue));
        assert_eq!(t.badge.bg, Some(Color::Blue));
    }

    #[test]
    fn test_for_session_follows_flag() {
        assert_eq!(Theme::for_session(true).text.fg, Some(Color::White));
        assert_eq!(Theme::for_session(false).text.fg, Some(Color::Black));
    }

    #[test]
    fn test_border_for_focus() {
        let t = Theme::dark();
        assert_eq!(t.border_for(true).fg, Some(Color::Yellow));
        assert_eq!(t.border_for(false).fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_row_selection() {
        let t = Theme::light();
        assert_eq!(t.row(true).bg, Some(Color::Blue));
        assert_eq!(t.row(false).bg, None);
    }
}
