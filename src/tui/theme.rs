//! TUI theming and colors.

use ratatui::style::{Color, Modifier, Style};

/// Pastel palette for the cosmetic selection accent. One entry is picked
/// pseudo-randomly each time the selection moves; it carries no meaning.
pub const PASTEL_PALETTE: [Color; 30] = [
    Color::Rgb(255, 209, 220),
    Color::Rgb(255, 236, 179),
    Color::Rgb(193, 225, 193),
    Color::Rgb(179, 229, 252),
    Color::Rgb(209, 196, 233),
    Color::Rgb(248, 187, 208),
    Color::Rgb(225, 245, 254),
    Color::Rgb(241, 248, 233),
    Color::Rgb(255, 249, 196),
    Color::Rgb(255, 224, 178),
    Color::Rgb(224, 242, 241),
    Color::Rgb(243, 229, 245),
    Color::Rgb(232, 234, 246),
    Color::Rgb(251, 233, 231),
    Color::Rgb(239, 235, 233),
    Color::Rgb(220, 237, 200),
    Color::Rgb(255, 249, 196),
    Color::Rgb(178, 235, 242),
    Color::Rgb(209, 196, 233),
    Color::Rgb(244, 143, 177),
    Color::Rgb(206, 147, 216),
    Color::Rgb(144, 202, 249),
    Color::Rgb(165, 214, 167),
    Color::Rgb(255, 245, 157),
    Color::Rgb(255, 224, 130),
    Color::Rgb(188, 170, 164),
    Color::Rgb(176, 190, 197),
    Color::Rgb(255, 204, 188),
    Color::Rgb(197, 202, 233),
    Color::Rgb(200, 230, 201),
];

/// Pick a pastel accent without dragging in an RNG dependency. The subsecond
/// clock is plenty of entropy for a cosmetic highlight.
#[must_use]
pub fn random_pastel() -> Color {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    PASTEL_PALETTE[nanos as usize % PASTEL_PALETTE.len()]
}

/// Application theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Name of the theme.
    pub name: String,
    /// Foreground color.
    pub foreground: Color,
    /// Border color.
    pub border: Color,
    /// Border color for the focused search box.
    pub border_focused: Color,
    /// Section titles (Favorites, Recent, Results).
    pub section_title: Color,
    /// Glyph color within a grid item.
    pub glyph: Color,
    /// Symbol name color within a grid item.
    pub symbol_name: Color,
    /// Favorite marker color.
    pub favorite: Color,
    /// Toast text color.
    pub toast: Color,
    /// Dimmed/hint text.
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create the default dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            section_title: Color::Cyan,
            glyph: Color::White,
            symbol_name: Color::Gray,
            favorite: Color::Yellow,
            toast: Color::Green,
            dim: Color::DarkGray,
        }
    }

    /// Create a light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            foreground: Color::Black,
            border: Color::Gray,
            border_focused: Color::Blue,
            section_title: Color::Blue,
            glyph: Color::Black,
            symbol_name: Color::DarkGray,
            favorite: Color::Magenta,
            toast: Color::Green,
            dim: Color::Gray,
        }
    }

    /// Create a high contrast theme.
    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            foreground: Color::White,
            border: Color::White,
            border_focused: Color::Yellow,
            section_title: Color::Yellow,
            glyph: Color::White,
            symbol_name: Color::White,
            favorite: Color::Yellow,
            toast: Color::Green,
            dim: Color::Gray,
        }
    }

    /// Get theme by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high-contrast" | "highcontrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    /// Style for unfocused borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the focused search input border.
    #[must_use]
    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Style for section titles.
    #[must_use]
    pub fn section_title_style(&self) -> Style {
        Style::default()
            .fg(self.section_title)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected grid item, with the given pastel accent.
    #[must_use]
    pub fn selection_style(&self, accent: Color) -> Style {
        Style::default()
            .bg(accent)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for an ordinary grid cell.
    #[must_use]
    pub fn symbol_name_style(&self) -> Style {
        Style::default().fg(self.symbol_name)
    }

    /// Style for the favorite marker.
    #[must_use]
    pub fn favorite_style(&self) -> Style {
        Style::default().fg(self.favorite)
    }

    /// Style for the toast while solid.
    #[must_use]
    pub fn toast_style(&self) -> Style {
        Style::default()
            .fg(self.toast)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the toast while fading out.
    #[must_use]
    pub fn toast_fading_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Style for hint text.
    #[must_use]
    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }
}

/// Available themes list.
#[must_use]
pub fn available_themes() -> Vec<&'static str> {
    vec!["dark", "light", "high-contrast"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("dark").unwrap().name, "dark");
        assert_eq!(Theme::from_name("LIGHT").unwrap().name, "light");
        assert_eq!(
            Theme::from_name("high-contrast").unwrap().name,
            "high-contrast"
        );
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn test_random_pastel_is_from_palette() {
        for _ in 0..10 {
            let color = random_pastel();
            assert!(PASTEL_PALETTE.contains(&color));
        }
    }
}
