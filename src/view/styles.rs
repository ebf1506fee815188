//! Screen styling.
//!
//! Mirrors the original look: red dot for the active page, light grey for the
//! rest, a filled search field. Monochrome mode keeps layout identical and
//! uses only modifiers.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether colors are enabled for this run.
///
/// Resolved once from config, `NO_COLOR` and `--no-color` (see
/// [`ResolvedConfig`](crate::config::ResolvedConfig)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// `enabled = false` renders without colors.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether colors are used.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== Palette =====

/// Styles for every screen element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Carousel block border.
    pub carousel_border: Style,
    /// Page title in the carousel border.
    pub carousel_title: Style,
    /// Image label inside the slide.
    pub image_label: Style,
    /// Previous/next arrows.
    pub arrow: Style,
    /// Dot of the active page.
    pub dot_active: Style,
    /// Dots of the other pages.
    pub dot_inactive: Style,
    /// Search field block.
    pub search_field: Style,
    /// "Search" placeholder text.
    pub placeholder: Style,
    /// Cell under the text cursor.
    pub cursor: Style,
    /// Image badge in front of each row.
    pub badge: Style,
    /// Entry text.
    pub entry: Style,
    /// "No entries match" line.
    pub empty_notice: Style,
    /// Status line.
    pub status: Style,
}

impl Palette {
    /// Palette for the given color setting.
    pub fn new(colors: ColorConfig) -> Self {
        if colors.colors_enabled() {
            Self {
                carousel_border: Style::default().fg(Color::Gray),
                carousel_title: Style::default().add_modifier(Modifier::BOLD),
                image_label: Style::default().fg(Color::Cyan),
                arrow: Style::default().fg(Color::Gray),
                dot_active: Style::default().fg(Color::Red),
                dot_inactive: Style::default().fg(Color::Gray),
                search_field: Style::default().bg(Color::DarkGray),
                placeholder: Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
                cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                badge: Style::default().fg(Color::Cyan),
                entry: Style::default(),
                empty_notice: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
                status: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                carousel_border: Style::default(),
                carousel_title: Style::default().add_modifier(Modifier::BOLD),
                image_label: Style::default(),
                arrow: Style::default(),
                dot_active: Style::default().add_modifier(Modifier::BOLD),
                dot_inactive: Style::default(),
                search_field: Style::default(),
                placeholder: Style::default().add_modifier(Modifier::DIM),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                badge: Style::default(),
                entry: Style::default(),
                empty_notice: Style::default().add_modifier(Modifier::ITALIC),
                status: Style::default().add_modifier(Modifier::DIM),
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}
