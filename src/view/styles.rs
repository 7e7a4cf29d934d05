//! Colors and text styles for the terminal front end.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether styles carry colors.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles for every element the front end draws.
///
/// Without colors each style keeps only its modifiers, so emphasis
/// survives on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Panel borders.
    pub border: Style,
    /// Current entry of the layout switcher.
    pub active_layout: Style,
    /// Table headers.
    pub header: Style,
    /// Item titles.
    pub title: Style,
    /// Field labels.
    pub label: Style,
    /// Secondary text.
    pub muted: Style,
    /// Highlighted row or entry.
    pub cursor: Style,
    /// Selected records.
    pub selected: Style,
    /// Bulk action buttons.
    pub action: Style,
    /// Destructive action buttons.
    pub destructive: Style,
    /// Key names in hints.
    pub key_hint: Style,
}

impl Palette {
    /// Palette honoring `config`.
    pub fn new(config: ColorConfig) -> Self {
        let colored = config.colors_enabled();
        let fg = |color: Color| {
            if colored {
                Style::default().fg(color)
            } else {
                Style::default()
            }
        };

        Self {
            border: fg(Color::Cyan),
            active_layout: fg(Color::Yellow).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            header: fg(Color::Cyan).add_modifier(Modifier::BOLD),
            title: fg(Color::White).add_modifier(Modifier::BOLD),
            label: fg(Color::DarkGray),
            muted: fg(Color::DarkGray).add_modifier(Modifier::DIM),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            selected: fg(Color::Green),
            action: fg(Color::Cyan).add_modifier(Modifier::BOLD),
            destructive: fg(Color::Red).add_modifier(Modifier::BOLD),
            key_hint: fg(Color::Yellow).add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::with_colors(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_flag_disables_colors() {
        assert!(!ColorConfig::from_env_and_args(true).colors_enabled());
    }

    #[test]
    fn monochrome_palette_keeps_modifiers_only() {
        let palette = Palette::new(ColorConfig::with_colors(false));
        assert_eq!(palette.destructive.fg, None);
        assert!(palette.destructive.add_modifier.contains(Modifier::BOLD));
        assert!(palette.cursor.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn colored_palette_marks_destructive_red() {
        assert_eq!(Palette::default().destructive.fg, Some(Color::Red));
    }
}
