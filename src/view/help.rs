//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/↓  k/↑", "Move cursor"),
            ("g/Home G/End", "First / last record"),
            ("Tab  Shift+Tab", "Next / previous layout"),
        ],
    ),
    (
        "Selection",
        &[
            ("Space", "Toggle record"),
            ("a", "Select all / clear all"),
            ("x", "Clear selection"),
        ],
    ),
    (
        "Columns",
        &[
            ("c", "Column menu"),
            ("Space", "Toggle column (in menu)"),
            ("a", "Show all / hide all (in menu)"),
            ("r", "Reset to defaults"),
        ],
    ),
    (
        "Bulk actions",
        &[
            ("1-3", "Run quick action"),
            ("m", "More actions"),
            ("y/Enter", "Confirm"),
            ("n/Esc", "Cancel"),
        ],
    ),
    (
        "Records",
        &[("Enter", "Open"), ("e", "Edit"), ("v", "View")],
    ),
    ("Application", &[("?", "Toggle help"), ("q", "Quit")]),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());
    frame.render_widget(Clear, popup_area);

    let help = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);
    frame.render_widget(help, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        palette.muted,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Rect centered in `area` using percentages of its width and height.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    centered_fixed(popup_width, popup_height, area)
}

/// Rect of the given size centered in `area`, clipped to it.
pub(super) fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (category, entries)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*category, palette.header)));
        for (keys, description) in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<16}"), palette.key_hint),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(70, 80, area);
        assert_eq!(rect, Rect::new(15, 5, 70, 40));
    }

    #[test]
    fn centered_fixed_clips_to_small_area() {
        let rect = centered_fixed(40, 10, Rect::new(2, 2, 20, 5));
        assert_eq!(rect, Rect::new(2, 2, 20, 5));
    }

    #[test]
    fn help_overlay_lists_categories() {
        let backend = TestBackend::new(100, 50);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_help_overlay(frame, &Palette::default()))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        for heading in ["Keyboard Shortcuts", "Selection", "Bulk actions", "Quit"] {
            assert!(content.contains(heading), "missing {heading:?}");
        }
    }
}
