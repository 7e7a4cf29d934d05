//! Bulk action bar, its overflow menu, and the confirmation dialog.

use super::body::header_checkbox;
use super::constants::{CONFIRM_POPUP_HEIGHT, CONFIRM_POPUP_WIDTH_PERCENT};
use super::help::centered_fixed;
use super::styles::Palette;
use crate::view_state::{ActionButton, BulkBarView, ConfirmationView};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

fn button_style(button: &ActionButton, palette: &Palette) -> ratatui::style::Style {
    if button.destructive {
        palette.destructive
    } else {
        palette.action
    }
}

/// Draw the selection summary and quick action buttons.
pub fn render_bulk_bar(frame: &mut Frame, area: Rect, bar: &BulkBarView, palette: &Palette) {
    let mut spans = vec![
        Span::raw(format!(" {} ", header_checkbox(bar.header))),
        Span::raw(" "),
    ];
    for (index, button) in bar.quick.iter().enumerate() {
        spans.push(Span::styled(format!("[{}]", index + 1), palette.key_hint));
        spans.push(Span::styled(
            format!(" {}  ", button.label),
            button_style(button, palette),
        ));
    }
    if !bar.overflow.is_empty() {
        spans.push(Span::styled("[m]", palette.key_hint));
        spans.push(Span::styled(
            format!(" More ({})", bar.overflow.len()),
            palette.action,
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.selected)
        .title(format!(
            " {} of {} selected ",
            bar.selected_count, bar.total_count
        ));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Popup listing the overflow actions, anchored above the bar's right edge.
pub fn render_overflow_menu(
    frame: &mut Frame,
    bar_area: Rect,
    bar: &BulkBarView,
    cursor: usize,
    palette: &Palette,
) {
    if bar.overflow.is_empty() {
        return;
    }
    let width = bar
        .overflow
        .iter()
        .map(|b| unicode_width::UnicodeWidthStr::width(b.label.as_str()) as u16)
        .max()
        .unwrap_or(0)
        .saturating_add(6)
        .max(16)
        .min(bar_area.width);
    let height = (bar.overflow.len() as u16 + 2).min(bar_area.y);
    if height < 3 {
        return;
    }
    let area = Rect {
        x: bar_area.x + bar_area.width - width,
        y: bar_area.y - height,
        width,
        height,
    };

    let items: Vec<ListItem> = bar
        .overflow
        .iter()
        .map(|button| {
            ListItem::new(Line::from(Span::styled(
                format!(" {}", button.label),
                button_style(button, palette),
            )))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border)
                .title(" More "),
        )
        .highlight_style(palette.cursor);
    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the confirmation dialog centered over the screen.
pub fn render_confirmation(frame: &mut Frame, dialog: &ConfirmationView, palette: &Palette) {
    let screen = frame.area();
    let area = centered_fixed(
        screen.width * CONFIRM_POPUP_WIDTH_PERCENT / 100,
        CONFIRM_POPUP_HEIGHT,
        screen,
    );
    let accent = if dialog.destructive {
        palette.destructive
    } else {
        palette.action
    };

    let lines = vec![
        Line::from(dialog.message.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] ", palette.key_hint),
            Span::styled(dialog.confirm_label.clone(), accent),
            Span::raw("    "),
            Span::styled("[n] ", palette.key_hint),
            Span::raw(dialog.cancel_label.clone()),
        ]),
    ];
    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(accent)
                .title(format!(" {} ", dialog.title)),
        )
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
