//! Column visibility popup.

use super::body::checkbox;
use super::constants::COLUMN_MENU_WIDTH;
use super::styles::Palette;
use crate::view_state::ColumnMenuView;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// Draw the menu in the top-right corner of `area`, below the toolbar.
pub fn render_column_menu(
    frame: &mut Frame,
    area: Rect,
    menu: &ColumnMenuView,
    cursor: usize,
    palette: &Palette,
) {
    let rows: u16 = menu
        .entries
        .iter()
        .map(|e| if e.description.is_some() { 2 } else { 1 })
        .sum();
    let width = COLUMN_MENU_WIDTH.min(area.width);
    let height = rows.saturating_add(2).min(area.height);
    let popup = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    };

    let items: Vec<ListItem> = menu
        .entries
        .iter()
        .map(|entry| {
            let mut lines = vec![Line::from(vec![
                Span::raw(format!("{} ", checkbox(entry.visible))),
                Span::raw(entry.label.clone()),
            ])];
            if let Some(description) = &entry.description {
                lines.push(Line::from(Span::styled(
                    format!("    {description}"),
                    palette.muted,
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let toggle_hint = if menu.all_visible { "hide all" } else { "show all" };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border)
                .title(format!(
                    " Columns {}/{} ",
                    menu.visible_count, menu.total_count
                ))
                .title_bottom(Line::from(vec![
                    Span::styled(" a ", palette.key_hint),
                    Span::styled(format!("{toggle_hint} "), palette.muted),
                    Span::styled("r ", palette.key_hint),
                    Span::styled("reset ", palette.muted),
                ])),
        )
        .highlight_style(palette.cursor);

    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_widget(Clear, popup);
    frame.render_stateful_widget(list, popup, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColumnKey, LayoutId};
    use crate::view_state::ColumnMenuEntry;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn entry(key: &str, label: &str, visible: bool, description: Option<&str>) -> ColumnMenuEntry {
        ColumnMenuEntry {
            key: ColumnKey::new(key).unwrap(),
            label: label.to_string(),
            description: description.map(str::to_string),
            visible,
        }
    }

    #[test]
    fn menu_shows_checkboxes_and_counts() {
        let menu = ColumnMenuView {
            layout: LayoutId::Table,
            entries: vec![
                entry("name", "Name", true, Some("Display name")),
                entry("status", "Status", false, None),
            ],
            visible_count: 1,
            total_count: 2,
            all_visible: false,
        };
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| {
                render_column_menu(frame, frame.area(), &menu, 1, &Palette::default())
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Columns 1/2"));
        assert!(text.contains("[x] Name"));
        assert!(text.contains("Display name"));
        assert!(text.contains("[ ] Status"));
        assert!(text.contains("show all"));
    }
}
