//! Layout switcher tabs and record counts.

use super::styles::Palette;
use crate::view_state::Toolbar;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the toolbar. The active layout is highlighted; the block title
/// carries record, selection, and column counts.
pub fn render_toolbar(frame: &mut Frame, area: Rect, toolbar: &Toolbar, palette: &Palette) {
    let titles: Vec<Line> = toolbar
        .layouts
        .iter()
        .map(|option| Line::from(option.label))
        .collect();
    let active = toolbar.layouts.iter().position(|option| option.active);

    let mut summary = vec![Span::raw(format!(" {} records", toolbar.record_count))];
    if toolbar.selected_count > 0 {
        summary.push(Span::styled(
            format!(" · {} selected", toolbar.selected_count),
            palette.selected,
        ));
    }
    if let Some(menu) = &toolbar.column_menu {
        summary.push(Span::styled(
            format!(" · columns {}/{}", menu.visible_count, menu.total_count),
            palette.muted,
        ));
    }
    summary.push(Span::raw(" "));

    let mut tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border)
                .title(Line::from(summary)),
        )
        .divider("|");
    if let Some(index) = active {
        tabs = tabs.highlight_style(palette.active_layout).select(index);
    }
    frame.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LayoutId;
    use crate::state::ViewModeToggle;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(toolbar: &Toolbar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|frame| render_toolbar(frame, frame.area(), toolbar, &Palette::default()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn toolbar_lists_layouts_in_canonical_order() {
        let toolbar = Toolbar {
            layouts: ViewModeToggle::new(&[LayoutId::Grid, LayoutId::Table])
                .entries(LayoutId::Grid),
            column_menu: None,
            record_count: 12,
            selected_count: 0,
        };
        let content = draw(&toolbar);
        let table = content.find("Table").expect("Table tab");
        let grid = content.find("Grid").expect("Grid tab");
        assert!(table < grid, "tabs out of order: {content}");
        assert!(content.contains("12 records"));
        assert!(!content.contains("selected"));
    }

    #[test]
    fn toolbar_shows_selection_count() {
        let toolbar = Toolbar {
            layouts: ViewModeToggle::new(&[LayoutId::Cards]).entries(LayoutId::Cards),
            column_menu: None,
            record_count: 5,
            selected_count: 3,
        };
        assert!(draw(&toolbar).contains("3 selected"));
    }
}
