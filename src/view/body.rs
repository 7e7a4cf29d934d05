//! Body widgets, one per layout.
//!
//! Draws whatever the render output says. The cursor is the only front-end
//! state consulted here.

use super::constants::{GRID_TILE_HEIGHT, GRID_TILE_WIDTH};
use super::styles::Palette;
use crate::state::HeaderCheckbox;
use crate::view_state::{Body, ItemContent, ItemView, TableBody};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState},
    Frame,
};

/// Draw the body for the active layout, highlighting the record at `cursor`.
pub fn render_body(frame: &mut Frame, area: Rect, body: &Body, cursor: usize, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border);

    match body {
        Body::Loading => render_message(frame, area, block, "Loading…", palette),
        Body::NoData { message } => render_message(frame, area, block, message, palette),
        Body::Table(table) => render_table(frame, area, block, table, cursor, palette),
        Body::Cards(items) => render_items(frame, area, block, items, cursor, palette, card_lines),
        Body::List(items) => render_items(frame, area, block, items, cursor, palette, list_lines),
        Body::Classic(items) => {
            render_items(frame, area, block, items, cursor, palette, card_lines)
        }
        Body::Grid(items) => render_grid(frame, area, block, items, cursor, palette),
    }
}

fn render_message(frame: &mut Frame, area: Rect, block: Block, message: &str, palette: &Palette) {
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let middle = Rect {
        y: inner.y + inner.height / 2,
        height: inner.height.min(1),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(Span::styled(message.to_string(), palette.muted))
            .alignment(Alignment::Center),
        middle,
    );
}

/// Row checkbox glyph.
pub fn checkbox(selected: bool) -> &'static str {
    if selected {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Select-all checkbox glyph.
pub fn header_checkbox(state: HeaderCheckbox) -> &'static str {
    match state {
        HeaderCheckbox::Checked => "[x]",
        HeaderCheckbox::Indeterminate => "[-]",
        HeaderCheckbox::Unchecked => "[ ]",
    }
}

fn mark(selected: Option<bool>) -> String {
    selected
        .map(|s| format!("{} ", checkbox(s)))
        .unwrap_or_default()
}

// ===== Table =====

fn render_table(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    table: &TableBody,
    cursor: usize,
    palette: &Palette,
) {
    if table.headers.is_empty() && table.select_header.is_none() {
        render_message(
            frame,
            area,
            block,
            "All columns are hidden. Press c to choose columns.",
            palette,
        );
        return;
    }

    let mut header: Vec<Cell> = Vec::with_capacity(table.headers.len() + 1);
    let mut widths: Vec<Constraint> = Vec::with_capacity(table.headers.len() + 1);
    if let Some(state) = table.select_header {
        header.push(Cell::from(header_checkbox(state)));
        widths.push(Constraint::Length(3));
    }
    for cell in &table.headers {
        let label = if cell.sortable {
            format!("{} ↕", cell.label)
        } else {
            cell.label.clone()
        };
        header.push(Cell::from(label));
        widths.push(Constraint::Fill(1));
    }

    let rows = table.rows.iter().map(|row| {
        let mut cells: Vec<Cell> = Vec::with_capacity(row.cells.len() + 1);
        if let Some(selected) = row.selected {
            cells.push(Cell::from(checkbox(selected)));
        }
        cells.extend(row.cells.iter().map(|c| Cell::from(c.as_str())));
        let style = if row.selected == Some(true) {
            palette.selected
        } else {
            ratatui::style::Style::default()
        };
        Row::new(cells).style(style)
    });

    let widget = Table::new(rows, widths)
        .header(Row::new(header).style(palette.header))
        .block(block)
        .column_spacing(2)
        .row_highlight_style(palette.cursor);
    let mut state = TableState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(widget, area, &mut state);
}

// ===== Item layouts =====

type LineBuilder = fn(&ItemView, &Palette) -> Vec<Line<'static>>;

fn card_lines(item: &ItemView, palette: &Palette) -> Vec<Line<'static>> {
    let prefix = mark(item.selected);
    let mut lines = match &item.content {
        ItemContent::Fields { title, fields } => {
            let mut lines = vec![Line::from(vec![
                Span::raw(prefix),
                Span::styled(title.clone(), palette.title),
            ])];
            lines.extend(fields.iter().map(|field| {
                Line::from(vec![
                    Span::styled(format!("    {}: ", field.label), palette.label),
                    Span::raw(field.value.clone()),
                ])
            }));
            lines
        }
        ItemContent::Custom(custom) => custom
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let lead = if index == 0 { prefix.clone() } else { "    ".to_string() };
                Line::from(format!("{lead}{text}"))
            })
            .collect(),
    };
    lines.push(Line::from(""));
    lines
}

fn list_lines(item: &ItemView, palette: &Palette) -> Vec<Line<'static>> {
    let mut spans = vec![Span::raw(mark(item.selected))];
    match &item.content {
        ItemContent::Fields { title, fields } => {
            spans.push(Span::styled(title.clone(), palette.title));
            for field in fields {
                spans.push(Span::styled(format!("  {}: ", field.label), palette.label));
                spans.push(Span::raw(field.value.clone()));
            }
        }
        ItemContent::Custom(custom) => spans.push(Span::raw(custom.join("  "))),
    }
    vec![Line::from(spans)]
}

fn render_items(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    items: &[ItemView],
    cursor: usize,
    palette: &Palette,
    build: LineBuilder,
) {
    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let style = if item.selected == Some(true) {
                palette.selected
            } else {
                ratatui::style::Style::default()
            };
            ListItem::new(build(item, palette)).style(style)
        })
        .collect();
    let list = List::new(list_items)
        .block(block)
        .highlight_style(palette.cursor);
    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

// ===== Grid =====

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    items: &[ItemView],
    cursor: usize,
    palette: &Palette,
) {
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let columns = (inner.width / GRID_TILE_WIDTH).max(1) as usize;
    let tile_width = inner.width / columns as u16;
    let visible_rows = (inner.height / GRID_TILE_HEIGHT).max(1) as usize;
    let cursor_row = cursor / columns;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);

    for (index, item) in items.iter().enumerate().skip(first_row * columns) {
        let row = index / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let column = index % columns;
        let tile = Rect {
            x: inner.x + column as u16 * tile_width,
            y: inner.y + row as u16 * GRID_TILE_HEIGHT,
            width: tile_width,
            height: GRID_TILE_HEIGHT.min(inner.height - row as u16 * GRID_TILE_HEIGHT),
        };
        render_tile(frame, tile, item, index == cursor, palette);
    }
}

fn render_tile(frame: &mut Frame, area: Rect, item: &ItemView, focused: bool, palette: &Palette) {
    let (title, body): (String, Vec<Line>) = match &item.content {
        ItemContent::Fields { title, fields } => (
            title.clone(),
            fields
                .iter()
                .map(|f| {
                    Line::from(vec![
                        Span::styled(format!("{}: ", f.label), palette.label),
                        Span::raw(f.value.clone()),
                    ])
                })
                .collect(),
        ),
        ItemContent::Custom(custom) => (
            custom.first().cloned().unwrap_or_default(),
            custom.iter().skip(1).map(|l| Line::from(l.clone())).collect(),
        ),
    };

    let border = if focused {
        palette.cursor
    } else if item.selected == Some(true) {
        palette.selected
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Line::from(vec![
            Span::raw(mark(item.selected)),
            Span::styled(title, palette.title),
        ]));
    frame.render_widget(Paragraph::new(body).block(block), area);
}
