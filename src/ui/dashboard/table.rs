//! The resource table.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::resource::TableView;
use crate::ui::helpers::truncate_to_width;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG};

/// Column widths: each column's minimum, the last one takes the rest.
pub fn column_constraints(view: &TableView) -> Vec<Constraint> {
    let last = view.columns.len().saturating_sub(1);
    view.columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            if i == last {
                Constraint::Min(column.width)
            } else {
                Constraint::Length(column.width)
            }
        })
        .collect()
}

pub fn render_table(frame: &mut Frame, area: Rect, view: &TableView, selected: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" {} ", view.title));

    if view.rows.is_empty() {
        let message = if view.loading {
            "Loading…"
        } else if view.filters.is_empty() {
            "No records."
        } else {
            "No records match the filters."
        };
        frame.render_widget(
            Paragraph::new(Line::styled(message, Style::default().fg(COLOR_DIM))).block(block),
            area,
        );
        return;
    }

    let header = Row::new(view.columns.iter().map(|column| {
        Cell::from(column.header).style(
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let rows = view.rows.iter().map(|cells| {
        Row::new(
            cells
                .iter()
                .zip(view.columns)
                .map(|(text, column)| {
                    // Long text is cut to at most twice the column minimum.
                    Cell::from(truncate_to_width(text, column.width as usize * 2))
                }),
        )
    });

    let table = Table::new(rows, column_constraints(view))
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(
            Style::default()
                .bg(COLOR_SELECTED_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(selected.min(view.rows.len() - 1)));
    frame.render_stateful_widget(table, area, &mut state);
}
