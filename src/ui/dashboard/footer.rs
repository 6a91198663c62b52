//! Filter bar, pagination footer and status line.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::InputMode;
use crate::resource::{Phase, TableView};
use crate::ui::helpers::spinner;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_LOADING, COLOR_SUCCESS};

/// One line above the table: the active filters, or the prompt being typed.
pub fn render_filter_bar(frame: &mut Frame, area: Rect, view: &TableView, mode: &InputMode) {
    let line = match mode {
        InputMode::Filter(buffer) => Line::from(vec![
            Span::styled(" / ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(buffer.clone()),
            Span::raw("\u{2588}"),
            Span::styled(
                if view.filter_fields.is_empty() {
                    "   field=value …".to_string()
                } else {
                    format!("   fields: {}", view.filter_fields.join(", "))
                },
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        InputMode::GotoPage(buffer) => Line::from(vec![
            Span::styled(" Go to page: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(buffer.clone()),
            Span::raw("\u{2588}"),
            Span::styled(format!("  (1-{})", view.pages.max(1)), Style::default().fg(COLOR_DIM)),
        ]),
        InputMode::Normal if view.filters.is_empty() => {
            Line::styled(" No filters  (/ to filter)", Style::default().fg(COLOR_DIM))
        }
        InputMode::Normal => Line::from(vec![
            Span::styled(" Filters: ", Style::default().fg(COLOR_DIM)),
            Span::raw(view.filters.to_input()),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// `page / pages · total` on the left, key hints on the right.
pub fn render_footer(frame: &mut Frame, area: Rect, view: &TableView, ctx: &LayoutContext) {
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Page ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                view.pagination_label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ])),
        area,
    );

    let hints = if ctx.is_compact() {
        "←→ page  / filter  q quit "
    } else if view.editable {
        "←→ page  s size  n new  e edit  d delete  / filter  : go to  r reload  ^L logout  q quit "
    } else {
        "←→ page  s size  / filter  : go to  r reload  ^L logout  q quit "
    };
    frame.render_widget(
        Paragraph::new(Line::styled(hints, Style::default().fg(COLOR_DIM))).alignment(Alignment::Right),
        area,
    );
}

/// Spinner while loading, otherwise the latest error or notice.
pub fn render_status_line(
    frame: &mut Frame,
    area: Rect,
    view: &TableView,
    notice: Option<&str>,
    tick: u64,
) {
    let line = if view.loading {
        Line::from(vec![
            Span::styled(format!(" {} ", spinner(tick)), Style::default().fg(COLOR_LOADING)),
            Span::raw(format!("Loading {}…", view.title.to_lowercase())),
        ])
    } else if let Some(error) = &view.error {
        Line::from(vec![
            Span::styled(" \u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(error.clone(), Style::default().fg(COLOR_ERROR)),
        ])
    } else if let Some(notice) = notice {
        Line::from(Span::raw(format!(" {}", notice)))
    } else if view.phase == Phase::Idle && view.pages > 0 {
        Line::from(vec![
            Span::styled(" \u{2713} ", Style::default().fg(COLOR_SUCCESS)),
            Span::styled(
                format!("{} rows · {} per page", view.rows.len(), view.page_size),
                Style::default().fg(COLOR_DIM),
            ),
        ])
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}
