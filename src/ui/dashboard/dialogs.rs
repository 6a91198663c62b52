//! Create/edit dialog and delete confirmation.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::DialogInput;
use crate::resource::{DraftView, TableView};
use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::helpers::truncate_to_width;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

const LABEL_WIDTH: usize = 18;

/// One row per writable field; the focused one shows a cursor.
///
/// `input` holds what has been typed locally; without it the draft's own
/// values are shown.
pub fn render_edit_dialog(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    draft: &DraftView,
    input: Option<&DialogInput>,
) {
    let field_count = draft.fields.len() as u16;
    let error_rows = if draft.error.is_some() { 2 } else { 0 };
    let config = DialogFrameConfig::new(&draft.title, field_count + error_rows + 2)
        .min_width(44)
        .max_width(80);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let focused = input.map_or(0, |input| input.field);
    let value_width = (inner.width as usize).saturating_sub(LABEL_WIDTH + 4);

    let mut lines: Vec<Line> = draft
        .fields
        .iter()
        .enumerate()
        .map(|(i, (name, value))| {
            let text = input
                .and_then(|input| input.values.get(i))
                .map(String::as_str)
                .unwrap_or(value.as_str());
            let is_focused = i == focused;
            let marker = if is_focused { "▶ " } else { "  " };
            let mut shown = truncate_to_width(text, value_width.saturating_sub(1));
            if is_focused {
                shown.push('\u{2588}');
            }
            let value_style = if is_focused {
                Style::default().fg(Color::White).bg(COLOR_INPUT_BG)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("{:<width$}", name, width = LABEL_WIDTH),
                    Style::default().fg(COLOR_DIM),
                ),
                Span::styled(shown, value_style),
            ])
        })
        .collect();

    if let Some(error) = &draft.error {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("\u{2717} {}", error),
            Style::default().fg(COLOR_ERROR),
        ));
    }
    lines.push(Line::default());
    lines.push(Line::styled(
        "↑↓ field  Enter save  Esc cancel",
        Style::default().fg(COLOR_DIM),
    ));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// `Delete <title> #id? [y/n]`.
pub fn render_delete_confirm(frame: &mut Frame, area: Rect, ctx: &LayoutContext, view: &TableView, id: i64) {
    let config = DialogFrameConfig::new("Confirm delete", 3).max_width(50);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let lines = vec![
        Line::from(vec![
            Span::raw("Delete "),
            Span::styled(
                format!("{} #{}", view.title.to_lowercase(), id),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("?"),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("y", Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD)),
            Span::styled(" delete   ", Style::default().fg(COLOR_DIM)),
            Span::styled("n", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" keep", Style::default().fg(COLOR_DIM)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
