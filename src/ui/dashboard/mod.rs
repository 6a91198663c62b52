//! The dashboard: tabs, filter bar, table, footer and overlays.

mod dialogs;
mod footer;
mod table;

pub use dialogs::{render_delete_confirm, render_edit_dialog};
pub use footer::{render_filter_bar, render_footer, render_status_line};
pub use table::{column_constraints, render_table};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{DialogInput, InputMode};
use crate::models::ResourceKind;
use crate::resource::TableView;
use crate::ui::components::{render_tab_selector, TabItem};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_DIM, COLOR_HEADER};

/// Everything the dashboard draws, borrowed from the app.
#[derive(Debug, Clone)]
pub struct DashboardProps<'a> {
    pub view: &'a TableView,
    pub active: ResourceKind,
    pub selected: usize,
    pub input_mode: &'a InputMode,
    pub dialog: Option<&'a DialogInput>,
    pub notice: Option<&'a str>,
    pub login: &'a str,
    pub language: &'a str,
    pub tick: u64,
}

fn short_label(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Subscriptions => "Subs",
        ResourceKind::PayHistory => "Pay",
        ResourceKind::Contacts => "Contact",
        ResourceKind::Settings => "Config",
        other => other.title(),
    }
}

pub fn render_dashboard(frame: &mut Frame, props: &DashboardProps) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    let [header, tabs, filters, body, footer, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, props);

    let items: Vec<TabItem> = ResourceKind::ALL
        .iter()
        .map(|kind| {
            TabItem::new(kind.title())
                .short(short_label(*kind))
                .read_only(!kind.editable())
        })
        .collect();
    frame.render_widget(
        Paragraph::new(render_tab_selector(&items, props.active.index(), &ctx)),
        tabs,
    );

    render_filter_bar(frame, filters, props.view, props.input_mode);
    render_table(frame, body, props.view, props.selected);
    render_footer(frame, footer, props.view, &ctx);
    render_status_line(frame, status, props.view, props.notice, props.tick);

    if let Some(draft) = &props.view.draft {
        render_edit_dialog(frame, area, &ctx, draft, props.dialog);
    } else if let Some(id) = props.view.pending_delete {
        render_delete_confirm(frame, area, &ctx, props.view, id);
    }
}

fn render_header(frame: &mut Frame, area: Rect, props: &DashboardProps) {
    let left = Line::from(vec![
        Span::styled(
            " abd-admin",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", props.login), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(left), area);
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("{} ", props.language),
            Style::default().fg(COLOR_DIM),
        ))
        .alignment(ratatui::layout::Alignment::Right),
        area,
    );
}
