//! Horizontal tab bar with a `▶` marker on the active tab.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_READ_ONLY};

#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    pub label: &'a str,
    /// Used on compact terminals.
    pub short_label: &'a str,
    /// Marked with a lock glyph.
    pub read_only: bool,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            short_label: label,
            read_only: false,
        }
    }

    pub fn short(mut self, short_label: &'a str) -> Self {
        self.short_label = short_label;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

pub fn render_tab_selector(items: &[TabItem], selected: usize, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    let spacing = if ctx.is_extra_small() { " " } else { "  " };

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if idx == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(label.to_string(), Style::default().fg(COLOR_DIM)));
        }
        if item.read_only {
            spans.push(Span::styled("°", Style::default().fg(COLOR_READ_ONLY)));
        }

        if idx + 1 < items.len() {
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_marker_on_selected() {
        let items = [TabItem::new("Cars"), TabItem::new("Tariffs")];
        let line = render_tab_selector(&items, 1, &LayoutContext::new(120, 40));
        assert!(text(&line).contains("▶ Tariffs"));
        assert!(!text(&line).contains("▶ Cars"));
    }

    #[test]
    fn test_short_labels_when_compact() {
        let items = [TabItem::new("Subscriptions").short("Subs")];
        let line = render_tab_selector(&items, 0, &LayoutContext::new(70, 40));
        assert!(text(&line).contains("Subs"));
        assert!(!text(&line).contains("Subscriptions"));
    }

    #[test]
    fn test_read_only_marker() {
        let items = [TabItem::new("Cars").read_only(true)];
        let line = render_tab_selector(&items, 0, &LayoutContext::new(120, 40));
        assert!(text(&line).ends_with('°'));
    }
}
