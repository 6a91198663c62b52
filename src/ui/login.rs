//! Login screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::components::{
    input_field_height, render_dialog_frame, render_input_field, DialogFrameConfig,
    InputFieldConfig,
};
use super::helpers::spinner;
use super::layout::LayoutContext;
use super::theme::{COLOR_DIM, COLOR_LOADING};
use crate::app::{LoginField, LoginForm};

/// Centered login box with both inputs, the rejection message and hints.
pub fn render_login_screen(frame: &mut Frame, form: &LoginForm, api_root: &str, tick: u64) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    let login = InputFieldConfig::new("Login", &form.login)
        .focused(form.focus == LoginField::Login && !form.submitting)
        .placeholder("admin login");
    let password = InputFieldConfig::new("Password", &form.password)
        .focused(form.focus == LoginField::Password && !form.submitting)
        .password(true)
        .error(form.error.as_deref());

    // server line, blank, two inputs, blank, hint
    let content_height = 2 + input_field_height(&login) + input_field_height(&password) + 2;
    let config = DialogFrameConfig::new("abd-admin", content_height).max_width(56);
    let inner = render_dialog_frame(frame, area, &ctx, &config);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            api_root.to_string(),
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Center),
        Rect::new(inner.x, inner.y, inner.width, 1).intersection(inner),
    );

    let bottom = inner.y + inner.height;
    let mut y = inner.y + 2;
    for field in [&login, &password] {
        let slot = Rect::new(inner.x, y, inner.width, bottom.saturating_sub(y));
        y += render_input_field(frame, slot, field);
    }

    let hint = if form.submitting {
        Line::from(vec![
            Span::styled(spinner(tick), Style::default().fg(COLOR_LOADING)),
            Span::raw(" Checking credentials…"),
        ])
    } else {
        Line::from(vec![
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" log in  ", Style::default().fg(COLOR_DIM)),
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" switch field  ", Style::default().fg(COLOR_DIM)),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" quit", Style::default().fg(COLOR_DIM)),
        ])
    };
    let hint_area = Rect::new(inner.x, y + 1, inner.width, 1).intersection(inner);
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), hint_area);
}
