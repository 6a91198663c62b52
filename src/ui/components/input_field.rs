//! Labelled one-line text input.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Show bullets instead of the value.
    pub is_password: bool,
    pub error: Option<&'a str>,
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_password: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Label (1) + box (3) + optional error (1).
pub fn input_field_height(config: &InputFieldConfig) -> u16 {
    if config.error.is_some() {
        5
    } else {
        4
    }
}

/// Draw the field at the top of `area`, clipped to it. Returns the rows
/// used.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let width = area.width.saturating_sub(4);
    let x = area.x + 2;
    let clip = |rect: Rect| rect.intersection(area);

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        clip(Rect::new(x, area.y, width, 1)),
    );

    let show_placeholder = config.value.is_empty() && config.placeholder.is_some();
    let mut content = if config.is_password {
        "\u{2022}".repeat(config.value.chars().count())
    } else if show_placeholder {
        config.placeholder.unwrap_or_default().to_string()
    } else {
        config.value.to_string()
    };
    if config.focused {
        content.push('\u{2588}');
    }

    let text_style = if show_placeholder || !config.focused {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(Color::White)
    };
    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(content, text_style))).block(block),
        clip(Rect::new(x, area.y + 1, width, 3)),
    );

    if let Some(error) = config.error {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
                Span::styled(error, Style::default().fg(COLOR_ERROR)),
            ])),
            clip(Rect::new(x, area.y + 4, width, 1)),
        );
    }

    input_field_height(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = InputFieldConfig::new("Password", "secret")
            .focused(true)
            .password(true)
            .error(Some("Invalid login or password."))
            .placeholder("admin key");

        assert!(config.focused);
        assert!(config.is_password);
        assert_eq!(config.placeholder, Some("admin key"));
        assert_eq!(input_field_height(&config), 5);
    }

    #[test]
    fn test_height_without_error() {
        assert_eq!(input_field_height(&InputFieldConfig::new("Login", "")), 4);
    }
}
