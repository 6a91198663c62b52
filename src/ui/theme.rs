//! Color palette.

use ratatui::style::Color;

pub const COLOR_BORDER: Color = Color::DarkGray;
pub const COLOR_ACCENT: Color = Color::White;
pub const COLOR_HEADER: Color = Color::White;
pub const COLOR_DIM: Color = Color::DarkGray;
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Selected table row.
pub const COLOR_SELECTED_BG: Color = Color::Rgb(40, 44, 60);

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_LOADING: Color = Color::Cyan;

/// Read-only tab marker.
pub const COLOR_READ_ONLY: Color = Color::Yellow;
