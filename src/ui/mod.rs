//! Rendering. Every function here only reads state.

pub mod components;
pub mod dashboard;
pub mod helpers;
pub mod layout;
pub mod login;
pub mod theme;

use ratatui::Frame;

use crate::app::{App, Screen};
use crate::traits::SessionStore;
use dashboard::DashboardProps;

/// Draw the current screen.
pub fn render<S: SessionStore>(frame: &mut Frame, app: &App<S>) {
    match app.screen {
        Screen::Login => {
            login::render_login_screen(frame, &app.login, &app.config.api_root, app.tick_count)
        }
        Screen::Dashboard => {
            let Some(view) = app.active_view() else {
                return;
            };
            let login = app.credentials().map_or("", |c| c.login.as_str());
            let props = DashboardProps {
                view: &view,
                active: app.active,
                selected: app.selected_row(),
                input_mode: &app.input_mode,
                dialog: app.dialog.as_ref(),
                notice: app.status.as_deref(),
                login,
                language: app.session.language(),
                tick: app.tick_count,
            };
            dashboard::render_dashboard(frame, &props);
        }
    }
}
