//! Key handling for both screens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::login::spawn_login_check;
use super::{App, InputMode, LoginField, Screen};
use crate::resource::{Filters, Intent, TableView};
use crate::traits::SessionStore;

impl<S: SessionStore> App<S> {
    /// Handle one key press.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        self.needs_redraw = true;

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Dashboard => self.handle_dashboard_key(key).await,
        }
    }

    /// Bracketed paste into whatever text input is active.
    pub fn handle_paste(&mut self, text: &str) {
        self.needs_redraw = true;
        let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        match self.screen {
            Screen::Login => self.login.paste(&text),
            Screen::Dashboard => {
                if let Some(dialog) = self.dialog.as_mut() {
                    if let Some(value) = dialog.values.get_mut(dialog.field) {
                        value.push_str(&text);
                        dialog.dirty[dialog.field] = true;
                    }
                    return;
                }
                match &mut self.input_mode {
                    InputMode::Filter(buffer) => buffer.push_str(&text),
                    InputMode::GotoPage(buffer) => {
                        buffer.extend(text.chars().filter(char::is_ascii_digit))
                    }
                    InputMode::Normal => {}
                }
            }
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        if self.login.submitting {
            return;
        }
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login.focus = self.login.focus.toggle();
            }
            KeyCode::Enter => {
                if self.login.focus == LoginField::Login && self.login.password.is_empty() {
                    self.login.focus = LoginField::Password;
                } else {
                    self.submit_login();
                }
            }
            KeyCode::Backspace => self.login.pop_char(),
            KeyCode::Char(c) => self.login.push_char(c),
            _ => {}
        }
    }

    /// Start the background login check with the typed values.
    pub fn submit_login(&mut self) {
        self.login.error = None;
        self.login.submitting = true;
        spawn_login_check(
            self.client.clone(),
            self.config.clone(),
            self.login.login.clone(),
            self.login.password.clone(),
            self.message_tx.clone(),
        );
    }

    async fn handle_dashboard_key(&mut self, key: KeyEvent) {
        let Some(view) = self.active_view() else {
            return;
        };

        if view.pending_delete.is_some() {
            self.handle_confirm_key(key);
            return;
        }
        if view.draft.is_some() {
            if self.dialog.is_none() {
                self.dialog = view
                    .draft
                    .as_ref()
                    .map(|draft| super::DialogInput::from_fields(&draft.fields));
            }
            self.handle_dialog_key(key);
            return;
        }

        match self.input_mode.clone() {
            InputMode::Filter(buffer) => self.handle_filter_key(key, buffer),
            InputMode::GotoPage(buffer) => self.handle_goto_key(key, buffer, &view),
            InputMode::Normal => self.handle_table_key(key, &view).await,
        }
    }

    async fn handle_table_key(&mut self, key: KeyEvent, view: &TableView) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('l') if ctrl => self.logout().await,
            KeyCode::Char('q') => self.quit(),
            KeyCode::Tab => self.next_tab(),
            KeyCode::BackTab => self.prev_tab(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev_row(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_row(),
            KeyCode::Right | KeyCode::PageDown => self.send_intent(Intent::NextPage),
            KeyCode::Left | KeyCode::PageUp => self.send_intent(Intent::PrevPage),
            KeyCode::Home => self.send_intent(Intent::PageChange(1)),
            KeyCode::End if view.pages > 0 => self.send_intent(Intent::PageChange(view.pages)),
            KeyCode::Char('r') => self.send_intent(Intent::Load),
            KeyCode::Char('s') => self.send_intent(Intent::PageSize(next_page_size(view.page_size))),
            KeyCode::Char('/') => self.input_mode = InputMode::Filter(view.filters.to_input()),
            KeyCode::Char(':') => self.input_mode = InputMode::GotoPage(String::new()),
            KeyCode::Char('n') if view.editable => {
                self.dialog = None;
                self.send_intent(Intent::OpenCreate);
            }
            KeyCode::Enter | KeyCode::Char('e') if view.editable => {
                if let Some(id) = self.selected_id() {
                    self.dialog = None;
                    self.send_intent(Intent::OpenEdit(id));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete if view.editable => {
                if let Some(id) = self.selected_id() {
                    self.send_intent(Intent::RequestDelete(id));
                }
            }
            KeyCode::Char('n' | 'e' | 'd') | KeyCode::Enter | KeyCode::Delete => {
                self.status = Some(format!("{} is read-only.", view.title));
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.send_intent(Intent::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.send_intent(Intent::CancelDelete)
            }
            _ => {}
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };
        let mut intents = Vec::new();

        match key.code {
            KeyCode::Esc => {
                intents.push(Intent::CancelEdit);
                self.dialog = None;
            }
            KeyCode::Up | KeyCode::BackTab => {
                intents.extend(commit_field(dialog));
                dialog.field = dialog.field.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Tab => {
                intents.extend(commit_field(dialog));
                if dialog.field + 1 < dialog.names.len() {
                    dialog.field += 1;
                }
            }
            KeyCode::Enter => {
                intents.extend(commit_field(dialog));
                intents.push(Intent::Save);
            }
            KeyCode::Backspace => {
                if let Some(value) = dialog.values.get_mut(dialog.field) {
                    value.pop();
                    dialog.dirty[dialog.field] = true;
                }
            }
            KeyCode::Char(c) => {
                if let Some(value) = dialog.values.get_mut(dialog.field) {
                    value.push(c);
                    dialog.dirty[dialog.field] = true;
                }
            }
            _ => {}
        }

        for intent in intents {
            self.send_intent(intent);
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent, mut buffer: String) {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.send_intent(Intent::SubmitFilters(Filters::parse(&buffer)));
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.input_mode = InputMode::Filter(buffer);
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                self.input_mode = InputMode::Filter(buffer);
            }
            _ => {}
        }
    }

    fn handle_goto_key(&mut self, key: KeyEvent, mut buffer: String, view: &TableView) {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                match buffer.parse::<u32>() {
                    Ok(page) => self.send_intent(Intent::PageChange(page)),
                    Err(_) => {
                        self.status = Some(format!("Enter a page between 1 and {}.", view.pages.max(1)))
                    }
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.input_mode = InputMode::GotoPage(buffer);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                buffer.push(c);
                self.input_mode = InputMode::GotoPage(buffer);
            }
            _ => {}
        }
    }
}

/// Rows-per-page choices cycled with `s`.
pub const PAGE_SIZE_STEPS: [u32; 4] = [10, 25, 50, 100];

/// The next step after `current`, wrapping to the smallest.
fn next_page_size(current: u32) -> u32 {
    PAGE_SIZE_STEPS
        .iter()
        .copied()
        .find(|step| *step > current)
        .unwrap_or(PAGE_SIZE_STEPS[0])
}

/// `EditField` for the current dialog field if it changed.
fn commit_field(dialog: &mut super::DialogInput) -> Option<Intent> {
    let index = dialog.field;
    if !dialog.dirty.get(index).copied().unwrap_or(false) {
        return None;
    }
    dialog.dirty[index] = false;
    Some(Intent::EditField {
        name: dialog.names[index].to_string(),
        value: dialog.values[index].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DialogInput;

    #[test]
    fn test_page_size_steps_wrap() {
        assert_eq!(next_page_size(10), 25);
        assert_eq!(next_page_size(20), 25);
        assert_eq!(next_page_size(50), 100);
        assert_eq!(next_page_size(100), 10);
        assert_eq!(next_page_size(500), 10);
    }

    #[test]
    fn test_commit_field_only_when_dirty() {
        let mut dialog = DialogInput::from_fields(&[("name", "Pro".to_string()), ("price", "1".to_string())]);
        assert!(commit_field(&mut dialog).is_none());

        dialog.values[0].push('!');
        dialog.dirty[0] = true;
        assert_eq!(
            commit_field(&mut dialog),
            Some(Intent::EditField {
                name: "name".to_string(),
                value: "Pro!".to_string()
            })
        );
        assert!(!dialog.dirty[0]);
    }
}
