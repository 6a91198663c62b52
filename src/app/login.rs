//! Login form state and submission.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::messages::{AppMessage, LoginOutcome};
use crate::auth::verify_credentials;
use crate::config::AdminConfig;
use crate::traits::HttpClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Login,
    Password,
}

impl LoginField {
    pub fn toggle(self) -> Self {
        match self {
            LoginField::Login => LoginField::Password,
            LoginField::Password => LoginField::Login,
        }
    }
}

/// The two inputs of the login screen.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub login: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<String>,
    /// A check is in flight; input is ignored until it answers.
    pub submitting: bool,
}

impl LoginForm {
    pub fn with_login(login: impl Into<String>) -> Self {
        let login = login.into();
        let focus = if login.is_empty() {
            LoginField::Login
        } else {
            LoginField::Password
        };
        Self {
            login,
            focus,
            ..Self::default()
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Login => &mut self.login,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
        self.error = None;
    }

    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    /// Pasted text goes into the focused field, newlines dropped.
    pub fn paste(&mut self, text: &str) {
        self.focused_mut()
            .extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
        self.error = None;
    }

    /// Clear the password after a check, keep the login.
    pub fn reset_password(&mut self) {
        self.password.clear();
        self.focus = LoginField::Password;
    }
}

/// Run the login check in the background and report through `tx`.
pub fn spawn_login_check(
    client: Arc<dyn HttpClient>,
    config: AdminConfig,
    login: String,
    password: String,
    tx: mpsc::UnboundedSender<AppMessage>,
) {
    tokio::spawn(async move {
        let outcome = match verify_credentials(client.as_ref(), &config, &login, &password).await {
            Ok(credentials) => LoginOutcome::Accepted(credentials),
            Err(err) => LoginOutcome::Rejected(err.user_message()),
        };
        let _ = tx.send(AppMessage::LoginFinished(outcome));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = LoginForm::default();
        form.push_char('a');
        form.focus = form.focus.toggle();
        form.paste("se\ncret");
        form.pop_char();
        assert_eq!(form.login, "a");
        assert_eq!(form.password, "secre");
    }

    #[test]
    fn test_prefilled_login_focuses_password() {
        let form = LoginForm::with_login("admin");
        assert_eq!(form.focus, LoginField::Password);
    }

    #[test]
    fn test_typing_clears_error() {
        let mut form = LoginForm {
            error: Some("nope".to_string()),
            ..LoginForm::default()
        };
        form.push_char('x');
        assert!(form.error.is_none());
    }
}
