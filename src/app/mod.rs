//! Application state: screens, the login form, resource tabs and the
//! session they persist into.

mod handlers;
pub mod login;
pub mod messages;
mod navigation;

pub use login::{LoginField, LoginForm};
pub use messages::{AppMessage, LoginOutcome};
pub use navigation::spawn_resource_handle;

use std::sync::Arc;

use tokio::sync::{mpsc, Notify};

use crate::adapters::FileSessionStore;
use crate::auth::AdminCredentials;
use crate::config::AdminConfig;
use crate::error::AuthError;
use crate::models::ResourceKind;
use crate::resource::{ResourceHandle, TableView};
use crate::session::Session;
use crate::traits::{HttpClient, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

/// What typed characters currently edit on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Filter bar open with its text.
    Filter(String),
    /// `:` page prompt with the digits typed so far.
    GotoPage(String),
}

/// Local text of the open create/edit dialog.
///
/// Values are pushed to the worker as `EditField` intents when the cursor
/// leaves a changed field or the dialog is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogInput {
    pub field: usize,
    pub names: Vec<&'static str>,
    pub values: Vec<String>,
    pub dirty: Vec<bool>,
}

impl DialogInput {
    fn from_fields(fields: &[(&'static str, String)]) -> Self {
        Self {
            field: 0,
            names: fields.iter().map(|(name, _)| *name).collect(),
            values: fields.iter().map(|(_, value)| value.clone()).collect(),
            dirty: vec![false; fields.len()],
        }
    }
}

/// Everything the event loop and renderer share.
pub struct App<S: SessionStore = FileSessionStore> {
    pub screen: Screen,
    pub config: AdminConfig,
    pub session: Session<S>,
    client: Arc<dyn HttpClient>,
    pub login: LoginForm,
    /// Verified for this process only; never persisted.
    credentials: Option<AdminCredentials>,
    /// One handle per [`ResourceKind`], in tab order. Empty when logged out.
    tabs: Vec<ResourceHandle>,
    pub active: ResourceKind,
    selected: Vec<usize>,
    visited: Vec<bool>,
    pub input_mode: InputMode,
    pub dialog: Option<DialogInput>,
    /// App-level notice shown in the status line.
    pub status: Option<String>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub needs_redraw: bool,
    redraw: Arc<Notify>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl<S: SessionStore> App<S> {
    pub fn new(config: AdminConfig, session: Session<S>, client: Arc<dyn HttpClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let login = LoginForm::with_login(config.login.clone().unwrap_or_default());
        Self {
            screen: Screen::Login,
            config,
            session,
            client,
            login,
            credentials: None,
            tabs: Vec::new(),
            active: ResourceKind::ALL[0],
            selected: vec![0; ResourceKind::ALL.len()],
            visited: vec![false; ResourceKind::ALL.len()],
            input_mode: InputMode::Normal,
            dialog: None,
            status: None,
            tick_count: 0,
            should_quit: false,
            needs_redraw: true,
            redraw: Arc::new(Notify::new()),
            message_tx,
            message_rx: None,
        }
        .with_receiver(message_rx)
    }

    fn with_receiver(mut self, rx: mpsc::UnboundedReceiver<AppMessage>) -> Self {
        self.message_rx = Some(rx);
        self
    }

    /// Skip the login screen when the session says we are logged in and
    /// credentials were configured.
    pub fn initialize(&mut self) {
        if !self.session.is_logged_in() {
            return;
        }
        match self.config.default_credentials() {
            Some(credentials) => {
                tracing::info!("Resuming session as '{}'", credentials.login);
                self.open_dashboard(credentials);
            }
            None => {
                let err = AuthError::NotLoggedIn;
                tracing::info!(
                    code = err.error_code(),
                    "Session flag set but no credentials configured"
                );
                self.login.error = Some(err.user_message());
            }
        }
    }

    /// Woken whenever a resource worker publishes a new view.
    pub fn redraw_signal(&self) -> Arc<Notify> {
        Arc::clone(&self.redraw)
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() {
            self.needs_redraw = true;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn credentials(&self) -> Option<&AdminCredentials> {
        self.credentials.as_ref()
    }

    pub fn handles(&self) -> &[ResourceHandle] {
        &self.tabs
    }

    fn active_handle(&self) -> Option<&ResourceHandle> {
        self.tabs.get(self.active.index())
    }

    /// Latest snapshot of the active tab.
    pub fn active_view(&self) -> Option<TableView> {
        self.active_handle().map(ResourceHandle::view)
    }

    /// Selected row of the active tab.
    pub fn selected_row(&self) -> usize {
        self.selected[self.active.index()]
    }

    pub fn is_loading(&self) -> bool {
        self.login.submitting || self.active_view().is_some_and(|view| view.loading)
    }

    /// Apply a background result.
    pub async fn handle_message(&mut self, message: AppMessage) {
        self.needs_redraw = true;
        match message {
            AppMessage::LoginFinished(LoginOutcome::Accepted(credentials)) => {
                self.login.submitting = false;
                self.login.reset_password();
                if let Err(err) = self.session.log_in().await {
                    self.status = Some(err.status_line());
                }
                self.open_dashboard(credentials);
            }
            AppMessage::LoginFinished(LoginOutcome::Rejected(message)) => {
                self.login.submitting = false;
                self.login.reset_password();
                self.login.error = Some(message);
            }
        }
    }

    /// Pull worker snapshots into app state: clamp the row selection, open
    /// or close the local dialog copy, and remember the shown page.
    pub async fn sync_views(&mut self) {
        let Some(view) = self.active_view() else {
            return;
        };
        self.needs_redraw = true;

        let index = self.active.index();
        let rows = view.rows.len();
        if self.selected[index] >= rows {
            self.selected[index] = rows.saturating_sub(1);
        }

        match (&view.draft, &self.dialog) {
            (Some(draft), None) => self.dialog = Some(DialogInput::from_fields(&draft.fields)),
            (None, Some(_)) => self.dialog = None,
            _ => {}
        }

        if !view.loading && view.error.is_none() && view.pages > 0 {
            if let Err(err) = self.session.remember_page(view.path, view.page).await {
                self.status = Some(err.status_line());
            }
        }
    }
}
