//! Moving between screens, tabs and rows.

use std::sync::Arc;

use tokio::sync::Notify;

use super::{App, InputMode, Screen};
use crate::auth::AdminCredentials;
use crate::config::AdminConfig;
use crate::models::{
    Car, Contact, Filter, PayHistory, ResourceKind, Setting, Subscription, Tariff, User,
};
use crate::resource::{
    spawn_resource_worker, Intent, Resource, ResourceApi, ResourceController, ResourceHandle,
};
use crate::traits::{HttpClient, SessionStore};

/// Start the worker for `kind` with the given credentials.
pub fn spawn_resource_handle(
    kind: ResourceKind,
    client: Arc<dyn HttpClient>,
    config: &AdminConfig,
    credentials: AdminCredentials,
    redraw: Arc<Notify>,
) -> ResourceHandle {
    match kind {
        ResourceKind::Cars => spawn::<Car>(client, config, credentials, redraw),
        ResourceKind::Filters => spawn::<Filter>(client, config, credentials, redraw),
        ResourceKind::Subscriptions => spawn::<Subscription>(client, config, credentials, redraw),
        ResourceKind::Tariffs => spawn::<Tariff>(client, config, credentials, redraw),
        ResourceKind::Contacts => spawn::<Contact>(client, config, credentials, redraw),
        ResourceKind::Settings => spawn::<Setting>(client, config, credentials, redraw),
        ResourceKind::Users => spawn::<User>(client, config, credentials, redraw),
        ResourceKind::PayHistory => spawn::<PayHistory>(client, config, credentials, redraw),
    }
}

fn spawn<R: Resource>(
    client: Arc<dyn HttpClient>,
    config: &AdminConfig,
    credentials: AdminCredentials,
    redraw: Arc<Notify>,
) -> ResourceHandle {
    let api: ResourceApi<R, dyn HttpClient> = ResourceApi::new(client, config, credentials);
    let mut controller = ResourceController::new(api);
    if let Some(size) = config.page_size {
        controller = controller.with_page_size(size);
    }
    spawn_resource_worker(controller, redraw)
}

impl<S: SessionStore> App<S> {
    /// Start one worker per resource and show the first tab.
    pub fn open_dashboard(&mut self, credentials: AdminCredentials) {
        self.tabs = ResourceKind::ALL
            .iter()
            .map(|kind| {
                spawn_resource_handle(
                    *kind,
                    Arc::clone(&self.client),
                    &self.config,
                    credentials.clone(),
                    Arc::clone(&self.redraw),
                )
            })
            .collect();
        self.credentials = Some(credentials);
        self.visited.iter_mut().for_each(|v| *v = false);
        self.selected.iter_mut().for_each(|s| *s = 0);
        self.input_mode = InputMode::Normal;
        self.dialog = None;
        self.status = None;
        self.screen = Screen::Dashboard;
        self.activate(self.active);
    }

    /// Clear the session flag, stop the workers and go back to the login
    /// screen. The language preference is kept.
    pub async fn logout(&mut self) {
        if let Err(err) = self.session.log_out().await {
            self.status = Some(err.status_line());
        }
        self.tabs.clear();
        self.credentials = None;
        self.dialog = None;
        self.input_mode = InputMode::Normal;
        self.login.reset_password();
        self.screen = Screen::Login;
        self.needs_redraw = true;
        tracing::info!("Logged out");
    }

    /// Show `kind`, restoring its remembered page on first display.
    pub fn activate(&mut self, kind: ResourceKind) {
        self.active = kind;
        self.input_mode = InputMode::Normal;
        self.needs_redraw = true;

        let index = kind.index();
        if self.visited[index] {
            return;
        }
        let page = self.session.current_page(kind.path());
        if let Some(handle) = self.tabs.get(index) {
            handle.send(Intent::Restore(page));
            self.visited[index] = true;
        }
    }

    pub fn next_tab(&mut self) {
        self.activate(self.active.next());
    }

    pub fn prev_tab(&mut self) {
        self.activate(self.active.prev());
    }

    pub fn select_next_row(&mut self) {
        let rows = self.active_view().map_or(0, |view| view.rows.len());
        let selected = &mut self.selected[self.active.index()];
        if *selected + 1 < rows {
            *selected += 1;
        }
    }

    pub fn select_prev_row(&mut self) {
        let selected = &mut self.selected[self.active.index()];
        *selected = selected.saturating_sub(1);
    }

    /// Id of the item on the selected row.
    pub fn selected_id(&self) -> Option<i64> {
        let view = self.active_view()?;
        view.row_ids.get(self.selected_row()).copied()
    }

    /// Send an intent to the active tab's worker.
    pub fn send_intent(&mut self, intent: Intent) {
        if matches!(
            intent,
            Intent::NextPage
                | Intent::PrevPage
                | Intent::PageChange(_)
                | Intent::SubmitFilters(_)
                | Intent::PageSize(_)
        ) {
            self.selected[self.active.index()] = 0;
        }
        if let Some(handle) = self.active_handle() {
            if !handle.send(intent) {
                tracing::warn!("{} worker is not running", handle.path());
            }
        }
    }
}
