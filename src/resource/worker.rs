//! Background task driving one [`ResourceController`].
//!
//! The UI never awaits HTTP. It sends [`Intent`]s down a channel and reads
//! the latest [`TableView`] from a watch channel. Page fetches run
//! concurrently so a quick page flip does not wait for the previous one;
//! the controller's sequence numbers decide which response is shown.
//! Writes and dialog actions run one at a time in intent order.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use futures_util::stream::{FuturesUnordered, StreamExt};
use tokio::sync::{mpsc, watch, Notify};
use tokio::task::JoinHandle;

use super::controller::{PageRequest, ResourceController};
use super::view::{Intent, TableView};
use super::Resource;
use crate::error::AdminResult;
use crate::models::Page;
use crate::traits::HttpClient;

type Fetch<R> = Pin<Box<dyn Future<Output = (PageRequest, AdminResult<Page<R>>)> + Send>>;

/// Non-generic end of a resource worker, held by the app.
///
/// Dropping the handle stops the worker.
#[derive(Debug)]
pub struct ResourceHandle {
    path: &'static str,
    intents: mpsc::UnboundedSender<Intent>,
    view: watch::Receiver<TableView>,
    task: JoinHandle<()>,
}

impl ResourceHandle {
    /// Endpoint path of the resource, e.g. `tariffs`.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Queue an intent. Returns false once the worker has stopped.
    pub fn send(&self, intent: Intent) -> bool {
        self.intents.send(intent).is_ok()
    }

    /// Latest published snapshot.
    pub fn view(&self) -> TableView {
        self.view.borrow().clone()
    }

    /// A receiver that wakes on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<TableView> {
        self.view.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for ResourceHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn the worker for `controller` on the current runtime.
///
/// `redraw` is notified after every published snapshot.
pub fn spawn_resource_worker<R, C>(
    controller: ResourceController<R, C>,
    redraw: Arc<Notify>,
) -> ResourceHandle
where
    R: Resource,
    C: HttpClient + ?Sized + 'static,
{
    let (intent_tx, intent_rx) = mpsc::unbounded_channel();
    let (view_tx, view_rx) = watch::channel(TableView::from_controller(&controller));

    let task = tokio::spawn(run_worker(controller, intent_rx, view_tx, redraw));

    ResourceHandle {
        path: R::PATH,
        intents: intent_tx,
        view: view_rx,
        task,
    }
}

async fn run_worker<R, C>(
    mut controller: ResourceController<R, C>,
    mut intents: mpsc::UnboundedReceiver<Intent>,
    view_tx: watch::Sender<TableView>,
    redraw: Arc<Notify>,
) where
    R: Resource,
    C: HttpClient + ?Sized + 'static,
{
    let mut fetches: FuturesUnordered<Fetch<R>> = FuturesUnordered::new();

    loop {
        tokio::select! {
            intent = intents.recv() => {
                match intent {
                    Some(intent) => {
                        if let Some(fetch) = handle_intent(&mut controller, intent).await {
                            fetches.push(fetch);
                        }
                    }
                    None => {
                        tracing::debug!("{} worker: handle dropped, stopping", R::PATH);
                        break;
                    }
                }
            }
            Some((request, result)) = fetches.next(), if !fetches.is_empty() => {
                controller.apply_page(&request, result);
            }
        }

        if view_tx.send(TableView::from_controller(&controller)).is_err() {
            break;
        }
        redraw.notify_one();
    }
}

/// Apply one intent. Page changes return the fetch to run; everything
/// else completes before the next intent is read.
async fn handle_intent<R, C>(
    controller: &mut ResourceController<R, C>,
    intent: Intent,
) -> Option<Fetch<R>>
where
    R: Resource,
    C: HttpClient + ?Sized + 'static,
{
    tracing::debug!("{} intent: {:?}", R::PATH, intent);

    let target = controller.target_page();
    let begun = match intent {
        Intent::Load => controller.begin_load(target.max(1), None),
        Intent::PageChange(page) => controller.begin_load(page, None),
        Intent::NextPage => controller.begin_load(target.saturating_add(1), None),
        Intent::PrevPage => controller.begin_load(target.saturating_sub(1), None),
        Intent::SubmitFilters(filters) => controller.begin_load(1, Some(filters)),
        Intent::PageSize(size) => controller.begin_resize(size),
        other => {
            let outcome = run_inline(controller, other).await;
            if let Err(err) = outcome {
                tracing::debug!("{} action failed: {}", R::PATH, err);
            }
            return None;
        }
    };

    match begun {
        Ok(request) => {
            let api = controller.api().clone();
            Some(Box::pin(async move {
                let result = api.list(&request.query).await;
                (request, result)
            }))
        }
        Err(err) => {
            tracing::debug!("{} page change refused: {}", R::PATH, err);
            None
        }
    }
}

async fn run_inline<R, C>(controller: &mut ResourceController<R, C>, intent: Intent) -> AdminResult<()>
where
    R: Resource,
    C: HttpClient + ?Sized + 'static,
{
    match intent {
        Intent::Restore(page) => controller.restore_page(page).await.map(|_| ()),
        Intent::OpenCreate => controller.open_create(),
        Intent::OpenEdit(id) => controller.open_edit(id).await,
        Intent::EditField { name, value } => controller.edit_field(&name, &value),
        Intent::Save => controller.save().await,
        Intent::CancelEdit => {
            controller.cancel_edit();
            Ok(())
        }
        Intent::RequestDelete(id) => controller.request_delete(id),
        Intent::ConfirmDelete => controller.confirm_delete().await,
        Intent::CancelDelete => {
            controller.cancel_delete();
            Ok(())
        }
        Intent::Load
        | Intent::PageChange(_)
        | Intent::NextPage
        | Intent::PrevPage
        | Intent::SubmitFilters(_)
        | Intent::PageSize(_) => Ok(()),
    }
}
