//! List state and the edit/delete flow for one resource.
//!
//! ```text
//! Idle --load--> Loading --success--> Idle (new data)
//! Loading --failure--> Idle (old data, error recorded)
//! Idle --open_create/open_edit--> Editing
//! Editing --save ok--> Idle (page reloaded)
//! Editing --save failed--> Editing (error on the draft)
//! Editing --cancel--> Idle
//! Idle --request_delete--> ConfirmingDelete
//! ConfirmingDelete --confirm--> Idle (item removed, or error recorded)
//! ConfirmingDelete --cancel--> Idle
//! ```
//!
//! Page loads are split into [`ResourceController::begin_load`] and
//! [`ResourceController::apply_page`] so several fetches can be in flight
//! at once. Each request carries a sequence number and only the newest one
//! is ever applied.

use super::draft::{DraftMode, EditDraft};
use super::{Filters, ListQuery, Resource, ResourceApi};
use crate::error::{AdminError, AdminResult, ErrorContext, NetworkError, ResourceError};
use crate::models::{Page, PageMeta};
use crate::traits::HttpClient;

/// Coarse controller state, for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Editing,
    ConfirmingDelete,
}

/// A page fetch that has been issued but not applied yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub seq: u64,
    pub query: ListQuery,
}

#[derive(Debug, Clone)]
enum Mode<R> {
    Idle,
    Editing(EditDraft<R>),
    ConfirmingDelete { id: i64 },
}

/// Owns the visible page of one resource and every change made to it.
pub struct ResourceController<R: Resource, C: HttpClient + ?Sized> {
    api: ResourceApi<R, C>,
    items: Vec<R>,
    meta: PageMeta,
    page_size: u32,
    filters: Filters,
    loading: bool,
    last_error: Option<String>,
    mode: Mode<R>,
    latest_seq: u64,
    /// Page of the newest request still in flight.
    pending_page: Option<u32>,
}

impl<R: Resource, C: HttpClient + ?Sized> ResourceController<R, C> {
    pub fn new(api: ResourceApi<R, C>) -> Self {
        Self {
            api,
            items: Vec::new(),
            meta: PageMeta::empty(R::DEFAULT_PAGE_SIZE),
            page_size: R::DEFAULT_PAGE_SIZE,
            filters: Filters::new(),
            loading: false,
            last_error: None,
            mode: Mode::Idle,
            latest_seq: 0,
            pending_page: None,
        }
    }

    /// Override the page size. Zero is ignored.
    pub fn with_page_size(mut self, size: u32) -> Self {
        if size > 0 {
            self.page_size = size;
            self.meta.size = size;
        }
        self
    }

    pub fn api(&self) -> &ResourceApi<R, C> {
        &self.api
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn meta(&self) -> PageMeta {
        self.meta
    }

    pub fn page(&self) -> u32 {
        self.meta.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn draft(&self) -> Option<&EditDraft<R>> {
        match &self.mode {
            Mode::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    /// Id awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<i64> {
        match self.mode {
            Mode::ConfirmingDelete { id } => Some(id),
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.mode {
            Mode::Editing(_) => Phase::Editing,
            Mode::ConfirmingDelete { .. } => Phase::ConfirmingDelete,
            Mode::Idle if self.loading => Phase::Loading,
            Mode::Idle => Phase::Idle,
        }
    }

    /// Page the controller is heading to: the newest requested page, or the
    /// shown page when nothing is in flight.
    pub fn target_page(&self) -> u32 {
        self.pending_page.unwrap_or(self.meta.page)
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Validate `page` and issue the next request sequence number.
    ///
    /// New `filters` replace the current ones; any positive page is then
    /// accepted because the page count is about to change.
    pub fn begin_load(&mut self, page: u32, filters: Option<Filters>) -> AdminResult<PageRequest> {
        let valid = match filters {
            Some(_) => page >= 1,
            None => self.meta.accepts(page),
        };
        if !valid {
            let err = ResourceError::InvalidPage {
                requested: page,
                pages: self.meta.pages,
            };
            self.last_error = Some(err.user_message());
            return Err(err.into());
        }

        if let Some(filters) = filters {
            self.filters = filters;
        }
        self.latest_seq += 1;
        self.loading = true;
        self.pending_page = Some(page);

        Ok(PageRequest {
            seq: self.latest_seq,
            query: ListQuery::new(page, self.page_size).with_filters(self.filters.clone()),
        })
    }

    /// Apply the outcome of `request` if it is still the newest one.
    ///
    /// Returns whether it was applied. Stale outcomes change nothing.
    pub fn apply_page(&mut self, request: &PageRequest, result: AdminResult<Page<R>>) -> bool {
        self.settle(request, result).is_some()
    }

    fn settle(
        &mut self,
        request: &PageRequest,
        result: AdminResult<Page<R>>,
    ) -> Option<AdminResult<PageMeta>> {
        if request.seq != self.latest_seq {
            tracing::debug!(
                "Dropping stale {} page {} response (seq {}, latest {})",
                R::PATH,
                request.query.page,
                request.seq,
                self.latest_seq
            );
            return None;
        }

        self.loading = false;
        self.pending_page = None;

        match result {
            Ok(page) => {
                let (items, meta) = page.into_parts();
                self.items = items;
                self.meta = meta;
                self.last_error = None;
                Some(Ok(meta))
            }
            Err(err) => {
                let err = err.with_context(
                    ErrorContext::new("load_page")
                        .with_resource(R::PATH)
                        .with_page(request.query.page),
                );
                tracing::warn!(code = err.error_code(), "{}", err);
                self.last_error = Some(err.status_line());
                Some(Err(err))
            }
        }
    }

    /// Switch to `size` rows per page and issue a request for page 1.
    ///
    /// Zero is rejected and leaves the current size alone.
    pub fn begin_resize(&mut self, size: u32) -> AdminResult<PageRequest> {
        if size == 0 {
            let err = ResourceError::InvalidPageSize;
            self.last_error = Some(err.user_message());
            return Err(err.into());
        }
        self.page_size = size;
        self.begin_load(1, Some(self.filters.clone()))
    }

    /// Fetch `page` and replace the list with it.
    ///
    /// On failure the previous list stays and the error is recorded. The
    /// loading flag is cleared on every path.
    pub async fn load_page(&mut self, page: u32, filters: Option<Filters>) -> AdminResult<PageMeta> {
        let request = self.begin_load(page, filters)?;
        self.fetch(request).await
    }

    /// Show `size` rows per page, starting again from page 1.
    pub async fn set_page_size(&mut self, size: u32) -> AdminResult<PageMeta> {
        let request = self.begin_resize(size)?;
        self.fetch(request).await
    }

    async fn fetch(&mut self, request: PageRequest) -> AdminResult<PageMeta> {
        let result = self.api.list(&request.query).await;
        self.settle(&request, result).unwrap_or(Ok(self.meta))
    }

    /// Fetch the page currently shown again.
    pub async fn reload(&mut self) -> AdminResult<PageMeta> {
        self.load_page(self.meta.page.max(1), None).await
    }

    pub async fn next_page(&mut self) -> AdminResult<PageMeta> {
        let page = self.target_page().saturating_add(1);
        self.load_page(page, None).await
    }

    pub async fn prev_page(&mut self) -> AdminResult<PageMeta> {
        let page = self.target_page().saturating_sub(1);
        self.load_page(page, None).await
    }

    /// Replace the filters and go back to the first page.
    pub async fn set_filters(&mut self, filters: Filters) -> AdminResult<PageMeta> {
        self.load_page(1, Some(filters)).await
    }

    /// Show a remembered page, falling back to the last page that still
    /// exists when it is out of range now.
    pub async fn restore_page(&mut self, page: u32) -> AdminResult<PageMeta> {
        let page = page.max(1);
        let meta = match self.load_page(page, None).await {
            Ok(meta) => meta,
            Err(err) if page > 1 && is_out_of_range(&err) => {
                tracing::debug!("Remembered {} page {} rejected, showing page 1", R::PATH, page);
                return self.load_page(1, None).await;
            }
            Err(err) => return Err(err),
        };

        if self.items.is_empty() && meta.pages > 0 && page > meta.pages {
            tracing::debug!(
                "Remembered {} page {} no longer exists, showing page {}",
                R::PATH,
                page,
                meta.pages
            );
            return self.load_page(meta.pages, None).await;
        }
        Ok(meta)
    }

    // ------------------------------------------------------------------
    // Single items
    // ------------------------------------------------------------------

    /// Fetch one item. Any failure is logged and reported as `None`.
    pub async fn get_by_id(&self, id: i64) -> Option<R> {
        match self.api.get(id).await {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!("Failed to fetch {} #{}: {}", R::PATH, id, err);
                None
            }
        }
    }

    /// Create `item` from its writable fields, then reload the current page.
    pub async fn create(&mut self, item: &R) -> AdminResult<()> {
        self.ensure_editable()?;
        let result = self.api.create(item).await;
        self.after_write(result, ErrorContext::new("create").with_resource(R::PATH))
            .await
    }

    /// Send every writable field of `item` to `id`, then reload.
    pub async fn update(&mut self, id: i64, item: &R) -> AdminResult<()> {
        self.ensure_editable()?;
        let result = self.api.update(id, item).await;
        self.after_write(
            result,
            ErrorContext::new("update").with_resource(R::PATH).with_item_id(id),
        )
        .await
    }

    async fn after_write(&mut self, result: AdminResult<()>, ctx: ErrorContext) -> AdminResult<()> {
        match result {
            Ok(()) => {
                tracing::info!("{} {} succeeded", ctx.operation, R::PATH);
                if let Err(err) = self.reload().await {
                    tracing::debug!("Reload after {} failed: {}", ctx.operation, err);
                }
                Ok(())
            }
            Err(err) => Err(self.record(err.with_context(ctx))),
        }
    }

    /// Delete `id` and drop it from the local list.
    ///
    /// Only refetches when the current page became empty: a non-first page
    /// steps back one page, the first page reloads if items remain.
    pub async fn remove(&mut self, id: i64) -> AdminResult<()> {
        self.ensure_editable()?;
        if let Err(err) = self.api.delete(id).await {
            let ctx = ErrorContext::new("remove")
                .with_resource(R::PATH)
                .with_item_id(id);
            return Err(self.record(err.with_context(ctx)));
        }
        tracing::info!("remove {} #{} succeeded", R::PATH, id);

        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.items.len() == before {
            // Not on this page; the server view shifted under us.
            if let Err(err) = self.reload().await {
                tracing::debug!("Reload after remove failed: {}", err);
            }
            return Ok(());
        }

        self.meta.total = self.meta.total.saturating_sub(1);
        let size = if self.meta.size > 0 {
            self.meta.size
        } else {
            self.page_size
        };
        self.meta.pages = PageMeta::pages_for(self.meta.total, size);

        if self.items.is_empty() {
            let outcome = if self.meta.page > 1 {
                let previous = self.meta.page - 1;
                self.load_page(previous, None).await
            } else if self.meta.total > 0 {
                self.load_page(1, None).await
            } else {
                Ok(self.meta)
            };
            if let Err(err) = outcome {
                tracing::debug!("Refresh after remove failed: {}", err);
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Dialogs
    // ------------------------------------------------------------------

    /// Open the dialog with a blank item.
    pub fn open_create(&mut self) -> AdminResult<()> {
        self.ensure_editable()?;
        self.mode = Mode::Editing(EditDraft::create());
        Ok(())
    }

    /// Open the dialog on a freshly fetched copy of `id`.
    ///
    /// The dialog stays closed when the item cannot be fetched.
    pub async fn open_edit(&mut self, id: i64) -> AdminResult<()> {
        self.ensure_editable()?;
        match self.get_by_id(id).await {
            Some(item) => {
                self.mode = Mode::Editing(EditDraft::edit(item));
                Ok(())
            }
            None => Err(self.record(ResourceError::NotFound { id }.into())),
        }
    }

    /// Change one field of the open draft.
    pub fn edit_field(&mut self, name: &str, raw: &str) -> AdminResult<()> {
        let draft = match &mut self.mode {
            Mode::Editing(draft) => draft,
            _ => return Err(ResourceError::NoDraft.into()),
        };
        match draft.set_field(name, raw) {
            Ok(()) => {
                // A different field may still hold rejected input.
                if draft.invalid_field.as_deref() == Some(name) {
                    draft.error = None;
                    draft.invalid_field = None;
                }
                Ok(())
            }
            Err(err) => {
                draft.error = Some(err.user_message());
                draft.invalid_field = Some(name.to_string());
                Err(err.into())
            }
        }
    }

    /// Send the open draft. On success the dialog closes; on failure it
    /// stays open with the error attached.
    pub async fn save(&mut self) -> AdminResult<()> {
        let draft = match &self.mode {
            Mode::Editing(draft) => draft.clone(),
            _ => return Err(ResourceError::NoDraft.into()),
        };
        if let Some(field) = draft.invalid_field {
            return Err(ResourceError::InvalidValue {
                field,
                message: "fix this field before saving".to_string(),
            }
            .into());
        }

        let result = match draft.mode {
            DraftMode::Create => self.create(&draft.item).await,
            DraftMode::Edit { id } => self.update(id, &draft.item).await,
        };

        match result {
            Ok(()) => {
                self.mode = Mode::Idle;
                Ok(())
            }
            Err(err) => {
                if let Mode::Editing(open) = &mut self.mode {
                    open.error = Some(err.status_line());
                }
                Err(err)
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        if matches!(self.mode, Mode::Editing(_)) {
            self.mode = Mode::Idle;
        }
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: i64) -> AdminResult<()> {
        self.ensure_editable()?;
        self.mode = Mode::ConfirmingDelete { id };
        Ok(())
    }

    /// Delete the item awaiting confirmation.
    pub async fn confirm_delete(&mut self) -> AdminResult<()> {
        let id = match self.mode {
            Mode::ConfirmingDelete { id } => id,
            _ => return Err(ResourceError::NoDraft.into()),
        };
        self.mode = Mode::Idle;
        self.remove(id).await
    }

    pub fn cancel_delete(&mut self) {
        if matches!(self.mode, Mode::ConfirmingDelete { .. }) {
            self.mode = Mode::Idle;
        }
    }

    fn ensure_editable(&mut self) -> AdminResult<()> {
        if R::EDITABLE {
            return Ok(());
        }
        let err: AdminError = ResourceError::ReadOnly { resource: R::PATH }.into();
        self.last_error = Some(err.user_message());
        Err(err)
    }

    fn record(&mut self, err: AdminError) -> AdminError {
        tracing::warn!(code = err.error_code(), "{}", err);
        self.last_error = Some(err.status_line());
        err
    }
}

/// Statuses a list endpoint uses for a page number it will not serve.
fn is_out_of_range(err: &AdminError) -> bool {
    matches!(
        err.inner(),
        AdminError::Network(NetworkError::HttpStatus {
            status: 404 | 422,
            ..
        })
    )
}
