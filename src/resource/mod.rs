//! Generic paginated CRUD over one admin endpoint.
//!
//! Every table in the dashboard is the same loop: fetch a page, render it,
//! edit an item in a dialog, refresh. The loop lives here once, and each
//! entity type only describes itself through [`Resource`].
//!
//! - [`api`] builds and sends the HTTP requests for one endpoint
//! - [`controller`] owns the list state and the edit/delete flow
//! - [`view`] turns controller state into render-ready snapshots
//! - [`worker`] runs a controller in its own task behind channels

pub mod api;
pub mod controller;
pub mod draft;
pub mod query;
pub mod view;
pub mod worker;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use api::ResourceApi;
pub use controller::{PageRequest, Phase, ResourceController};
pub use draft::{DraftMode, EditDraft};
pub use query::{Filters, ListQuery};
pub use view::{DraftView, Intent, TableView};
pub use worker::{spawn_resource_worker, ResourceHandle};

/// One column of a resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Field name in the serialized item.
    pub field: &'static str,
    pub header: &'static str,
    /// Minimum width in terminal cells.
    pub width: u16,
}

impl Column {
    pub const fn new(field: &'static str, header: &'static str, width: u16) -> Self {
        Self {
            field,
            header,
            width,
        }
    }
}

/// An entity type served by an admin endpoint.
///
/// Implementors are plain serde structs. The associated constants are the
/// whole per-table configuration; nothing else differs between tables.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static
{
    /// Endpoint segment under the admin base, e.g. `tariffs`.
    const PATH: &'static str;

    /// Human-readable table title.
    const TITLE: &'static str;

    const COLUMNS: &'static [Column];

    /// Fields sent on create and update. Everything else (the id and the
    /// server-managed timestamps) stays server-side.
    const WRITABLE_FIELDS: &'static [&'static str];

    /// Fields suggested in the filter bar.
    const FILTER_FIELDS: &'static [&'static str];

    const DEFAULT_PAGE_SIZE: u32;

    /// Whether create, update and delete are offered.
    const EDITABLE: bool;

    /// Server-assigned identifier.
    fn id(&self) -> i64;
}
