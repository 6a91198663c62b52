//! Render-ready snapshots of a controller, and the intents flowing back.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use super::controller::{Phase, ResourceController};
use super::draft::value_to_input;
use super::{Column, Filters, Resource};
use crate::traits::HttpClient;

/// What the operator asked a table to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Reload the page currently shown.
    Load,
    PageChange(u32),
    NextPage,
    PrevPage,
    SubmitFilters(Filters),
    /// Change rows per page and go back to page 1.
    PageSize(u32),
    OpenCreate,
    OpenEdit(i64),
    EditField { name: String, value: String },
    Save,
    CancelEdit,
    RequestDelete(i64),
    ConfirmDelete,
    CancelDelete,
    /// Show a remembered page on first display.
    Restore(u32),
}

/// The create/edit dialog as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftView {
    pub title: String,
    pub is_create: bool,
    /// Writable fields and their current text, in dialog order.
    pub fields: Vec<(&'static str, String)>,
    pub error: Option<String>,
}

/// One table as the renderer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub path: &'static str,
    pub title: &'static str,
    pub editable: bool,
    pub columns: &'static [Column],
    pub rows: Vec<Vec<String>>,
    /// Item id of each row, same order as `rows`.
    pub row_ids: Vec<i64>,
    pub page: u32,
    pub pages: u32,
    pub total: u64,
    pub page_size: u32,
    pub phase: Phase,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: Filters,
    pub filter_fields: &'static [&'static str],
    pub draft: Option<DraftView>,
    pub pending_delete: Option<i64>,
}

impl TableView {
    /// Snapshot before the first load.
    pub fn empty<R: Resource>() -> Self {
        Self {
            path: R::PATH,
            title: R::TITLE,
            editable: R::EDITABLE,
            columns: R::COLUMNS,
            rows: Vec::new(),
            row_ids: Vec::new(),
            page: 1,
            pages: 0,
            total: 0,
            page_size: R::DEFAULT_PAGE_SIZE,
            phase: Phase::Idle,
            loading: false,
            error: None,
            filters: Filters::new(),
            filter_fields: R::FILTER_FIELDS,
            draft: None,
            pending_delete: None,
        }
    }

    pub fn from_controller<R: Resource, C: HttpClient + ?Sized>(
        controller: &ResourceController<R, C>,
    ) -> Self {
        let meta = controller.meta();
        let rows = controller.items().iter().map(row_cells::<R>).collect();
        let row_ids = controller.items().iter().map(R::id).collect();

        let draft = controller.draft().map(|draft| DraftView {
            title: if draft.is_create() {
                format!("New {}", singular(R::TITLE))
            } else {
                format!("Edit {} #{}", singular(R::TITLE), draft.item.id())
            },
            is_create: draft.is_create(),
            fields: draft.field_values(),
            error: draft.error.clone(),
        });

        Self {
            rows,
            row_ids,
            page: meta.page,
            pages: meta.pages,
            total: meta.total,
            page_size: controller.page_size(),
            phase: controller.phase(),
            loading: controller.is_loading(),
            error: controller.last_error().map(str::to_string),
            filters: controller.filters().clone(),
            draft,
            pending_delete: controller.pending_delete(),
            ..Self::empty::<R>()
        }
    }

    /// Row index showing item `id`.
    pub fn row_of(&self, id: i64) -> Option<usize> {
        self.row_ids.iter().position(|row_id| *row_id == id)
    }

    /// `page / pages · total`, as shown under the table.
    pub fn pagination_label(&self) -> String {
        format!("{} / {} · {}", self.page, self.pages.max(1), self.total)
    }
}

fn singular(title: &str) -> &str {
    match title {
        "Pay history" => "payment",
        "Settings" => "setting",
        "Tariffs" => "tariff",
        "Contacts" => "contact",
        other => other,
    }
}

fn row_cells<R: Resource>(item: &R) -> Vec<String> {
    let value = serde_json::to_value(item).unwrap_or(Value::Null);
    R::COLUMNS
        .iter()
        .map(|column| {
            value
                .get(column.field)
                .map(|v| format_cell(column.field, v))
                .unwrap_or_default()
        })
        .collect()
}

/// Display text for one cell.
///
/// Identifiers print as-is, other integers get digit grouping, booleans
/// read yes/no and timestamps shrink to minutes.
pub fn format_cell(field: &str, value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "yes".to_string(),
        Value::Bool(false) => "no".to_string(),
        Value::Number(n) if is_identifier(field) => n.to_string(),
        Value::Number(n) => match n.as_i64() {
            Some(i) => group_digits(i),
            None => n.to_string(),
        },
        Value::String(s) => format_timestamp(s).unwrap_or_else(|| s.replace('\n', " ")),
        other => value_to_input(other),
    }
}

fn is_identifier(field: &str) -> bool {
    field == "id" || field.ends_with("_id")
}

fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `YYYY-MM-DD HH:MM` for ISO-8601 timestamps, `YYYY-MM-DD` for dates.
fn format_timestamp(raw: &str) -> Option<String> {
    const MINUTES: &str = "%Y-%m-%d %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.format(MINUTES).to_string());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.format(MINUTES).to_string());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}
