use serde::{Deserialize, Serialize};

use crate::resource::{Column, Resource};

/// One payment attempt for a tariff.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayHistory {
    pub id: i64,
    pub user_id: i64,
    pub tariff_id: i64,
    pub price: i64,
    pub successfully: bool,
    /// Payment provider invoice, absent for failed attempts.
    pub intellect_invoice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_dttm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_dttm: Option<String>,
}

impl Resource for PayHistory {
    const PATH: &'static str = "payhistory";
    const TITLE: &'static str = "Pay history";
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "ID", 6),
        Column::new("user_id", "User", 10),
        Column::new("tariff_id", "Tariff", 8),
        Column::new("price", "Price", 10),
        Column::new("successfully", "Paid", 5),
        Column::new("intellect_invoice_id", "Invoice", 16),
        Column::new("create_dttm", "Created", 16),
        Column::new("update_dttm", "Updated", 16),
    ];
    const WRITABLE_FIELDS: &'static [&'static str] = &[];
    const FILTER_FIELDS: &'static [&'static str] = &["user_id", "tariff_id", "successfully"];
    const DEFAULT_PAGE_SIZE: u32 = 50;
    const EDITABLE: bool = false;

    fn id(&self) -> i64 {
        self.id
    }
}
