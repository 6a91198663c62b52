use serde::{Deserialize, Serialize};

use crate::resource::{Column, Resource};

/// A paid subscription of a user to a tariff.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    pub id: i64,
    pub user_id: i64,
    pub tariff_id: i64,
    pub subscription_end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_dttm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_dttm: Option<String>,
}

impl Resource for Subscription {
    const PATH: &'static str = "subscription";
    const TITLE: &'static str = "Subscriptions";
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "ID", 6),
        Column::new("user_id", "User", 10),
        Column::new("tariff_id", "Tariff", 8),
        Column::new("subscription_end", "Ends", 16),
        Column::new("create_dttm", "Created", 16),
        Column::new("update_dttm", "Updated", 16),
    ];
    const WRITABLE_FIELDS: &'static [&'static str] = &[];
    const FILTER_FIELDS: &'static [&'static str] = &["user_id", "tariff_id"];
    const DEFAULT_PAGE_SIZE: u32 = 20;
    const EDITABLE: bool = false;

    fn id(&self) -> i64 {
        self.id
    }
}
