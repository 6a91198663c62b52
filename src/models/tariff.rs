use serde::{Deserialize, Serialize};

use crate::resource::{Column, Resource};

/// A purchasable subscription plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tariff {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub days_count: i64,
    pub price: i64,
    /// How many saved filters the plan allows.
    pub filters_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_dttm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_dttm: Option<String>,
}

impl Resource for Tariff {
    const PATH: &'static str = "tariffs";
    const TITLE: &'static str = "Tariffs";
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "ID", 6),
        Column::new("name", "Name", 16),
        Column::new("description", "Description", 30),
        Column::new("days_count", "Days", 6),
        Column::new("price", "Price", 10),
        Column::new("filters_count", "Filters", 8),
    ];
    const WRITABLE_FIELDS: &'static [&'static str] =
        &["name", "description", "days_count", "price", "filters_count"];
    const FILTER_FIELDS: &'static [&'static str] = &[];
    const DEFAULT_PAGE_SIZE: u32 = 50;
    const EDITABLE: bool = true;

    fn id(&self) -> i64 {
        self.id
    }
}
