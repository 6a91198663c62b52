use serde::{Deserialize, Serialize};

use crate::resource::{Column, Resource};

/// A car listing scraped from the source marketplace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Car {
    pub id: i64,
    pub manufacture_id: i64,
    pub model_id: i64,
    pub series_id: i64,
    pub equipment_id: i64,
    pub engine_type_id: i64,
    pub car_color_id: i64,
    pub mileage: i64,
    pub price_won: i64,
    pub price_rub: i64,
    pub date_release: String,
    pub publication_dttm: String,
    pub check_dttm: String,
    pub change_ownership: i64,
    pub all_traffic_accident: i64,
    pub traffic_accident_owner: i64,
    pub traffic_accident_other: i64,
    pub repair_cost_owner: Option<i64>,
    pub repair_cost_other: Option<i64>,
    pub theft: i64,
    pub flood: i64,
    pub death: i64,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_dttm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_dttm: Option<String>,
}

impl Resource for Car {
    const PATH: &'static str = "car";
    const TITLE: &'static str = "Cars";
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "ID", 6),
        Column::new("mileage", "Mileage", 10),
        Column::new("price_won", "Price (₩)", 12),
        Column::new("price_rub", "Price (₽)", 12),
        Column::new("date_release", "Released", 16),
        Column::new("url", "Link", 30),
    ];
    const WRITABLE_FIELDS: &'static [&'static str] = &[];
    const FILTER_FIELDS: &'static [&'static str] =
        &["manufacture_id", "model_id", "series_id", "car_color_id"];
    const DEFAULT_PAGE_SIZE: u32 = 50;
    const EDITABLE: bool = false;

    fn id(&self) -> i64 {
        self.id
    }
}
