use serde::{Deserialize, Serialize};

use crate::resource::{Column, Resource};

/// A saved search a user subscribed to.
///
/// The `_defore` spelling is the API's field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    pub id: i64,
    pub user_id: i64,
    pub manufacture_id: i64,
    pub model_id: i64,
    pub series_id: i64,
    pub equipment_id: i64,
    pub engine_type_id: i64,
    pub car_color_id: i64,
    pub mileage_from: i64,
    pub mileage_defore: i64,
    pub price_from: i64,
    pub price_defore: i64,
    pub date_release_from: String,
    pub date_release_defore: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_dttm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_dttm: Option<String>,
}

impl Resource for Filter {
    const PATH: &'static str = "filters";
    const TITLE: &'static str = "Filters";
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "ID", 6),
        Column::new("user_id", "User", 8),
        Column::new("manufacture_id", "Make", 6),
        Column::new("model_id", "Model", 6),
        Column::new("series_id", "Series", 6),
        Column::new("equipment_id", "Equip.", 6),
        Column::new("engine_type_id", "Engine", 6),
        Column::new("car_color_id", "Color", 6),
        Column::new("mileage_from", "Mileage from", 10),
        Column::new("mileage_defore", "Mileage to", 10),
        Column::new("price_from", "Price from", 10),
        Column::new("price_defore", "Price to", 10),
        Column::new("date_release_from", "Released from", 16),
        Column::new("date_release_defore", "Released to", 16),
        Column::new("create_dttm", "Created", 16),
        Column::new("update_dttm", "Updated", 16),
    ];
    const WRITABLE_FIELDS: &'static [&'static str] = &[];
    const FILTER_FIELDS: &'static [&'static str] = &["user_id", "manufacture_id"];
    const DEFAULT_PAGE_SIZE: u32 = 50;
    const EDITABLE: bool = false;

    fn id(&self) -> i64 {
        self.id
    }
}
