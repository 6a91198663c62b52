use serde::{Deserialize, Serialize};

use crate::resource::{Column, Resource};

/// A key/value runtime setting of the bot backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Setting {
    pub id: i64,
    pub key: String,
    pub name: String,
    pub description: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_dttm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_dttm: Option<String>,
}

impl Resource for Setting {
    const PATH: &'static str = "settings";
    const TITLE: &'static str = "Settings";
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "ID", 6),
        Column::new("key", "Key", 16),
        Column::new("name", "Name", 16),
        Column::new("description", "Description", 24),
        Column::new("value", "Value", 16),
        Column::new("create_dttm", "Created", 16),
        Column::new("update_dttm", "Updated", 16),
    ];
    const WRITABLE_FIELDS: &'static [&'static str] = &["key", "name", "description", "value"];
    const FILTER_FIELDS: &'static [&'static str] = &["key"];
    const DEFAULT_PAGE_SIZE: u32 = 20;
    const EDITABLE: bool = true;

    fn id(&self) -> i64 {
        self.id
    }
}
