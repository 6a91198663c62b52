use serde::{Deserialize, Serialize};

use crate::resource::{Column, Resource};

/// A contact link shown to bot users, ordered by `sequence_number`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub sequence_number: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_dttm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_dttm: Option<String>,
}

impl Resource for Contact {
    const PATH: &'static str = "contacts";
    const TITLE: &'static str = "Contacts";
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "ID", 6),
        Column::new("title", "Title", 20),
        Column::new("url", "URL", 30),
        Column::new("sequence_number", "Order", 6),
    ];
    const WRITABLE_FIELDS: &'static [&'static str] = &["title", "url", "sequence_number"];
    const FILTER_FIELDS: &'static [&'static str] = &[];
    const DEFAULT_PAGE_SIZE: u32 = 50;
    const EDITABLE: bool = true;

    fn id(&self) -> i64 {
        self.id
    }
}
