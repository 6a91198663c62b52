use serde::{Deserialize, Serialize};

use crate::resource::{Column, Resource};

/// A bot user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_dttm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_dttm: Option<String>,
}

impl Resource for User {
    const PATH: &'static str = "users";
    const TITLE: &'static str = "Users";
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "ID", 12),
        Column::new("username", "Username", 16),
        Column::new("first_name", "First name", 16),
        Column::new("create_dttm", "Created", 16),
        Column::new("update_dttm", "Updated", 16),
    ];
    const WRITABLE_FIELDS: &'static [&'static str] = &[];
    const FILTER_FIELDS: &'static [&'static str] = &["username"];
    const DEFAULT_PAGE_SIZE: u32 = 10;
    const EDITABLE: bool = false;

    fn id(&self) -> i64 {
        self.id
    }
}
