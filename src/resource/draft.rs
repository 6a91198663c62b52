//! The working copy behind the create/edit dialog.

use serde_json::{Map, Value};

use super::Resource;
use crate::error::ResourceError;

/// What saving the draft will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit { id: i64 },
}

/// A dialog's working copy of an item.
///
/// Edits go through [`EditDraft::set_field`], which only accepts writable
/// fields and keeps the JSON type of the value it replaces.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft<R> {
    pub mode: DraftMode,
    pub item: R,
    /// Last failed save or rejected field, shown inside the dialog.
    pub error: Option<String>,
    /// Field whose last edit was rejected. Saving is refused until it is
    /// edited again.
    pub invalid_field: Option<String>,
}

impl<R: Resource> EditDraft<R> {
    /// Blank draft for a new item.
    pub fn create() -> Self {
        Self {
            mode: DraftMode::Create,
            item: R::default(),
            error: None,
            invalid_field: None,
        }
    }

    /// Draft pre-filled from an existing item.
    pub fn edit(item: R) -> Self {
        Self {
            mode: DraftMode::Edit { id: item.id() },
            item,
            error: None,
            invalid_field: None,
        }
    }

    pub fn is_create(&self) -> bool {
        self.mode == DraftMode::Create
    }

    /// Replace one writable field from raw dialog text.
    ///
    /// On error the draft is left untouched.
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<(), ResourceError> {
        if !R::WRITABLE_FIELDS.contains(&name) {
            return Err(ResourceError::UnknownField {
                field: name.to_string(),
            });
        }

        let mut object = to_object(&self.item).map_err(|e| invalid(name, e.to_string()))?;
        let current = object.get(name).cloned().unwrap_or(Value::Null);
        let coerced = coerce(&current, raw).map_err(|message| invalid(name, message))?;
        object.insert(name.to_string(), coerced);

        let item: R =
            serde_json::from_value(Value::Object(object)).map_err(|e| invalid(name, e.to_string()))?;
        self.item = item;
        Ok(())
    }

    /// Writable fields with their current values as dialog text.
    pub fn field_values(&self) -> Vec<(&'static str, String)> {
        let object = to_object(&self.item).unwrap_or_default();
        R::WRITABLE_FIELDS
            .iter()
            .map(|field| {
                let text = object.get(*field).map(value_to_input).unwrap_or_default();
                (*field, text)
            })
            .collect()
    }
}

/// Request body for create and update: exactly the writable fields.
pub fn writable_payload<R: Resource>(item: &R) -> Result<Value, serde_json::Error> {
    let object = to_object(item)?;
    let payload: Map<String, Value> = R::WRITABLE_FIELDS
        .iter()
        .map(|field| {
            let value = object.get(*field).cloned().unwrap_or(Value::Null);
            (field.to_string(), value)
        })
        .collect();
    Ok(Value::Object(payload))
}

/// Dialog text for a JSON value.
pub fn value_to_input(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn to_object<R: Resource>(item: &R) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(item)? {
        Value::Object(object) => Ok(object),
        _ => Ok(Map::new()),
    }
}

fn invalid(field: &str, message: String) -> ResourceError {
    ResourceError::InvalidValue {
        field: field.to_string(),
        message,
    }
}

/// Parse `raw` into the JSON type of `current`.
fn coerce(current: &Value, raw: &str) -> Result<Value, String> {
    let trimmed = raw.trim();
    match current {
        Value::Number(n) if n.is_f64() => trimmed
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| format!("expected a number, got '{}'", raw)),
        Value::Number(_) => trimmed
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| format!("expected a whole number, got '{}'", raw)),
        Value::Bool(_) => match trimmed.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Value::Bool(true)),
            "false" | "no" | "0" => Ok(Value::Bool(false)),
            _ => Err(format!("expected yes or no, got '{}'", raw)),
        },
        Value::Null if trimmed.is_empty() => Ok(Value::Null),
        Value::Null => Ok(trimmed
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(raw.to_string()))),
        _ => Ok(Value::String(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Car, Contact, Tariff};

    fn tariff() -> Tariff {
        Tariff {
            id: 3,
            name: "Basic".to_string(),
            description: "One filter".to_string(),
            days_count: 30,
            price: 990,
            filters_count: 1,
            create_dttm: Some("2024-05-01T10:00:00".to_string()),
            update_dttm: None,
        }
    }

    #[test]
    fn test_edit_draft_keeps_id() {
        let draft = EditDraft::edit(tariff());
        assert_eq!(draft.mode, DraftMode::Edit { id: 3 });
        assert!(!draft.is_create());
        assert!(EditDraft::<Tariff>::create().is_create());
    }

    #[test]
    fn test_set_numeric_field() {
        let mut draft = EditDraft::edit(tariff());
        draft.set_field("price", " 1490 ").unwrap();
        assert_eq!(draft.item.price, 1490);
    }

    #[test]
    fn test_bad_number_leaves_draft_untouched() {
        let mut draft = EditDraft::edit(tariff());
        let err = draft.set_field("days_count", "thirty").unwrap_err();
        assert!(matches!(err, ResourceError::InvalidValue { .. }));
        assert_eq!(draft.item.days_count, 30);
    }

    #[test]
    fn test_non_writable_field_rejected() {
        let mut draft = EditDraft::edit(tariff());
        assert_eq!(
            draft.set_field("id", "99"),
            Err(ResourceError::UnknownField {
                field: "id".to_string()
            })
        );
        assert!(draft.set_field("create_dttm", "x").is_err());
        assert_eq!(draft.item.id, 3);
    }

    #[test]
    fn test_string_field_keeps_raw_text() {
        let mut draft = EditDraft::<Contact>::create();
        draft.set_field("title", "  Support ").unwrap();
        assert_eq!(draft.item.title, "  Support ");
    }

    #[test]
    fn test_payload_is_exactly_the_writable_set() {
        let payload = writable_payload(&tariff()).unwrap();
        let object = payload.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["days_count", "description", "filters_count", "name", "price"]
        );
        assert_eq!(object["description"], "One filter");
    }

    #[test]
    fn test_read_only_payload_is_empty() {
        let payload = writable_payload(&Car::default()).unwrap();
        assert!(payload.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_field_values_for_dialog() {
        let draft = EditDraft::edit(tariff());
        let values = draft.field_values();
        assert_eq!(values[0], ("name", "Basic".to_string()));
        assert_eq!(values[3], ("price", "990".to_string()));
    }

    #[test]
    fn test_coerce_bool_and_null() {
        assert_eq!(coerce(&Value::Bool(false), "yes"), Ok(Value::Bool(true)));
        assert!(coerce(&Value::Bool(false), "maybe").is_err());
        assert_eq!(coerce(&Value::Null, ""), Ok(Value::Null));
        assert_eq!(coerce(&Value::Null, "12"), Ok(Value::from(12)));
        assert_eq!(coerce(&Value::Null, "abc"), Ok(Value::from("abc")));
    }
}
