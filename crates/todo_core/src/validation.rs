//! Request payload validation.
//!
//! # Responsibility
//! - Turn raw request bodies into typed payloads before any repository call.
//! - Report missing or mistyped fields with a stable error value.
//!
//! # Invariants
//! - Only presence and JSON type are checked; values are not otherwise
//!   constrained.
//! - Unknown fields are ignored.

use crate::model::item::Item;
use crate::model::todo_list::{TodoList, TodoListId};
use crate::model::UNASSIGNED_ID;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body was empty or whitespace only.
    EmptyBody,
    /// Body is not valid JSON.
    MalformedJson(String),
    /// A required field is absent or `null`.
    MissingField(&'static str),
    /// A field is present with the wrong JSON type.
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBody => write!(f, "request body is required"),
            Self::MalformedJson(details) => write!(f, "request body is not valid JSON: {details}"),
            Self::MissingField(field) => write!(f, "field `{field}` is required"),
            Self::InvalidField { field, reason } => write!(f, "field `{field}`: {reason}"),
        }
    }
}

impl Error for ValidationError {}

/// Validated body of a list create/replace request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListPayload {
    pub id: Option<TodoListId>,
    pub name: Option<String>,
}

impl TodoListPayload {
    /// Converts into a list record; an absent id becomes unassigned.
    pub fn into_list(self) -> TodoList {
        TodoList {
            id: self.id.unwrap_or(UNASSIGNED_ID),
            name: self.name,
            items: Vec::new(),
        }
    }
}

/// Validated body of an item create/update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPayload {
    pub name: String,
    pub done: bool,
}

impl ItemPayload {
    /// Converts into an unsaved item record.
    pub fn into_item(self) -> Item {
        Item {
            id: UNASSIGNED_ID,
            name: self.name,
            done: self.done,
        }
    }
}

/// Parses a list body: `{"id"?: int, "name"?: string, "items"?: ignored}`.
pub fn parse_todo_list_payload(body: &[u8]) -> Result<TodoListPayload, ValidationError> {
    let object = parse_object(body)?;
    Ok(TodoListPayload {
        id: optional_i64(&object, "id")?,
        name: optional_string(&object, "name")?,
    })
}

/// Parses an item body: `{"name": string, "done"?: bool, "id"?: ignored}`.
pub fn parse_item_payload(body: &[u8]) -> Result<ItemPayload, ValidationError> {
    let object = parse_object(body)?;
    let name = optional_string(&object, "name")?.ok_or(ValidationError::MissingField("name"))?;
    let done = optional_bool(&object, "done")?.unwrap_or(false);
    Ok(ItemPayload { name, done })
}

fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::EmptyBody);
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(ValidationError::InvalidField {
            field: "body",
            reason: "expected a JSON object",
        }),
        Err(err) => Err(ValidationError::MalformedJson(err.to_string())),
    }
}

fn optional_i64(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<i64>, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or(ValidationError::InvalidField {
            field,
            reason: "expected an integer",
        }),
    }
}

fn optional_string(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(ValidationError::InvalidField {
            field,
            reason: "expected a string",
        }),
    }
}

fn optional_bool(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<bool>, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(ValidationError::InvalidField {
            field,
            reason: "expected a boolean",
        }),
    }
}
