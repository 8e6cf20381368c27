use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Body the users API answers with when it rejects a payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationErrorResponse {
    pub timestamp: Option<NaiveDateTime>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    pub errors: Vec<FieldErrorDTO>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldErrorDTO {
    pub field: String,
    pub message: String,
}

impl ValidationErrorResponse {
    pub fn new(status: u16, error: &str, message: &str, path: &str) -> Self {
        Self {
            timestamp: None,
            status,
            error: error.into(),
            message: message.into(),
            path: path.into(),
            errors: Vec::new(),
        }
    }

    pub fn add_field_error(&mut self, field: &str, message: &str) {
        self.errors.push(FieldErrorDTO {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Messages for one field, in the order the server reported them
    pub fn field_messages<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }
}
