//! The part of a chat reply the widget reads.
//!
//! Only `response` is consumed. Other fields are ignored whatever their
//! type, and a non-string `response` is rendered as text instead of failing
//! the whole reply.

use moodchat_models::UNRESOLVED_PLACEHOLDER;
use serde_json::Value;

use crate::error::SdkError;

/// A decoded chat reply.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatReply {
    response: Option<Value>,
}

impl ChatReply {
    /// A reply carrying `text` as its response.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            response: Some(Value::String(text.into())),
        }
    }

    /// Extract the reply from a decoded JSON body.
    ///
    /// A body that is not an object has no `response` field. A `null` body
    /// has no fields at all and is rejected.
    pub fn from_body(body: Value) -> Result<Self, SdkError> {
        match body {
            Value::Null => Err(SdkError::UnexpectedBody("null".to_string())),
            Value::Object(mut fields) => Ok(Self {
                response: fields.remove("response"),
            }),
            _ => Ok(Self::default()),
        }
    }

    /// Raw `response` value, if the body had one.
    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    /// Text to render: strings as-is, other values in their script text
    /// form, [`UNRESOLVED_PLACEHOLDER`] when the field is absent.
    pub fn reply_text(&self) -> String {
        match &self.response {
            Some(value) => script_text(value),
            None => UNRESOLVED_PLACEHOLDER.to_string(),
        }
    }
}

/// String conversion of a JSON value as a browser script would do it.
fn script_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        // array elements that are null render empty
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => script_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
