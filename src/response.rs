//! Typed view over the response envelope returned by every API method.

use crate::Result;
use serde::Deserialize;
use serde_json::Value;

/// The envelope the API answers with.
///
/// Every field is optional on the wire; absent fields take their default.
/// `errors` and friends are usually lists of strings, but some methods
/// answer with a mapping of code to message, so they are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Value,
    pub errors: Value,
    pub warnings: Value,
    pub info: Value,
    pub message_codes: Value,
    pub error_codes: Value,
    pub warning_codes: Value,
    pub info_codes: Value,
}

impl ApiResponse {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Items of `data`, or an empty slice when `data` is not a list.
    pub fn items(&self) -> &[Value] {
        self.data.as_array().map(Vec::as_slice).unwrap_or_default()
    }

    /// The first `limit` items of `data`.
    pub fn take_data(&self, limit: usize) -> Vec<Value> {
        self.items().iter().take(limit).cloned().collect()
    }

    /// `Ref` of the first data item.
    pub fn first_ref(&self) -> Option<&str> {
        self.items().first().and_then(|item| item.get("Ref")).and_then(Value::as_str)
    }

    /// Error messages, whether the API sent them as a list or a mapping.
    pub fn error_messages(&self) -> Vec<String> {
        messages(&self.errors)
    }

    pub fn warning_messages(&self) -> Vec<String> {
        messages(&self.warnings)
    }
}

/// `Ref` of the first item of a raw response's `data`.
///
/// Handy inside `prepare_next` of a [`crate::Chain`].
pub fn first_ref(response: &Value) -> Option<&str> {
    response
        .get("data")
        .and_then(Value::as_array)
        .and_then(|data| data.first())
        .and_then(|item| item.get("Ref"))
        .and_then(Value::as_str)
}

fn messages(value: &Value) -> Vec<String> {
    let text = |v: &Value| match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    match value {
        Value::Array(items) => items.iter().map(text).collect(),
        Value::Object(map) => map.values().map(text).collect(),
        Value::String(s) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}
