//! Method properties: the request-specific payload sent under `methodProperties`.
//!
//! Values are normalized on insertion through [`IntoProperty`]:
//! - `None` and JSON `null` are dropped, the key never reaches the wire;
//! - scalars are sent as strings (booleans as `"1"`/`"0"`, the API's flag convention);
//! - lists and maps are passed through unchanged.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Method properties for one API call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Properties(Map<String, Value>);

impl Properties {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Absent values are skipped.
    pub fn with(mut self, key: &str, value: impl IntoProperty) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, replacing any previous value under `key`.
    ///
    /// Returns `false` when the value was absent and nothing was stored.
    pub fn insert(&mut self, key: &str, value: impl IntoProperty) -> bool {
        match value.into_property() {
            Some(value) => {
                self.0.insert(key.to_string(), value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the set and return the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Properties> for Value {
    fn from(props: Properties) -> Self {
        Value::Object(props.0)
    }
}

/// Conversion of an argument into a method property value.
///
/// `None` means "omit this key".
pub trait IntoProperty {
    fn into_property(self) -> Option<Value>;
}

impl IntoProperty for &str {
    fn into_property(self) -> Option<Value> {
        Some(Value::String(self.to_string()))
    }
}

impl IntoProperty for String {
    fn into_property(self) -> Option<Value> {
        Some(Value::String(self))
    }
}

impl IntoProperty for &String {
    fn into_property(self) -> Option<Value> {
        Some(Value::String(self.clone()))
    }
}

impl IntoProperty for bool {
    fn into_property(self) -> Option<Value> {
        Some(Value::String(flag(self)))
    }
}

macro_rules! stringified {
    ($($ty:ty),*) => {
        $(
            impl IntoProperty for $ty {
                fn into_property(self) -> Option<Value> {
                    Some(Value::String(self.to_string()))
                }
            }
        )*
    };
}

stringified!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: IntoProperty> IntoProperty for Option<T> {
    fn into_property(self) -> Option<Value> {
        self.and_then(IntoProperty::into_property)
    }
}

impl IntoProperty for Value {
    fn into_property(self) -> Option<Value> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(Value::String(flag(b))),
            Value::Number(n) => Some(Value::String(n.to_string())),
            other => Some(other),
        }
    }
}

impl IntoProperty for Map<String, Value> {
    fn into_property(self) -> Option<Value> {
        Some(Value::Object(self))
    }
}

impl<V: Into<Value>> IntoProperty for HashMap<String, V> {
    fn into_property(self) -> Option<Value> {
        Some(Value::Object(
            self.into_iter().map(|(k, v)| (k, v.into())).collect(),
        ))
    }
}

impl<T: Into<Value>> IntoProperty for Vec<T> {
    fn into_property(self) -> Option<Value> {
        Some(Value::Array(self.into_iter().map(Into::into).collect()))
    }
}

impl<T: Clone + Into<Value>> IntoProperty for &[T] {
    fn into_property(self) -> Option<Value> {
        Some(Value::Array(self.iter().cloned().map(Into::into).collect()))
    }
}

fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}
