use crate::error::FactoryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Construction-time options for a notification.
///
/// A plain string-to-string map. Each channel reads the keys it knows and
/// falls back to its own default for anything missing; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    options: HashMap<String, String>,
}

impl Configuration {
    /// An empty configuration: every channel uses its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or `default` when it is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Builds a configuration from a JSON object.
    ///
    /// Strings are taken as-is and numbers or booleans are stringified.
    /// Anything else (null, arrays, nested objects) is rejected.
    pub fn from_json(value: &Value) -> Result<Self, FactoryError> {
        let object = value
            .as_object()
            .ok_or_else(|| FactoryError::invalid_config("<root>", "expected a JSON object"))?;

        let mut options = HashMap::with_capacity(object.len());
        for (key, value) in object {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(FactoryError::invalid_config(
                        key,
                        format!("expected a string value, found {}", json_type_name(other)),
                    ));
                }
            };
            options.insert(key.clone(), text);
        }

        Ok(Self { options })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            options: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for Configuration {
    fn from(options: HashMap<String, String>) -> Self {
        Self { options }
    }
}
