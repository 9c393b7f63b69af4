//! Outgoing request parameters

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::error::{TwistError, TwistResult};

/// Name/value pairs sent with a Twist API request
///
/// A key is present only if the caller supplied a value for it; null values
/// are never stored. Keys iterate in sorted order so the encoded query
/// string or form body is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams(BTreeMap<String, Value>);

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the fields of a tool argument struct
    ///
    /// `args` must serialize to a JSON object. `None` fields serialize to
    /// null and are dropped.
    pub fn from_args<T: Serialize>(args: &T) -> TwistResult<Self> {
        match serde_json::to_value(args).map_err(|e| TwistError::Params(e.to_string()))? {
            Value::Object(map) => Ok(Self(
                map.into_iter().filter(|(_, v)| !v.is_null()).collect(),
            )),
            other => Err(TwistError::Params(format!(
                "expected an object of named parameters, got {other}"
            ))),
        }
    }

    /// Set `key`; a null value removes it instead
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        match value.into() {
            Value::Null => {
                self.0.remove(&key);
            }
            value => {
                self.0.insert(key, value);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// The parameters as a JSON object
    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone().into_iter().collect())
    }

    /// Encode values for a query string or form body
    ///
    /// Strings go out verbatim, numbers and booleans in their JSON spelling,
    /// and arrays/objects as compact JSON text (the form Twist expects for
    /// id lists, attachments and actions). Lists are never expanded into
    /// repeated keys such as `ids=1&ids=2`.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| {
                let encoded = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), encoded)
            })
            .collect()
    }
}
