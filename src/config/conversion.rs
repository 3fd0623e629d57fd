// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use crate::parser::is_raw_block;
use crate::{Icinga2Error, Value};

/// Prefix marking a string that must bypass quoting entirely.
pub const UNPARSED_PREFIX: &str = "-:";

impl TryFrom<serde_json::Value> for Value {
    type Error = Icinga2Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Err(Icinga2Error::type_mismatch(
                "attrs",
                "null",
                "a value",
                "Null",
            )),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Value::Integer(i)),
                None => n.as_f64().map(Value::Number).ok_or_else(|| {
                    Icinga2Error::type_mismatch("attrs", n.to_string(), "a finite number", "Number")
                }),
            },
            serde_json::Value::String(s) => Ok(classify_string(s)),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| Value::try_from(v).map(|v| (k, v)))
                .collect::<Result<IndexMap<_, _>, _>>()
                .map(Value::Hash),
        }
    }
}

/// Decide whether an incoming string is a literal or raw Icinga2 syntax.
///
/// This is a heuristic on the shape of the text: `-:` disables parsing
/// (the prefix is dropped) and a whole-string `{{ ... }}` block is a
/// runtime lambda. Every other string stays a literal and is re-quoted
/// later against the constant set.
pub fn classify_string(s: String) -> Value {
    if let Some(raw) = s.strip_prefix(UNPARSED_PREFIX) {
        Value::Raw(raw.to_string())
    } else if is_raw_block(&s) {
        Value::Raw(s)
    } else {
        Value::String(s)
    }
}

/// Convert a JSON object into an attribute hash.
pub fn attributes_from_json(value: serde_json::Value) -> Result<IndexMap<String, Value>, Icinga2Error> {
    match Value::try_from(value)? {
        Value::Hash(map) => Ok(map),
        other => Err(Icinga2Error::type_mismatch(
            "attrs",
            other.describe(),
            "a Hash",
            other.type_name(),
        )),
    }
}
