//! Decoder for JSON object documents.

use serde_json::Value;

use crate::error::ParseError;
use crate::registry::RawValue;
use crate::sources::decoder::Decoder;

/// Emits one pair per top-level member, keeping JSON scalars native.
/// Arrays and nested objects are passed on as their JSON text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    fn decode(&self, content: &[u8]) -> Result<Vec<(String, RawValue)>, ParseError> {
        let document: Value = serde_json::from_slice(content)?;
        let members = match document {
            Value::Object(members) => members,
            other => return Err(ParseError::NotAnObject(kind(&other))),
        };
        Ok(members
            .into_iter()
            .map(|(key, value)| (key, raw_value(value)))
            .collect())
    }
}

fn raw_value(value: Value) -> RawValue {
    match value {
        Value::Null => RawValue::Null,
        Value::Bool(b) => RawValue::Boolean(b),
        Value::String(s) => RawValue::Text(s),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                RawValue::Integer(i)
            } else if n.is_f64() {
                n.as_f64().map(RawValue::Float).unwrap_or(RawValue::Text(n.to_string()))
            } else {
                // u64 beyond i64 range
                RawValue::Text(n.to_string())
            }
        }
        composite @ (Value::Array(_) | Value::Object(_)) => RawValue::Text(composite.to_string()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
