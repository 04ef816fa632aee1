//! Value encode/decode policy.
//!
//! Encode: JSON strings are stored verbatim, everything else as compact
//! JSON text. Decode: try to parse the text as JSON and fall back to the raw
//! string when that fails. No richer type inference is attempted, so a
//! stored string that happens to be valid JSON (`"42"`, `"true"`) reads back
//! as that JSON value.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Encode `value` into the plaintext that gets encrypted.
pub fn encode_value<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    match serde_json::to_value(value)? {
        Value::String(text) => Ok(text),
        other => Ok(serde_json::to_string(&other)?),
    }
}

/// Decode decrypted plaintext.
///
/// With `state_management_use` the text is handed back untouched for callers
/// that do their own deserialization.
pub fn decode_value(text: String, state_management_use: bool) -> Value {
    if state_management_use {
        return Value::String(text);
    }

    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => Value::String(text),
    }
}
