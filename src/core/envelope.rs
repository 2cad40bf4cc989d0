//! The common `{data, error_code, error_description}` response envelope and the
//! upstream error detection applied to every Xueqiu payload.

use crate::core::XqError;
use crate::core::wire::{Extra, value_i64, value_string};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const ENVELOPE_KEYS: [&str; 4] = ["data", "error_code", "code", "success"];

/// Common Xueqiu response envelope.
///
/// Most endpoints answer `{"data": ..., "error_code": 0, "error_description": ...}`,
/// some use `{"code", "message", "success"}`, and a few return a bare object or
/// list. Bare payloads are wrapped so that `data` always holds the useful part.
/// Keys outside the envelope are kept in `extra`.
#[derive(Debug, Clone, Serialize)]
pub struct XueqiuResponse<T> {
    pub data: Option<T>,
    pub error_code: i64,
    pub error_description: Option<String>,
    pub success: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl<T> XueqiuResponse<T> {
    /// `success` when the server sent it, otherwise `error_code == 0`.
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(self.error_code == 0)
    }

    /// Consume the envelope, keeping only the payload.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T: DeserializeOwned> XueqiuResponse<T> {
    /// Build an envelope from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Fails when `data` does not decode into `T`.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let mut map = match value {
            Value::Object(map) if ENVELOPE_KEYS.iter().any(|k| map.contains_key(*k)) => map,
            other => {
                return Ok(Self {
                    data: decode_data(other)?,
                    error_code: 0,
                    error_description: None,
                    success: None,
                    extra: Extra::new(),
                });
            }
        };

        let data = decode_data(map.remove("data").unwrap_or(Value::Null))?;
        let code_key = if map.contains_key("error_code") { "error_code" } else { "code" };
        let error_code = map
            .remove(code_key)
            .as_ref()
            .and_then(value_i64)
            .unwrap_or(0);
        let desc_key = if map.contains_key("error_description") {
            "error_description"
        } else {
            "message"
        };
        let error_description = map.remove(desc_key).as_ref().and_then(value_string);
        let success = match map.remove("success") {
            Some(Value::Bool(b)) => Some(b),
            _ => None,
        };

        Ok(Self {
            data,
            error_code,
            error_description,
            success,
            extra: map,
        })
    }
}

fn decode_data<T: DeserializeOwned>(value: Value) -> Result<Option<T>, serde_json::Error> {
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value).map(Some)
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for XueqiuResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

/// Raise [`XqError::Api`] when the payload's envelope reports an error.
///
/// Two styles are recognized. With an `error_code` key, any non-zero code is an
/// error (a code that does not parse as an integer is ignored). Otherwise, with a
/// `success` key, `false` is an error carrying `code` and `message`.
/// Non-object payloads are never errors.
pub fn check_api_error(payload: &Value, method: &str, url: &str) -> Result<(), XqError> {
    let Some(map) = payload.as_object() else {
        return Ok(());
    };

    let fail = |code: i64, description: Option<String>| XqError::Api {
        code,
        description,
        method: method.to_string(),
        url: url.to_string(),
        payload: Box::new(payload.clone()),
    };

    if let Some(raw) = map.get("error_code") {
        let Some(code) = lenient_code(raw) else {
            return Ok(());
        };
        if code == 0 {
            return Ok(());
        }
        let description = map.get("error_description").and_then(value_string);
        return Err(fail(code, description));
    }

    if let Some(Value::Bool(false)) = map.get("success") {
        let code = map.get("code").and_then(lenient_code).unwrap_or(0);
        let description = map.get("message").and_then(value_string);
        return Err(fail(code, description));
    }

    Ok(())
}

/// Falsy values count as zero; `None` means "not an integer at all".
#[allow(clippy::cast_possible_truncation)]
fn lenient_code(value: &Value) -> Option<i64> {
    match value {
        Value::Null => Some(0),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) if s.is_empty() => Some(0),
        Value::String(s) => s.trim().parse().ok(),
        Value::Array(a) if a.is_empty() => Some(0),
        Value::Object(o) if o.is_empty() => Some(0),
        _ => None,
    }
}
