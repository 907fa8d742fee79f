//! Tolerant field readers for raw form input and historical log lines.
//!
//! A malformed field never fails the surrounding record: it reads as unset.
//! The `deserialize_*` functions wrap the same readers for use with
//! `#[serde(deserialize_with = "...")]`.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

use crate::level::CtasLevel;

/// Read a finite number from a JSON number or a numeric string.
pub fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// Read a categorical value through its `FromStr` impl. Non-strings and
/// unrecognized strings are unset.
pub fn category<T: FromStr>(value: &Value) -> Option<T> {
    value.as_str().and_then(|s| s.trim().parse().ok())
}

/// Read a yes/no flag. Only `true`, "yes" and "true" count as set.
pub fn flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("true")
        }
        _ => false,
    }
}

/// Read free text. Numbers are rendered, arrays of strings are joined with
/// ", ", anything else is empty.
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

/// Read an explicit CTAS level from an integral number or numeric string.
pub fn level(value: &Value) -> Option<CtasLevel> {
    let n = number(value)?;
    if n.fract() != 0.0 {
        return None;
    }
    CtasLevel::from_i64(n as i64).ok()
}

pub fn deserialize_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(number))
}

pub fn deserialize_category<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(category))
}

pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().is_some_and(flag))
}

pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().map(text).unwrap_or_default())
}

/// Like [`deserialize_level`], but the level is required: a missing or
/// unreadable value fails the record.
pub fn deserialize_required_level<'de, D>(deserializer: D) -> Result<CtasLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    level(&raw).ok_or_else(|| de::Error::custom(format!("invalid CTAS level: {raw}")))
}

pub fn deserialize_level<'de, D>(deserializer: D) -> Result<Option<CtasLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(level))
}
