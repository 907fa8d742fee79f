//! Serde adapter for record timestamps.
//!
//! Records carry a local civil date-time. Older log lines were written with a
//! space between date and time (`2024-03-02 14:05:09.123456`); both that form
//! and the ISO `T` form are accepted on read. Writes always use the ISO form.

use jiff::civil::DateTime;
use serde::{Deserialize, Deserializer, Serializer, de};

/// Current local wall-clock time.
pub fn now() -> DateTime {
    jiff::Zoned::now().datetime()
}

pub fn parse(raw: &str) -> Result<DateTime, jiff::Error> {
    let trimmed = raw.trim();
    match trimmed.parse::<DateTime>() {
        Ok(dt) => Ok(dt),
        Err(err) => match trimmed.split_once(' ') {
            Some((date, time)) => format!("{date}T{}", time.trim()).parse(),
            None => Err(err),
        },
    }
}

pub fn serialize<S>(value: &DateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(de::Error::custom)
}
