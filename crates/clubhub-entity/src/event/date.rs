//! Lenient event date parsing.
//!
//! Clients send RFC 3339 timestamps, bare local timestamps, or plain
//! calendar dates. Anything without an offset is read as UTC, and a plain
//! date is midnight of that day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse an event date in any of the accepted forms.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `deserialize_with` target for optional date fields. `null` and a missing
/// field both read as `None`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => parse(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::invalid_value(Unexpected::Str(&raw), &"a date")),
        Some(Value::Bool(b)) => Err(D::Error::invalid_type(Unexpected::Bool(b), &"a date")),
        Some(Value::Number(_)) => Err(D::Error::invalid_type(Unexpected::Other("number"), &"a date")),
        Some(Value::Array(_)) => Err(D::Error::invalid_type(Unexpected::Seq, &"a date")),
        Some(Value::Object(_)) => Err(D::Error::invalid_type(Unexpected::Map, &"a date")),
    }
}
