//! Serde helpers for `LastUpdated` timestamps.
//!
//! Output is always RFC 3339. Input additionally accepts offset-less
//! `YYYY-MM-DDTHH:MM:SS[.fraction]` values, which are read as UTC.

use serde::{de, ser, Deserialize, Deserializer, Serializer};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

pub(crate) fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let text = value.format(&Rfc3339).map_err(ser::Error::custom)?;
    serializer.serialize_str(&text)
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) => parse_timestamp(&text).map_err(de::Error::custom),
        None => Ok(epoch()),
    }
}

/// Placeholder for records whose timestamp has not been assigned yet.
pub(crate) fn epoch() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

pub(crate) fn parse_timestamp(text: &str) -> Result<OffsetDateTime, time::error::Parse> {
    let trimmed = text.trim();
    if let Ok(value) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(value);
    }

    let without_offset =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    PrimitiveDateTime::parse(trimmed, without_offset).map(PrimitiveDateTime::assume_utc)
}
