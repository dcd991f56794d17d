//! Specifies how to serialize a [time::PrimitiveDateTime] as an ISO 8601 local
//! date-time without an offset, e.g. "2023-05-15T10:30:00".
//!
//! The default serde representation for [time::PrimitiveDateTime] is not ISO
//! 8601, so records use this module via `#[serde(with = "crate::datetime")]`.

use serde::{Deserialize, Deserializer, Serializer};
use time::{
    PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

/// Date time format for record dates, e.g. "2023-05-15T10:30:00".
pub const DATE_TIME_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

pub fn serialize<S>(dt: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = dt
        .format(DATE_TIME_FORMAT)
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    PrimitiveDateTime::parse(&s, DATE_TIME_FORMAT).map_err(serde::de::Error::custom)
}
