use serde::Serializer;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

/// RFC 3339 in UTC, truncated to milliseconds
pub fn front_time<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = value.to_offset(UtcOffset::UTC);
    let value = value
        .replace_nanosecond(value.millisecond() as u32 * 1_000_000)
        .map_err(serde::ser::Error::custom)?;

    let formatted = value.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}
