use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::MetadataError;

/// Bookkeeping metadata of the measurement itself
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Measurement {
    /// Name of the operator performing the measurement
    pub operator: String,

    /// Purpose of the measurement
    pub purpose: String,

    /// Reference to the corresponding labbook entry, usually a lab object
    /// identifier (`loi:...`)
    pub labbook_entry: String,

    /// Timestamp the measurement was started at.
    ///
    /// Sidecar files record the stamp as separate `date` (`YYYY-MM-DD`) and
    /// `time` (`HH:MM:SS`) fields. Both have to be present and non-empty for
    /// the stamp to parse; otherwise the field stays unset. Present but
    /// malformed content is an error.
    #[serde(
        serialize_with = "serialize_start",
        deserialize_with = "deserialize_start"
    )]
    pub start: Option<NaiveDateTime>,
}

/// Wire form of the start stamp in sidecar files
#[derive(Debug, Default, Serialize, Deserialize)]
struct StartStamp {
    #[serde(default)]
    date: String,
    #[serde(default)]
    time: String,
}

/// Combine sidecar `date` and `time` fields into a timestamp.
///
/// A blank date or time means the stamp was never recorded and yields
/// `Ok(None)`; content that is present but malformed is an error.
pub fn parse_start_stamp(date: &str, time: &str) -> Result<Option<NaiveDateTime>, MetadataError> {
    let (date, time) = (date.trim(), time.trim());
    if date.is_empty() || time.is_empty() {
        return Ok(None);
    }
    let date_parsed =
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|source| MetadataError::Timestamp {
            stamp: date.to_string(),
            source,
        })?;
    let time_parsed =
        NaiveTime::parse_from_str(time, "%H:%M:%S").map_err(|source| MetadataError::Timestamp {
            stamp: time.to_string(),
            source,
        })?;
    Ok(Some(NaiveDateTime::new(date_parsed, time_parsed)))
}

fn deserialize_start<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error> {
    let stamp = Option::<StartStamp>::deserialize(deserializer)?.unwrap_or_default();
    parse_start_stamp(&stamp.date, &stamp.time).map_err(D::Error::custom)
}

fn serialize_start<S: Serializer>(
    start: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let stamp = match start {
        Some(start) => StartStamp {
            date: start.date().to_string(),
            time: start.time().format("%H:%M:%S").to_string(),
        },
        None => StartStamp::default(),
    };
    stamp.serialize(serializer)
}
