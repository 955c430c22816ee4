use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned letter identifier
pub type LetterId = i64;

/// A single received letter as returned by the backend table
///
/// Letters are immutable once fetched. `created_at` is kept as the raw
/// ISO-8601 string so that a malformed value survives the round trip and
/// can be ordered deterministically (see [`SortableLetter`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Letter {
    pub id: LetterId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub receiver: String,
    pub created_at: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Letter {
    pub fn new(id: LetterId, receiver: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id,
            receiver: receiver.into(),
            created_at: created_at.into(),
        }
    }

    /// Parsed creation time, `None` when the stored value is not a timestamp
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Whether the letter arrived within `window` before `now`
    ///
    /// Unparsable and future timestamps are never recent.
    pub fn is_recent(&self, now: DateTime<Utc>, window: TimeDelta) -> bool {
        match self.created_at_utc() {
            Some(created_at) if created_at <= now => now - created_at < window,
            _ => false,
        }
    }

    /// String value of a backend column, used to evaluate equality filters
    pub fn column(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.to_string()),
            "receiver" => Some(self.receiver.clone()),
            "created_at" => Some(self.created_at.clone()),
            _ => None,
        }
    }
}

/// Route of the letter reader for a mailbox
pub fn read_route(id: LetterId) -> String {
    format!("/receivedRead/{id}")
}

/// Parse the timestamp formats the backend is known to emit
///
/// Values without an offset are read as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Sort key for letters: creation time first, id second
///
/// Unparsable timestamps are `None`, which orders before every real
/// timestamp, so a descending sort puts them last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortableLetter {
    pub created_at: Option<DateTime<Utc>>,
    pub id: LetterId,
}

impl SortableLetter {
    pub fn from_letter(letter: &Letter) -> Self {
        Self {
            created_at: letter.created_at_utc(),
            id: letter.id,
        }
    }
}

impl PartialOrd for SortableLetter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortableLetter {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.created_at.cmp(&other.created_at) {
            Ordering::Equal => self.id.cmp(&other.id),
            other => other,
        }
    }
}
