//! Timestamp boundary and whole-day arithmetic.
//!
//! Stored `last_contacted_at` values are parsed exactly once, when a row is
//! read, into a [`Timestamp`]. Everything downstream works with instants or
//! with the explicit absence of one.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SECONDS_PER_DAY: i64 = 86_400;

/// When a contact was last reached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Timestamp {
    /// A readable instant.
    Known(DateTime<Utc>),
    /// No contact has been recorded.
    #[default]
    Never,
    /// A stored value that could not be parsed. Ranked like `Never`.
    Malformed(String),
}

impl Timestamp {
    /// Parse a stored column value. `None` and blank strings are `Never`.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Timestamp::Never;
        };

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Timestamp::Known(dt.with_timezone(&Utc));
        }
        // Naive ISO datetimes are read as UTC.
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Timestamp::Known(naive.and_utc());
        }

        tracing::warn!(value = raw, "unparseable last_contacted_at, treating as never contacted");
        Timestamp::Malformed(raw.to_string())
    }

    /// The instant, if one is known.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Known(dt) => Some(*dt),
            Timestamp::Never | Timestamp::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Timestamp::Malformed(_))
    }

    /// Value written back to storage. Malformed input is preserved verbatim.
    pub fn to_storage(&self) -> Option<String> {
        match self {
            Timestamp::Known(dt) => Some(format_storage(*dt)),
            Timestamp::Never => None,
            Timestamp::Malformed(raw) => Some(raw.clone()),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::Known(dt)
    }
}

impl From<Option<DateTime<Utc>>> for Timestamp {
    fn from(dt: Option<DateTime<Utc>>) -> Self {
        dt.map_or(Timestamp::Never, Timestamp::Known)
    }
}

// Serialized as an RFC 3339 string or null; malformed values go out as null.
impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.instant().serialize(serializer)
    }
}

// Caller input is an RFC 3339 string or null; there is no malformed form.
impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<DateTime<Utc>>::deserialize(deserializer).map(Timestamp::from)
    }
}

/// Fixed-width RFC 3339 in UTC, so stored values sort lexically.
pub fn format_storage(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored RFC 3339 column that is expected to be well formed.
pub fn parse_storage(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Whole days elapsed from `since` to `now`, floored.
///
/// 23h59m counts as zero days; a `since` in the future gives a negative count.
pub fn days_elapsed(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - since).num_seconds().div_euclid(SECONDS_PER_DAY)
}
