//! Overdue scoring.
//!
//! Scores order contacts from most to least in need of outreach. A contact
//! that has never been reached sits above every numeric score.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::contact::Contact;
use crate::time::days_elapsed;

/// How overdue a contact is. Larger is more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverdueScore {
    /// Whole days past the desired frequency. Zero is on schedule, negative
    /// is not yet due.
    Days(i64),
    /// No readable last-contact time.
    NeverContacted,
}

impl Ord for OverdueScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (OverdueScore::NeverContacted, OverdueScore::NeverContacted) => Ordering::Equal,
            (OverdueScore::NeverContacted, OverdueScore::Days(_)) => Ordering::Greater,
            (OverdueScore::Days(_), OverdueScore::NeverContacted) => Ordering::Less,
            (OverdueScore::Days(a), OverdueScore::Days(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for OverdueScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Days go out as a number, never-contacted as null.
impl Serialize for OverdueScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OverdueScore::Days(d) => serializer.serialize_some(d),
            OverdueScore::NeverContacted => serializer.serialize_none(),
        }
    }
}

/// Score `contact` at `now`: days elapsed since last contact minus the
/// contact's frequency.
pub fn overdue_score(contact: &Contact, now: DateTime<Utc>) -> OverdueScore {
    match contact.last_contacted_at.instant() {
        None => OverdueScore::NeverContacted,
        Some(last) => {
            OverdueScore::Days(days_elapsed(last, now) - i64::from(contact.frequency_days))
        }
    }
}

/// Stable descending sort by score. Equal scores keep their input order.
pub fn rank<T>(items: &mut [(T, OverdueScore)]) {
    items.sort_by(|a, b| b.1.cmp(&a.1));
}
