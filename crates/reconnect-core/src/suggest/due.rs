//! Due evaluation.

use chrono::{DateTime, Utc};

use crate::contact::Contact;
use crate::time::days_elapsed;

/// Whether `contact` should be reached out to at `now`.
///
/// Contacts with no readable last-contact time are always due. Otherwise the
/// contact is due once at least `frequency_days` whole days have passed; the
/// boundary day counts.
pub fn is_due(contact: &Contact, now: DateTime<Utc>) -> bool {
    match contact.last_contacted_at.instant() {
        None => true,
        Some(last) => days_elapsed(last, now) >= i64::from(contact.frequency_days),
    }
}
