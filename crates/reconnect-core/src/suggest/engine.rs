//! Suggestion engine.
//!
//! Ranks the full contact set, prefers contacts that are due, and cuts the
//! list to the count for the active mode. Nothing is cached: every call
//! works from the snapshot it is given.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::due::is_due;
use super::scoring::{overdue_score, rank, OverdueScore};
use super::source::ContactSource;
use crate::contact::Contact;
use crate::error::Result;
use crate::settings::{Mode, Settings};
use crate::time::days_elapsed;

/// Optional per-request overrides of the stored settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub mode: Option<Mode>,
    pub count: Option<usize>,
}

impl SuggestionRequest {
    pub fn new(mode: Option<Mode>, count: Option<usize>) -> Self {
        Self { mode, count }
    }

    /// Mode and count after falling back to `settings`.
    pub fn resolve(&self, settings: &Settings) -> (Mode, usize) {
        let mode = self.mode.unwrap_or(settings.mode);
        let count = self
            .count
            .unwrap_or_else(|| settings.count_for(mode) as usize);
        (mode, count)
    }
}

/// A contact picked for outreach, with the figures that placed it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(flatten)]
    pub contact: Contact,
    /// Whole days since the last contact; `None` when never contacted.
    pub days_since: Option<i64>,
    pub score: OverdueScore,
    pub due: bool,
    /// The stored last-contact time could not be read.
    pub timestamp_malformed: bool,
}

/// Pick contacts to reach out to.
///
/// Contacts are ranked by [`overdue_score`]. If any are due only those are
/// eligible, otherwise the whole ranked list is. The result holds at most
/// the resolved count. Duplicate ids keep their first occurrence.
pub fn suggest(
    contacts: Vec<Contact>,
    settings: &Settings,
    request: &SuggestionRequest,
    now: DateTime<Utc>,
) -> Vec<Suggestion> {
    let (mode, count) = request.resolve(settings);

    let mut seen = HashSet::with_capacity(contacts.len());
    let mut scored: Vec<(Contact, OverdueScore)> = contacts
        .into_iter()
        .filter(|c| seen.insert(c.id.clone()))
        .map(|c| {
            let score = overdue_score(&c, now);
            (c, score)
        })
        .collect();
    rank(&mut scored);

    let due_count = scored.iter().filter(|(c, _)| is_due(c, now)).count();
    let fallback = due_count == 0;
    tracing::debug!(
        %mode,
        count,
        total = scored.len(),
        due = due_count,
        fallback,
        "ranking contacts"
    );

    scored
        .into_iter()
        .map(|(contact, score)| {
            let due = is_due(&contact, now);
            (contact, score, due)
        })
        .filter(|(_, _, due)| fallback || *due)
        .take(count)
        .map(|(contact, score, due)| annotate(contact, score, due, now))
        .collect()
}

/// Read contacts and settings from `source` and rank them.
///
/// # Errors
/// Propagates read failures from the source.
pub fn get_suggestions<S: ContactSource + ?Sized>(
    source: &S,
    request: &SuggestionRequest,
    now: DateTime<Utc>,
) -> Result<Vec<Suggestion>> {
    let settings = source.get_settings()?;
    let contacts = source.list_contacts()?;
    Ok(suggest(contacts, &settings, request, now))
}

fn annotate(contact: Contact, score: OverdueScore, due: bool, now: DateTime<Utc>) -> Suggestion {
    let days_since = contact
        .last_contacted_at
        .instant()
        .map(|last| days_elapsed(last, now));
    let timestamp_malformed = contact.last_contacted_at.is_malformed();
    Suggestion {
        contact,
        days_since,
        score,
        due,
        timestamp_malformed,
    }
}
