//! Due-contact prioritization.
//!
//! Decides who to reach out to next:
//! - [`is_due`] says whether a single contact has gone past its frequency
//! - [`overdue_score`] orders contacts by how far past it they are
//! - [`suggest`] ranks a whole contact set and trims it to the mode's count
//!
//! All three are pure functions of the records and the `now` they are given.

mod due;
mod engine;
mod scoring;
mod source;

pub use due::is_due;
pub use engine::{get_suggestions, suggest, Suggestion, SuggestionRequest};
pub use scoring::{overdue_score, rank, OverdueScore};
pub use source::ContactSource;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, Utc};

    use crate::contact::{Contact, Relationship};
    use crate::time::Timestamp;

    pub fn contact(name: &str, frequency_days: u32, last: Option<DateTime<Utc>>) -> Contact {
        let created = DateTime::<Utc>::UNIX_EPOCH;
        Contact {
            id: format!("id-{name}"),
            full_name: name.to_string(),
            relationship: Relationship::Friend,
            phone_number: "+15550000000".to_string(),
            email: None,
            frequency_days,
            last_contacted_at: Timestamp::from(last),
            priority: Some(1),
            created_at: created,
            updated_at: created,
        }
    }
}
