//! Demo data for a fresh store.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::contact::{NewContact, Relationship};
use crate::error::Result;
use crate::storage::ContactDb;
use crate::time::Timestamp;

/// Outcome of [`seed_demo`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub seeded: bool,
    pub count: usize,
    pub ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn demo_contacts(now: DateTime<Utc>) -> Vec<NewContact> {
    vec![
        NewContact {
            full_name: "Alex Johnson".into(),
            relationship: Relationship::Friend,
            phone_number: "+15551234567".into(),
            email: Some("alex@example.com".into()),
            frequency_days: 14,
            last_contacted_at: (now - Duration::days(30)).into(),
            priority: Some(3),
        },
        NewContact {
            full_name: "Jamie Lee".into(),
            relationship: Relationship::Business,
            phone_number: "+15557654321".into(),
            email: Some("jamie@work.co".into()),
            frequency_days: 30,
            last_contacted_at: (now - Duration::days(90)).into(),
            priority: Some(4),
        },
        NewContact {
            full_name: "Taylor Kim".into(),
            relationship: Relationship::Family,
            phone_number: "+15559876543".into(),
            email: None,
            frequency_days: 7,
            last_contacted_at: Timestamp::Never,
            priority: Some(5),
        },
    ]
}

/// Insert three example contacts, but only into an empty store.
///
/// # Errors
/// Returns an error if the store cannot be read or written.
pub fn seed_demo(db: &ContactDb, now: DateTime<Utc>) -> Result<SeedSummary> {
    if db.count_contacts()? > 0 {
        return Ok(SeedSummary {
            seeded: false,
            count: 0,
            ids: Vec::new(),
            message: Some("Contacts already exist".into()),
        });
    }

    let ids: Vec<String> = db
        .create_contacts_at(&demo_contacts(now), now)?
        .into_iter()
        .map(|created| created.id)
        .collect();
    tracing::info!(count = ids.len(), "seeded demo contacts");

    Ok(SeedSummary {
        seeded: true,
        count: ids.len(),
        ids,
        message: None,
    })
}
