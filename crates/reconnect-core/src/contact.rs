//! Contact and interaction records.
//!
//! [`NewContact`] and [`NewInteraction`] are the caller-supplied halves of a
//! record; ids and server-side timestamps are assigned by the store.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::Timestamp;

pub const DEFAULT_FREQUENCY_DAYS: u32 = 30;
pub const DEFAULT_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 5;

/// How the user knows a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    #[default]
    Friend,
    Family,
    Business,
    Other,
}

impl Relationship {
    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::Friend => "friend",
            Relationship::Family => "family",
            Relationship::Business => "business",
            Relationship::Other => "other",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "friend" => Ok(Relationship::Friend),
            "family" => Ok(Relationship::Family),
            "business" => Ok(Relationship::Business),
            "other" => Ok(Relationship::Other),
            other => Err(ValidationError::InvalidValue {
                field: "relationship",
                message: format!("expected friend, family, business or other, got '{other}'"),
            }),
        }
    }
}

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub full_name: String,
    pub relationship: Relationship,
    pub phone_number: String,
    pub email: Option<String>,
    /// Desired maximum gap between contacts, always >= 1.
    pub frequency_days: u32,
    pub last_contacted_at: Timestamp,
    /// Stored for display; ranking ignores it.
    pub priority: Option<u8>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Editable fields of this contact, as a starting point for an update.
    ///
    /// An unreadable stored last-contact time is carried over verbatim, so
    /// an edit to another field leaves it in place.
    pub fn to_new(&self) -> NewContact {
        NewContact {
            full_name: self.full_name.clone(),
            relationship: self.relationship,
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            frequency_days: self.frequency_days,
            last_contacted_at: self.last_contacted_at.clone(),
            priority: self.priority,
        }
    }
}

/// Caller-supplied contact fields, used for both create and full update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub full_name: String,
    #[serde(default)]
    pub relationship: Relationship,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_frequency_days")]
    pub frequency_days: u32,
    #[serde(default)]
    pub last_contacted_at: Timestamp,
    #[serde(default = "default_priority")]
    pub priority: Option<u8>,
}

fn default_frequency_days() -> u32 {
    DEFAULT_FREQUENCY_DAYS
}

fn default_priority() -> Option<u8> {
    Some(DEFAULT_PRIORITY)
}

impl NewContact {
    pub fn new(full_name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            relationship: Relationship::default(),
            phone_number: phone_number.into(),
            email: None,
            frequency_days: DEFAULT_FREQUENCY_DAYS,
            last_contacted_at: Timestamp::Never,
            priority: default_priority(),
        }
    }

    /// Check the fields the store and the ranking engine rely on.
    ///
    /// # Errors
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::Empty("fullName"));
        }
        if self.phone_number.trim().is_empty() {
            return Err(ValidationError::Empty("phoneNumber"));
        }
        if self.frequency_days == 0 {
            return Err(ValidationError::OutOfRange {
                field: "frequencyDays",
                min: 1,
                max: i64::from(u32::MAX),
                value: 0,
            });
        }
        if let Some(p) = self.priority {
            if !(1..=MAX_PRIORITY).contains(&p) {
                return Err(ValidationError::OutOfRange {
                    field: "priority",
                    min: 1,
                    max: i64::from(MAX_PRIORITY),
                    value: i64::from(p),
                });
            }
        }
        if let Some(email) = &self.email {
            if !looks_like_email(email) {
                return Err(ValidationError::InvalidValue {
                    field: "email",
                    message: format!("'{email}' is not an email address"),
                });
            }
        }
        Ok(())
    }
}

// local@domain.tld with no whitespace
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// How an interaction happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    Call,
    Text,
}

impl InteractionType {
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionType::Call => "call",
            InteractionType::Text => "text",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(InteractionType::Call),
            "text" => Ok(InteractionType::Text),
            other => Err(ValidationError::InvalidValue {
                field: "type",
                message: format!("expected call or text, got '{other}'"),
            }),
        }
    }
}

/// A logged call or text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: String,
    pub contact_id: String,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    pub message_preview: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied interaction fields. `created_at` is never client supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInteraction {
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(default)]
    pub message_preview: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewInteraction {
    pub fn new(kind: InteractionType) -> Self {
        Self {
            kind,
            message_preview: None,
            notes: None,
        }
    }
}
