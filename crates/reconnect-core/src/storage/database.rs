//! SQLite-based storage for contacts, interactions and settings.
//!
//! Recording an interaction and moving the contact's `last_contacted_at`
//! happen in one transaction, so a reader never sees one without the other.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;
use uuid::Uuid;

use super::migrations;
use crate::contact::{
    Contact, Interaction, InteractionType, MAX_PRIORITY, NewContact, NewInteraction, Relationship,
};
use crate::error::{CoreError, DatabaseError, Result};
use crate::settings::{Mode, Settings};
use crate::suggest::ContactSource;
use crate::time::{format_storage, parse_storage, Timestamp};

const SETTINGS_ROW_ID: &str = "default";
pub const DEFAULT_INTERACTION_LIMIT: usize = 100;

const CONTACT_COLUMNS: &str = "id, full_name, relationship, phone_number, email, frequency_days,
     last_contacted_at, priority, created_at, updated_at";
const INTERACTION_COLUMNS: &str = "id, contact_id, kind, message_preview, notes, created_at";

/// Row counts and schema version, for `status` output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub schema_version: i32,
    pub contacts: u64,
    pub interactions: u64,
}

// Unreadable audit timestamps fall back to now rather than failing the row.
fn parse_datetime_fallback(raw: &str) -> DateTime<Utc> {
    parse_storage(raw).unwrap_or_else(|| {
        tracing::warn!(value = raw, "unparseable stored timestamp");
        Utc::now()
    })
}

fn parse_relationship(raw: &str) -> Relationship {
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(value = raw, "unknown relationship, reading as other");
        Relationship::Other
    })
}

fn parse_interaction_type(raw: &str) -> InteractionType {
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(value = raw, "unknown interaction type, reading as call");
        InteractionType::Call
    })
}

// Priority is display-only, so an out-of-range value is dropped, not fatal.
fn parse_priority(raw: Option<i64>) -> Option<u8> {
    let value = raw?;
    match u8::try_from(value) {
        Ok(p) if (1..=MAX_PRIORITY).contains(&p) => Some(p),
        _ => {
            tracing::warn!(value, "priority out of range, reading as unset");
            None
        }
    }
}

fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
    let relationship: String = row.get(2)?;
    let last_contacted_at: Option<String> = row.get(6)?;
    let priority: Option<i64> = row.get(7)?;
    let created_at: String = row.get(8)?;
    let updated_at: String = row.get(9)?;

    Ok(Contact {
        id: row.get(0)?,
        full_name: row.get(1)?,
        relationship: parse_relationship(&relationship),
        phone_number: row.get(3)?,
        email: row.get(4)?,
        frequency_days: row.get(5)?,
        last_contacted_at: Timestamp::parse(last_contacted_at.as_deref()),
        priority: parse_priority(priority),
        created_at: parse_datetime_fallback(&created_at),
        updated_at: parse_datetime_fallback(&updated_at),
    })
}

fn row_to_interaction(row: &Row) -> rusqlite::Result<Interaction> {
    let kind: String = row.get(2)?;
    let created_at: String = row.get(5)?;
    Ok(Interaction {
        id: row.get(0)?,
        contact_id: row.get(1)?,
        kind: parse_interaction_type(&kind),
        message_preview: row.get(3)?,
        notes: row.get(4)?,
        created_at: parse_datetime_fallback(&created_at),
    })
}

fn not_found(kind: &'static str, id: &str) -> CoreError {
    CoreError::NotFound {
        kind,
        id: id.to_string(),
    }
}

/// SQLite database for contact storage.
pub struct ContactDb {
    conn: Connection,
    path: Option<PathBuf>,
}

impl ContactDb {
    /// Open (creating if needed) the database at `path`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::init(conn, Some(path.to_path_buf()))
    }

    /// Open an in-memory database.
    ///
    /// # Errors
    /// Returns an error if the schema cannot be created.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        migrations::migrate(&conn)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(Self { conn, path })
    }

    /// File backing this database, `None` when in memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // === Contacts ===

    /// Validate and insert a new contact.
    ///
    /// # Errors
    /// Returns a validation error for bad input, or a database error.
    pub fn create_contact(&self, new: &NewContact) -> Result<Contact> {
        self.create_contact_at(new, Utc::now())
    }

    pub(crate) fn create_contact_at(
        &self,
        new: &NewContact,
        now: DateTime<Utc>,
    ) -> Result<Contact> {
        new.validate()?;
        let id = Uuid::new_v4().to_string();
        let stamp = format_storage(now);
        self.conn.execute(
            "INSERT INTO contacts (id, full_name, relationship, phone_number, email, frequency_days,
                                   last_contacted_at, priority, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
            params![
                id,
                new.full_name.trim(),
                new.relationship.as_str(),
                new.phone_number.trim(),
                new.email,
                new.frequency_days,
                new.last_contacted_at.to_storage(),
                new.priority,
                stamp,
            ],
        )?;
        tracing::info!(contact_id = %id, "contact created");
        self.get_contact(&id)?.ok_or_else(|| not_found("contact", &id))
    }

    /// Insert several contacts in one transaction; any failure inserts none.
    pub(crate) fn create_contacts_at(
        &self,
        news: &[NewContact],
        now: DateTime<Utc>,
    ) -> Result<Vec<Contact>> {
        let tx = self.conn.unchecked_transaction()?;
        let created = news
            .iter()
            .map(|new| self.create_contact_at(new, now))
            .collect::<Result<Vec<_>>>()?;
        tx.commit()?;
        Ok(created)
    }

    /// Get a contact by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn get_contact(&self, id: &str) -> Result<Option<Contact>> {
        let contact = self
            .conn
            .query_row(
                &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
                params![id],
                row_to_contact,
            )
            .optional()?;
        Ok(contact)
    }

    /// All contacts, oldest first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn list_contacts(&self) -> Result<Vec<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY rowid"))?;
        let contacts = stmt
            .query_map([], row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(contacts)
    }

    /// Replace every caller-editable field of a contact.
    ///
    /// # Errors
    /// Returns `NotFound` if no contact has `id`, or a validation error.
    pub fn update_contact(&self, id: &str, new: &NewContact) -> Result<Contact> {
        new.validate()?;
        let changed = self.conn.execute(
            "UPDATE contacts
             SET full_name = ?1, relationship = ?2, phone_number = ?3, email = ?4,
                 frequency_days = ?5, last_contacted_at = ?6, priority = ?7, updated_at = ?8
             WHERE id = ?9",
            params![
                new.full_name.trim(),
                new.relationship.as_str(),
                new.phone_number.trim(),
                new.email,
                new.frequency_days,
                new.last_contacted_at.to_storage(),
                new.priority,
                format_storage(Utc::now()),
                id,
            ],
        )?;
        if changed == 0 {
            return Err(not_found("contact", id));
        }
        tracing::info!(contact_id = id, "contact updated");
        self.get_contact(id)?.ok_or_else(|| not_found("contact", id))
    }

    /// Delete a contact and its interactions in a single transaction.
    ///
    /// # Errors
    /// Returns `NotFound` if no contact has `id`.
    pub fn delete_contact(&self, id: &str) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let removed = tx.execute("DELETE FROM contacts WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(not_found("contact", id));
        }
        let interactions =
            tx.execute("DELETE FROM interactions WHERE contact_id = ?1", params![id])?;
        tx.commit()?;
        tracing::info!(contact_id = id, interactions, "contact deleted");
        Ok(())
    }

    // === Interactions ===

    /// Log an interaction and mark the contact as reached now.
    ///
    /// # Errors
    /// Returns `NotFound` if the contact does not exist.
    pub fn record_interaction(
        &self,
        contact_id: &str,
        new: &NewInteraction,
    ) -> Result<Interaction> {
        self.record_interaction_at(contact_id, new, Utc::now())
    }

    /// Log an interaction stamped `at`.
    ///
    /// The insert and the contact's `last_contacted_at = at` update commit
    /// together or not at all.
    ///
    /// # Errors
    /// Returns `NotFound` if the contact does not exist.
    pub fn record_interaction_at(
        &self,
        contact_id: &str,
        new: &NewInteraction,
        at: DateTime<Utc>,
    ) -> Result<Interaction> {
        let id = Uuid::new_v4().to_string();
        let stamp = format_storage(at);

        let tx = self.conn.unchecked_transaction()?;
        let touched = tx.execute(
            "UPDATE contacts SET last_contacted_at = ?1, updated_at = ?1 WHERE id = ?2",
            params![stamp, contact_id],
        )?;
        if touched == 0 {
            return Err(not_found("contact", contact_id));
        }
        tx.execute(
            "INSERT INTO interactions (id, contact_id, kind, message_preview, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                id,
                contact_id,
                new.kind.as_str(),
                new.message_preview,
                new.notes,
                stamp,
            ],
        )?;
        tx.commit()?;
        tracing::info!(contact_id, interaction_id = %id, kind = %new.kind, "interaction recorded");

        Ok(Interaction {
            id,
            contact_id: contact_id.to_string(),
            kind: new.kind,
            message_preview: new.message_preview.clone(),
            notes: new.notes.clone(),
            created_at: parse_datetime_fallback(&stamp),
        })
    }

    /// Most recent interactions across all contacts, newest first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn list_interactions(&self, limit: usize) -> Result<Vec<Interaction>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {INTERACTION_COLUMNS} FROM interactions
             ORDER BY created_at DESC, rowid DESC LIMIT ?1"
        ))?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let items = stmt
            .query_map(params![limit], row_to_interaction)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    /// Interactions for one contact, newest first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn list_interactions_for_contact(&self, contact_id: &str) -> Result<Vec<Interaction>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {INTERACTION_COLUMNS} FROM interactions WHERE contact_id = ?1
             ORDER BY created_at DESC, rowid DESC"
        ))?;
        let items = stmt
            .query_map(params![contact_id], row_to_interaction)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    // === Settings ===

    /// The settings row, inserted with defaults on first read.
    ///
    /// # Errors
    /// Returns an error if the query or the insert fails.
    pub fn get_settings(&self) -> Result<Settings> {
        if let Some(settings) = self.read_settings()? {
            return Ok(settings);
        }
        let defaults = Settings::default();
        self.write_settings(&defaults, "INSERT OR IGNORE")?;
        tracing::debug!("settings created with defaults");
        Ok(self.read_settings()?.unwrap_or(defaults))
    }

    /// Validate and store new settings.
    ///
    /// # Errors
    /// Returns a validation error for out-of-range values.
    pub fn update_settings(&self, settings: &Settings) -> Result<Settings> {
        settings.validate()?;
        self.write_settings(settings, "INSERT OR REPLACE")?;
        tracing::info!(mode = %settings.mode, "settings updated");
        self.get_settings()
    }

    fn read_settings(&self) -> Result<Option<Settings>> {
        let row = self
            .conn
            .query_row(
                "SELECT mode, count_daily, count_weekly, default_frequencies
                 FROM settings WHERE id = ?1",
                params![SETTINGS_ROW_ID],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, u32>(1)?,
                        row.get::<_, u32>(2)?,
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .optional()?;

        Ok(row.map(|(mode, count_daily, count_weekly, frequencies)| {
            let defaults = Settings::default();
            Settings {
                mode: mode.parse::<Mode>().unwrap_or_else(|_| {
                    tracing::warn!(value = %mode, "unknown stored mode, using default");
                    defaults.mode
                }),
                count_daily,
                count_weekly,
                default_frequencies: serde_json::from_str(&frequencies).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "unreadable default frequencies, using defaults");
                    defaults.default_frequencies
                }),
            }
        }))
    }

    fn write_settings(&self, settings: &Settings, verb: &str) -> Result<()> {
        let frequencies = serde_json::to_string(&settings.default_frequencies)?;
        self.conn.execute(
            &format!(
                "{verb} INTO settings (id, mode, count_daily, count_weekly, default_frequencies)
                 VALUES (?1, ?2, ?3, ?4, ?5)"
            ),
            params![
                SETTINGS_ROW_ID,
                settings.mode.as_str(),
                settings.count_daily,
                settings.count_weekly,
                frequencies,
            ],
        )?;
        Ok(())
    }

    // === Housekeeping ===

    /// Number of stored contacts.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn count_contacts(&self) -> Result<u64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get::<_, u64>(0))?;
        Ok(n)
    }

    /// # Errors
    /// Returns an error if any query fails.
    pub fn stats(&self) -> Result<StoreStats> {
        let interactions = self
            .conn
            .query_row("SELECT COUNT(*) FROM interactions", [], |row| row.get::<_, u64>(0))?;
        Ok(StoreStats {
            schema_version: migrations::schema_version(&self.conn)?,
            contacts: self.count_contacts()?,
            interactions,
        })
    }

    #[cfg(test)]
    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl ContactSource for ContactDb {
    fn list_contacts(&self) -> Result<Vec<Contact>> {
        ContactDb::list_contacts(self)
    }

    fn get_settings(&self) -> Result<Settings> {
        ContactDb::get_settings(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn db() -> ContactDb {
        ContactDb::open_memory().unwrap()
    }

    fn new_contact(name: &str) -> NewContact {
        NewContact::new(name, "+15551234567")
    }

    #[test]
    fn create_and_get_contact() {
        let db = db();
        let mut new = new_contact("Alex Johnson");
        new.email = Some("alex@example.com".into());
        new.frequency_days = 14;
        let created = db.create_contact(&new).unwrap();

        let fetched = db.get_contact(&created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.full_name, "Alex Johnson");
        assert_eq!(fetched.frequency_days, 14);
        assert_eq!(fetched.last_contacted_at, Timestamp::Never);
        assert_eq!(fetched.priority, Some(1));
    }

    #[test]
    fn get_missing_contact_is_none() {
        assert!(db().get_contact("nope").unwrap().is_none());
    }

    #[test]
    fn invalid_contact_is_not_stored() {
        let db = db();
        let mut bad = new_contact("Alex");
        bad.frequency_days = 0;
        assert!(matches!(db.create_contact(&bad), Err(CoreError::Validation(_))));
        assert_eq!(db.count_contacts().unwrap(), 0);
    }

    #[test]
    fn list_contacts_keeps_insertion_order() {
        let db = db();
        for name in ["C", "A", "B"] {
            db.create_contact(&new_contact(name)).unwrap();
        }
        let names: Vec<_> = db
            .list_contacts()
            .unwrap()
            .into_iter()
            .map(|c| c.full_name)
            .collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn update_contact_replaces_fields() {
        let db = db();
        let created = db.create_contact(&new_contact("Alex")).unwrap();
        let mut edit = new_contact("Alex J.");
        edit.relationship = Relationship::Business;
        edit.priority = Some(4);
        let updated = db.update_contact(&created.id, &edit).unwrap();
        assert_eq!(updated.full_name, "Alex J.");
        assert_eq!(updated.relationship, Relationship::Business);
        assert_eq!(updated.priority, Some(4));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn update_missing_contact_is_not_found() {
        let err = db().update_contact("missing", &new_contact("X")).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { kind: "contact", .. }));
    }

    #[test]
    fn delete_contact_removes_its_interactions() {
        let db = db();
        let keep = db.create_contact(&new_contact("Keep")).unwrap();
        let gone = db.create_contact(&new_contact("Gone")).unwrap();
        db.record_interaction(&keep.id, &NewInteraction::new(InteractionType::Call))
            .unwrap();
        db.record_interaction(&gone.id, &NewInteraction::new(InteractionType::Text))
            .unwrap();

        db.delete_contact(&gone.id).unwrap();
        assert!(db.get_contact(&gone.id).unwrap().is_none());
        assert!(db.list_interactions_for_contact(&gone.id).unwrap().is_empty());
        assert_eq!(db.list_interactions(10).unwrap().len(), 1);
    }

    #[test]
    fn delete_missing_contact_is_not_found() {
        assert!(matches!(
            db().delete_contact("missing"),
            Err(CoreError::NotFound { .. })
        ));
    }

    #[test]
    fn record_interaction_moves_last_contacted_at() {
        let db = db();
        let contact = db.create_contact(&new_contact("Jamie")).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let mut note = NewInteraction::new(InteractionType::Text);
        note.message_preview = Some("Hey Jamie".into());
        let interaction = db.record_interaction_at(&contact.id, &note, at).unwrap();

        assert_eq!(interaction.created_at, at);
        assert_eq!(interaction.contact_id, contact.id);
        let reread = db.get_contact(&contact.id).unwrap().unwrap();
        assert_eq!(reread.last_contacted_at, Timestamp::Known(at));
    }

    #[test]
    fn record_interaction_for_missing_contact_writes_nothing() {
        let db = db();
        let err = db
            .record_interaction("missing", &NewInteraction::new(InteractionType::Call))
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
        assert!(db.list_interactions(10).unwrap().is_empty());
    }

    #[test]
    fn interactions_list_newest_first_with_limit() {
        let db = db();
        let contact = db.create_contact(&new_contact("Sam")).unwrap();
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        for days in [3, 1, 2] {
            db.record_interaction_at(
                &contact.id,
                &NewInteraction::new(InteractionType::Call),
                base + Duration::days(days),
            )
            .unwrap();
        }

        let all = db.list_interactions_for_contact(&contact.id).unwrap();
        let stamps: Vec<_> = all.iter().map(|i| i.created_at).collect();
        assert_eq!(
            stamps,
            [base + Duration::days(3), base + Duration::days(2), base + Duration::days(1)]
        );
        assert_eq!(db.list_interactions(2).unwrap().len(), 2);
    }

    #[test]
    fn malformed_stored_timestamp_reads_as_malformed() {
        let db = db();
        let contact = db.create_contact(&new_contact("Broken")).unwrap();
        db.conn()
            .execute(
                "UPDATE contacts SET last_contacted_at = 'yesterday-ish' WHERE id = ?1",
                params![contact.id],
            )
            .unwrap();
        let reread = db.get_contact(&contact.id).unwrap().unwrap();
        assert_eq!(
            reread.last_contacted_at,
            Timestamp::Malformed("yesterday-ish".into())
        );
    }

    #[test]
    fn batch_create_rolls_back_on_invalid_entry() {
        let db = db();
        let mut invalid = new_contact("Zero");
        invalid.frequency_days = 0;
        let batch = [new_contact("First"), invalid, new_contact("Third")];

        let err = db.create_contacts_at(&batch, Utc::now()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(db.count_contacts().unwrap(), 0);

        let created = db.create_contacts_at(&batch[..1], Utc::now()).unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(db.count_contacts().unwrap(), 1);
    }

    #[test]
    fn editing_other_fields_keeps_a_malformed_timestamp() {
        let db = db();
        let contact = db.create_contact(&new_contact("Broken")).unwrap();
        db.conn()
            .execute(
                "UPDATE contacts SET last_contacted_at = 'yesterday-ish' WHERE id = ?1",
                params![contact.id],
            )
            .unwrap();
        let before = db.get_contact(&contact.id).unwrap().unwrap();

        let mut edit = before.to_new();
        edit.phone_number = "+15550000000".into();
        let after = db.update_contact(&contact.id, &edit).unwrap();

        assert_eq!(after.phone_number, "+15550000000");
        assert_eq!(
            after.last_contacted_at,
            Timestamp::Malformed("yesterday-ish".into())
        );
    }

    #[test]
    fn out_of_range_priority_reads_as_unset() {
        let db = db();
        let bad = db.create_contact(&new_contact("Loud")).unwrap();
        let good = db.create_contact(&new_contact("Quiet")).unwrap();
        db.conn()
            .execute("UPDATE contacts SET priority = 300 WHERE id = ?1", params![bad.id])
            .unwrap();
        db.conn()
            .execute("UPDATE contacts SET priority = -1 WHERE id = ?1", params![good.id])
            .unwrap();

        let listed = db.list_contacts().unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|c| c.priority.is_none()));

        let suggestions = crate::suggest::get_suggestions(
            &db,
            &crate::suggest::SuggestionRequest::default(),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn settings_are_created_with_defaults_once() {
        let db = db();
        assert_eq!(db.get_settings().unwrap(), Settings::default());
        let rows: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM settings", [], |r| r.get(0))
            .unwrap();
        assert_eq!(rows, 1);
        db.get_settings().unwrap();
        let rows: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM settings", [], |r| r.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn update_settings_round_trips_and_validates() {
        let db = db();
        let wanted = Settings {
            mode: Mode::Weekly,
            count_daily: 5,
            count_weekly: 20,
            default_frequencies: vec![14, 60],
        };
        assert_eq!(db.update_settings(&wanted).unwrap(), wanted);
        assert_eq!(db.get_settings().unwrap(), wanted);

        let bad = Settings {
            count_weekly: 0,
            ..wanted.clone()
        };
        assert!(matches!(db.update_settings(&bad), Err(CoreError::Validation(_))));
        assert_eq!(db.get_settings().unwrap(), wanted);
    }

    #[test]
    fn stats_count_rows() {
        let db = db();
        let c = db.create_contact(&new_contact("A")).unwrap();
        db.record_interaction(&c.id, &NewInteraction::new(InteractionType::Call))
            .unwrap();
        let stats = db.stats().unwrap();
        assert_eq!(stats.contacts, 1);
        assert_eq!(stats.interactions, 1);
        assert_eq!(stats.schema_version, migrations::CURRENT_VERSION);
    }

    #[test]
    fn open_at_persists_between_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reconnect.db");
        let id = {
            let db = ContactDb::open_at(&path).unwrap();
            db.create_contact(&new_contact("Persisted")).unwrap().id
        };
        let db = ContactDb::open_at(&path).unwrap();
        assert_eq!(db.path(), Some(path.as_path()));
        assert!(db.get_contact(&id).unwrap().is_some());
    }
}
