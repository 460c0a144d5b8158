//! Contact management commands for CLI.

use clap::Subcommand;
use reconnect_core::{is_due, overdue_score, Contact, NewContact, Relationship, Timestamp};
use serde_json::json;

use super::{describe_score, format_last_contacted, open_store, parse_at, print_json, wants_json};

#[derive(Subcommand)]
pub enum ContactAction {
    /// Add a contact
    Add {
        /// Full name
        name: String,
        /// Phone number for calling or texting
        #[arg(long)]
        phone: String,
        /// friend, family, business or other
        #[arg(long, default_value = "friend")]
        relationship: Relationship,
        #[arg(long)]
        email: Option<String>,
        /// Desired days between contacts
        #[arg(long, default_value_t = reconnect_core::contact::DEFAULT_FREQUENCY_DAYS)]
        frequency: u32,
        /// Last contact as RFC 3339
        #[arg(long)]
        last_contacted: Option<String>,
        /// Priority 1 (low) to 5 (high)
        #[arg(long, default_value_t = reconnect_core::contact::DEFAULT_PRIORITY)]
        priority: u8,
    },
    /// List all contacts
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one contact
    Get { id: String },
    /// Change fields of a contact
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        relationship: Option<Relationship>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        frequency: Option<u32>,
        /// Last contact as RFC 3339
        #[arg(long, conflicts_with = "never_contacted")]
        last_contacted: Option<String>,
        /// Clear the last contact time
        #[arg(long)]
        never_contacted: bool,
        #[arg(long)]
        priority: Option<u8>,
    },
    /// Delete a contact and its interactions
    Delete { id: String },
    /// Whether a contact is due for outreach
    Due {
        id: String,
        /// Evaluate as of this RFC 3339 instant instead of now
        #[arg(long)]
        at: Option<String>,
    },
}

pub fn run(action: ContactAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = open_store()?;

    match action {
        ContactAction::Add {
            name,
            phone,
            relationship,
            email,
            frequency,
            last_contacted,
            priority,
        } => {
            let new = NewContact {
                full_name: name,
                relationship,
                phone_number: phone,
                email,
                frequency_days: frequency,
                last_contacted_at: last_contacted
                    .as_deref()
                    .map(|s| parse_at(Some(s)))
                    .transpose()?
                    .into(),
                priority: Some(priority),
            };
            let contact = db.create_contact(&new)?;
            println!("Contact created: {}", contact.id);
            print_json(&contact)?;
        }
        ContactAction::List { json } => {
            let contacts = db.list_contacts()?;
            if wants_json(json) {
                print_json(&contacts)?;
            } else {
                print_table(&contacts);
            }
        }
        ContactAction::Get { id } => match db.get_contact(&id)? {
            Some(contact) => print_json(&contact)?,
            None => return Err(format!("Contact not found: {id}").into()),
        },
        ContactAction::Update {
            id,
            name,
            phone,
            relationship,
            email,
            frequency,
            last_contacted,
            never_contacted,
            priority,
        } => {
            let existing = db
                .get_contact(&id)?
                .ok_or_else(|| format!("Contact not found: {id}"))?;
            let mut edit = existing.to_new();
            if let Some(n) = name {
                edit.full_name = n;
            }
            if let Some(p) = phone {
                edit.phone_number = p;
            }
            if let Some(r) = relationship {
                edit.relationship = r;
            }
            if let Some(e) = email {
                edit.email = Some(e);
            }
            if let Some(f) = frequency {
                edit.frequency_days = f;
            }
            if let Some(p) = priority {
                edit.priority = Some(p);
            }
            if let Some(raw) = last_contacted {
                edit.last_contacted_at = parse_at(Some(&raw))?.into();
            }
            if never_contacted {
                edit.last_contacted_at = Timestamp::Never;
            }

            let contact = db.update_contact(&id, &edit)?;
            println!("Contact updated:");
            print_json(&contact)?;
        }
        ContactAction::Delete { id } => {
            db.delete_contact(&id)?;
            println!("Contact deleted: {id}");
        }
        ContactAction::Due { id, at } => {
            let now = parse_at(at.as_deref())?;
            let contact = db
                .get_contact(&id)?
                .ok_or_else(|| format!("Contact not found: {id}"))?;
            let score = overdue_score(&contact, now);
            print_json(&json!({
                "id": &contact.id,
                "fullName": &contact.full_name,
                "due": is_due(&contact, now),
                "score": score,
                "status": describe_score(score),
                "timestampMalformed": contact.last_contacted_at.is_malformed(),
            }))?;
        }
    }
    Ok(())
}

fn print_table(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts.");
        return;
    }
    println!(
        "{:<36}  {:<24}  {:<9}  {:>5}  {:<10}",
        "ID", "NAME", "RELATION", "FREQ", "LAST"
    );
    for c in contacts {
        println!(
            "{:<36}  {:<24}  {:<9}  {:>5}  {:<10}",
            c.id,
            c.full_name,
            c.relationship.as_str(),
            c.frequency_days,
            format_last_contacted(c.last_contacted_at.instant()),
        );
    }
}
