//! Interaction commands for CLI.

use clap::Subcommand;
use reconnect_core::storage::database::DEFAULT_INTERACTION_LIMIT;
use reconnect_core::{Interaction, InteractionType, NewInteraction};

use super::{open_store, print_json, wants_json};

#[derive(Subcommand)]
pub enum InteractionAction {
    /// Record a call or text; marks the contact as reached now
    Log {
        /// Contact ID
        contact_id: String,
        /// call or text
        #[arg(long = "type", default_value = "call")]
        kind: InteractionType,
        /// First part of the message, for texts
        #[arg(long)]
        message: Option<String>,
        /// Notes, for calls
        #[arg(long)]
        notes: Option<String>,
    },
    /// List recent interactions
    List {
        /// Only this contact's interactions
        #[arg(long)]
        contact: Option<String>,
        /// Maximum rows when listing across contacts
        #[arg(long, default_value_t = DEFAULT_INTERACTION_LIMIT)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: InteractionAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = open_store()?;

    match action {
        InteractionAction::Log {
            contact_id,
            kind,
            message,
            notes,
        } => {
            let new = NewInteraction {
                kind,
                message_preview: message,
                notes,
            };
            let interaction = db.record_interaction(&contact_id, &new)?;
            println!("Interaction recorded: {}", interaction.id);
            print_json(&interaction)?;
        }
        InteractionAction::List {
            contact,
            limit,
            json,
        } => {
            let items = match contact {
                Some(id) => db.list_interactions_for_contact(&id)?,
                None => db.list_interactions(limit)?,
            };
            if wants_json(json) {
                print_json(&items)?;
            } else {
                print_table(&items);
            }
        }
    }
    Ok(())
}

fn print_table(items: &[Interaction]) {
    if items.is_empty() {
        println!("No interactions.");
        return;
    }
    for i in items {
        let detail = i
            .message_preview
            .as_deref()
            .or(i.notes.as_deref())
            .unwrap_or("");
        println!(
            "{}  {:<4}  {}  {}",
            i.created_at.format("%Y-%m-%d %H:%M"),
            i.kind.as_str(),
            i.contact_id,
            detail
        );
    }
}
