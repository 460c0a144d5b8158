//! Suggestion command for CLI.

use clap::Args;
use reconnect_core::{get_suggestions, Mode, Suggestion, SuggestionRequest};

use super::{describe_score, open_store, parse_at, print_json, wants_json};

#[derive(Args)]
pub struct SuggestArgs {
    /// daily or weekly (default: stored setting)
    #[arg(long)]
    mode: Option<String>,
    /// How many contacts to show (default: the mode's stored count)
    #[arg(long)]
    count: Option<usize>,
    /// Evaluate as of this RFC 3339 instant instead of now
    #[arg(long)]
    at: Option<String>,
    #[arg(long)]
    json: bool,
}

pub fn run(args: SuggestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mode = args.mode.as_deref().map(str::parse::<Mode>).transpose()?;
    let now = parse_at(args.at.as_deref())?;
    let db = open_store()?;

    let suggestions = get_suggestions(&db, &SuggestionRequest::new(mode, args.count), now)?;
    if wants_json(args.json) {
        print_json(&suggestions)?;
    } else {
        print_table(&suggestions);
    }
    Ok(())
}

fn print_table(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("Nobody to suggest. Add contacts with `reconnect contact add`.");
        return;
    }
    for (rank, s) in suggestions.iter().enumerate() {
        let flag = if s.timestamp_malformed {
            "  (stored last-contact date unreadable)"
        } else {
            ""
        };
        println!(
            "{:>2}. {:<24}  {:<16}  {}{}",
            rank + 1,
            s.contact.full_name,
            s.contact.phone_number,
            describe_score(s.score),
            flag
        );
    }
}
