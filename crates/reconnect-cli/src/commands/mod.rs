pub mod config;
pub mod contact;
pub mod interaction;
pub mod settings;
pub mod status;
pub mod suggest;
pub mod templates;

use chrono::{DateTime, Utc};
use reconnect_core::storage::data_dir;
use reconnect_core::{Config, ContactDb, OutputFormat, OverdueScore};
use serde::Serialize;

/// Open the store named by the config in the data directory.
pub fn open_store() -> Result<ContactDb, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let path = config.database_path(&data_dir()?);
    tracing::debug!(path = %path.display(), "opening store");
    Ok(ContactDb::open_at(&path)?)
}

/// `--json` wins; otherwise the configured default.
pub fn wants_json(json_flag: bool) -> bool {
    json_flag
        || Config::load()
            .map(|c| c.display.default_output == OutputFormat::Json)
            .unwrap_or(false)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse an optional RFC 3339 instant, defaulting to now.
pub fn parse_at(at: Option<&str>) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    match at {
        Some(raw) => Ok(DateTime::parse_from_rfc3339(raw)
            .map_err(|e| format!("invalid timestamp '{raw}': {e}"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

pub fn format_last_contacted(at: Option<DateTime<Utc>>) -> String {
    at.map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "never".to_string())
}

/// Human wording for an overdue score.
pub fn describe_score(score: OverdueScore) -> String {
    match score {
        OverdueScore::NeverContacted => "never contacted".into(),
        OverdueScore::Days(0) => "due today".into(),
        OverdueScore::Days(d) if d > 0 => format!("{d} days overdue"),
        OverdueScore::Days(d) => format!("due in {} days", -d),
    }
}
