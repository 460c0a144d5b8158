//! Suggestion settings commands for CLI.

use clap::Subcommand;
use reconnect_core::Mode;

use super::{open_store, print_json};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show current settings
    Get,
    /// Change settings; omitted fields keep their value
    Set {
        /// daily or weekly
        #[arg(long)]
        mode: Option<Mode>,
        /// Suggestions per day (1-50)
        #[arg(long)]
        count_daily: Option<u32>,
        /// Suggestions per week (1-200)
        #[arg(long)]
        count_weekly: Option<u32>,
        /// Comma-separated frequency presets in days, e.g. "7,30,90"
        #[arg(long, value_delimiter = ',')]
        frequencies: Option<Vec<u32>>,
    },
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = open_store()?;

    match action {
        SettingsAction::Get => print_json(&db.get_settings()?)?,
        SettingsAction::Set {
            mode,
            count_daily,
            count_weekly,
            frequencies,
        } => {
            let mut settings = db.get_settings()?;
            if let Some(m) = mode {
                settings.mode = m;
            }
            if let Some(c) = count_daily {
                settings.count_daily = c;
            }
            if let Some(c) = count_weekly {
                settings.count_weekly = c;
            }
            if let Some(f) = frequencies {
                settings.default_frequencies = f;
            }
            print_json(&db.update_settings(&settings)?)?;
        }
    }
    Ok(())
}
