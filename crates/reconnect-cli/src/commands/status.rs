//! Store status and demo seeding.

use chrono::Utc;
use reconnect_core::seed_demo;
use reconnect_core::storage::data_dir;
use serde_json::json;

use super::{open_store, print_json};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db = open_store()?;
    let stats = db.stats()?;
    print_json(&json!({
        "dataDir": data_dir()?,
        "database": db.path(),
        "schemaVersion": stats.schema_version,
        "contacts": stats.contacts,
        "interactions": stats.interactions,
    }))
}

pub fn seed() -> Result<(), Box<dyn std::error::Error>> {
    let db = open_store()?;
    print_json(&seed_demo(&db, Utc::now())?)
}
