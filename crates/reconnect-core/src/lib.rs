//! # Reconnect Core Library
//!
//! This library keeps track of the people a user wants to stay in touch with
//! and decides who to reach out to next. The `reconnect` CLI is a thin layer
//! over the same library.
//!
//! ## Architecture
//!
//! - **Records**: contacts, interactions and suggestion settings
//! - **Suggestion engine**: pure ranking of the contact set by how overdue
//!   each contact is, trimmed to the daily or weekly count
//! - **Storage**: SQLite for records and TOML for local configuration
//!
//! ## Key Components
//!
//! - [`suggest()`]: rank a contact snapshot
//! - [`is_due`]: per-contact due check
//! - [`ContactDb`]: record persistence
//! - [`Config`]: application configuration management

pub mod contact;
pub mod error;
pub mod seed;
pub mod settings;
pub mod storage;
pub mod suggest;
pub mod templates;
pub mod time;

pub use contact::{Contact, Interaction, InteractionType, NewContact, NewInteraction, Relationship};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use seed::{seed_demo, SeedSummary};
pub use settings::{Mode, Settings};
pub use storage::{Config, ContactDb, OutputFormat, StoreStats};
pub use suggest::{
    get_suggestions, is_due, overdue_score, suggest, ContactSource, OverdueScore, Suggestion,
    SuggestionRequest,
};
pub use templates::render_templates;
pub use time::Timestamp;
