//! Read side the engine depends on.

use crate::contact::Contact;
use crate::error::Result;
use crate::settings::Settings;

/// Where the engine reads contacts and settings from.
///
/// Implemented by [`crate::storage::ContactDb`]; tests can supply their own.
pub trait ContactSource {
    /// Every stored contact, in storage order.
    fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// Current settings, created with defaults if none are stored yet.
    fn get_settings(&self) -> Result<Settings>;
}
