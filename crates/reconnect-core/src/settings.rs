//! Suggestion settings.
//!
//! One `Settings` row lives in the store. It is read once per request and
//! handed to the engine by value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const MAX_COUNT_DAILY: u32 = 50;
const MAX_COUNT_WEEKLY: u32 = 200;

/// Suggestion cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Daily,
    Weekly,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Daily => "daily",
            Mode::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Mode::Daily),
            "weekly" => Ok(Mode::Weekly),
            other => Err(ValidationError::InvalidValue {
                field: "mode",
                message: format!("expected daily or weekly, got '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_count_daily")]
    pub count_daily: u32,
    #[serde(default = "default_count_weekly")]
    pub count_weekly: u32,
    /// Frequency presets offered when creating a contact. Not enforced.
    #[serde(default = "default_frequencies")]
    pub default_frequencies: Vec<u32>,
}

fn default_count_daily() -> u32 {
    3
}
fn default_count_weekly() -> u32 {
    10
}
fn default_frequencies() -> Vec<u32> {
    vec![7, 30, 90]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            count_daily: default_count_daily(),
            count_weekly: default_count_weekly(),
            default_frequencies: default_frequencies(),
        }
    }
}

impl Settings {
    /// How many suggestions `mode` surfaces.
    pub fn count_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Daily => self.count_daily,
            Mode::Weekly => self.count_weekly,
        }
    }

    /// # Errors
    /// Returns the first count or preset outside its allowed range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range("countDaily", self.count_daily, MAX_COUNT_DAILY)?;
        check_range("countWeekly", self.count_weekly, MAX_COUNT_WEEKLY)?;
        if let Some(&bad) = self.default_frequencies.iter().find(|&&f| f == 0) {
            return Err(ValidationError::OutOfRange {
                field: "defaultFrequencies",
                min: 1,
                max: i64::from(u32::MAX),
                value: i64::from(bad),
            });
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: u32, max: u32) -> Result<(), ValidationError> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min: 1,
            max: i64::from(max),
            value: i64::from(value),
        })
    }
}
