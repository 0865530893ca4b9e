//! Director types

use serde::{Deserialize, Serialize};

/// Director age on the wire: an integer when known, the string `"Unknown"`
/// in the sentinel record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Age {
    Years(u32),
    Unknown(String),
}

impl From<u32> for Age {
    fn from(years: u32) -> Self {
        Age::Years(years)
    }
}

/// A director record, keyed by movie title in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    pub name: String,
    pub age: Age,
    pub awards: Vec<String>,
}

impl Director {
    pub fn new(name: impl Into<String>, age: impl Into<Age>, awards: Vec<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            awards,
        }
    }

    /// The placeholder returned when no director is on file for a title.
    pub fn unknown() -> Self {
        Self {
            name: "Unknown".to_string(),
            age: Age::Unknown("Unknown".to_string()),
            awards: vec!["Unknown".to_string()],
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self.age, Age::Unknown(_))
    }
}
