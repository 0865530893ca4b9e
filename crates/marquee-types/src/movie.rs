//! Movie types

use crate::director::Director;
use serde::{Deserialize, Serialize};

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub genre: String,
    pub year: i32,
}

impl Movie {
    pub fn new(title: impl Into<String>, genre: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            year,
        }
    }
}

/// Add-movie request body
///
/// Every field is optional at the wire level so presence validation happens
/// explicitly in the service layer rather than as a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

/// A movie joined with its director record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieWithDirector {
    #[serde(flatten)]
    pub movie: Movie,
    pub director: Director,
}
