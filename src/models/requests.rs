//! Request DTOs for the watchlist service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Maximum allowed title length in characters
pub const MAX_TITLE_LENGTH: usize = 256;

/// Request body for adding a movie to the catalog (POST /api/movies)
///
/// # Fields
/// - `title`: Movie title, unique across the catalog
/// - `year`: Optional release year
/// - `actors`: Optional cast list
#[derive(Debug, Clone, Deserialize)]
pub struct NewMovie {
    /// The movie title
    pub title: String,
    /// Release year
    #[serde(default)]
    pub year: Option<u32>,
    /// Cast members
    #[serde(default)]
    pub actors: Vec<String>,
}

impl NewMovie {
    /// Convenience constructor used by seeding code and tests.
    pub fn new(title: impl Into<String>, year: Option<u32>) -> Self {
        Self {
            title: title.into(),
            year,
            actors: Vec::new(),
        }
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        if self.title.chars().count() > MAX_TITLE_LENGTH {
            return Some(format!(
                "Title exceeds maximum length of {} characters",
                MAX_TITLE_LENGTH
            ));
        }
        if self.actors.iter().any(|a| a.trim().is_empty()) {
            return Some("Actor names cannot be empty".to_string());
        }
        None
    }
}
