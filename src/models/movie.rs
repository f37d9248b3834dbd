//! Movie record shared by the catalog, the cache and the watchlist.

use serde::{Deserialize, Serialize};

/// Integer id addressing a movie in the catalog
pub type MovieId = u64;

// == Movie ==
/// A movie as stored in the catalog.
///
/// Loaded copies are never mutated; the cache hands them out behind `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub actors: Vec<String>,
}

impl Movie {
    pub fn new(id: MovieId, title: impl Into<String>, year: Option<u32>) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            actors: Vec::new(),
        }
    }

    /// Builder-style helper for attaching the cast.
    pub fn with_actors<I, S>(mut self, actors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actors = actors.into_iter().map(Into::into).collect();
        self
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.year {
            Some(year) => write!(f, "{} ({})", self.title, year),
            None => write!(f, "{}", self.title),
        }
    }
}
