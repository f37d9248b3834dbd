//! In-memory movie catalog.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::Context;
use tracing::{debug, info};

use crate::error::{Result, WatchlistError};
use crate::models::{Movie, MovieId, NewMovie};
use crate::repository::MovieRepository;

// == In-Memory Movie Repository ==
/// Movie catalog keyed by id, safe to share between threads.
///
/// Ids are assigned in increasing order and never reused. Titles are unique.
#[derive(Debug)]
pub struct InMemoryMovieRepository {
    inner: RwLock<Catalog>,
}

#[derive(Debug)]
struct Catalog {
    movies: BTreeMap<MovieId, Movie>,
    next_id: MovieId,
}

impl InMemoryMovieRepository {
    // == Constructor ==
    /// Creates an empty catalog. The first inserted movie gets id 1.
    pub fn new() -> Self {
        Self::with_movies(Vec::new())
    }

    /// Creates a catalog pre-populated with the given movies, keeping their ids.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        let movies: BTreeMap<MovieId, Movie> = movies.into_iter().map(|m| (m.id, m)).collect();
        let next_id = movies.keys().next_back().map_or(1, |id| id.saturating_add(1));

        Self {
            inner: RwLock::new(Catalog { movies, next_id }),
        }
    }

    /// Loads a catalog from a JSON array of movies.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read movie seed file {}", path.display()))?;
        let movies: Vec<Movie> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse movie seed file {}", path.display()))?;

        info!("Loaded {} movies from {}", movies.len(), path.display());
        Ok(Self::with_movies(movies))
    }

    // == Insert ==
    /// Adds a movie to the catalog and returns the stored record.
    pub fn insert(&self, new_movie: NewMovie) -> Result<Movie> {
        if let Some(error_msg) = new_movie.validate() {
            return Err(WatchlistError::InvalidRequest(error_msg));
        }

        let title = new_movie.title.trim().to_string();
        let mut catalog = self.write()?;

        if catalog.movies.values().any(|m| m.title == title) {
            return Err(WatchlistError::InvalidRequest(format!(
                "Movie with title '{}' already exists",
                title
            )));
        }

        let id = catalog.next_id;
        if catalog.movies.contains_key(&id) {
            return Err(WatchlistError::Internal("movie id space exhausted".to_string()));
        }
        catalog.next_id = id.saturating_add(1);

        let movie = Movie {
            id,
            title,
            year: new_movie.year,
            actors: new_movie.actors,
        };
        catalog.movies.insert(id, movie.clone());

        info!("Movie added to catalog: {} (ID {})", movie, id);
        Ok(movie)
    }

    // == Delete ==
    /// Removes a movie from the catalog and returns it.
    pub fn delete(&self, id: MovieId) -> Result<Movie> {
        let removed = self.write()?.movies.remove(&id);
        match removed {
            Some(movie) => {
                info!("Movie deleted from catalog: {} (ID {})", movie, id);
                Ok(movie)
            }
            None => Err(WatchlistError::NotFound(id)),
        }
    }

    // == List ==
    /// Returns all movies ordered by id.
    pub fn list(&self) -> Result<Vec<Movie>> {
        Ok(self.read()?.movies.values().cloned().collect())
    }

    /// Number of movies in the catalog.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.movies.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Catalog>> {
        self.inner
            .read()
            .map_err(|_| WatchlistError::Internal("movie catalog lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Catalog>> {
        self.inner
            .write()
            .map_err(|_| WatchlistError::Internal("movie catalog lock poisoned".to_string()))
    }
}

impl Default for InMemoryMovieRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieRepository for InMemoryMovieRepository {
    fn get_by_id(&self, id: MovieId) -> Result<Movie> {
        debug!("Catalog lookup for movie ID {}", id);
        self.read()?
            .movies
            .get(&id)
            .cloned()
            .ok_or(WatchlistError::NotFound(id))
    }
}
