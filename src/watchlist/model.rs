//! Watchlist Model Module
//!
//! Validated watchlist operations combining the id store with the movie cache.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::cache::{CacheStats, MovieCache};
use crate::error::{Result, WatchlistError};
use crate::models::{Movie, MovieId};
use crate::repository::MovieRepository;
use crate::watchlist::WatchlistStore;

// == Id Validation ==
/// Caller-supplied id before validation. Wide enough to hold every
/// `MovieId` as well as negative input.
pub type RawMovieId = i128;

/// Parses a textual movie id, as received in a request path.
///
/// Only checks that the text is an integer; range is checked by
/// [`validate_movie_id`] so every entry point reports negatives the same way.
pub fn parse_movie_id(raw: &str) -> Result<RawMovieId> {
    raw.trim().parse::<RawMovieId>().map_err(|_| {
        error!("Invalid movie id: {}", raw);
        WatchlistError::InvalidId(raw.to_string())
    })
}

/// Checks that a raw id is a non-negative integer within the id range.
pub fn validate_movie_id(raw: RawMovieId) -> Result<MovieId> {
    MovieId::try_from(raw).map_err(|_| {
        error!("Invalid movie id: {}", raw);
        WatchlistError::InvalidId(raw.to_string())
    })
}

// == Watchlist Model ==
/// A single watchlist and the cache used to resolve its movies.
///
/// Every operation validates in the same order: the id itself, then the
/// membership precondition, then existence in the repository through the
/// cache. No operation mutates the list unless all of its checks pass.
///
/// The model is not synchronized. Callers sharing it across tasks must hold
/// one lock around each whole call.
#[derive(Debug)]
pub struct WatchlistModel<R> {
    store: WatchlistStore,
    cache: MovieCache<R>,
}

impl<R: MovieRepository> WatchlistModel<R> {
    // == Constructor ==
    /// Creates an empty watchlist whose cache keeps movies for `ttl_seconds`.
    pub fn new(repository: R, ttl_seconds: u64) -> Self {
        Self {
            store: WatchlistStore::new(),
            cache: MovieCache::new(repository, ttl_seconds),
        }
    }

    // == Add ==
    /// Appends a movie to the watchlist and returns it.
    ///
    /// # Errors
    /// - `InvalidId` if `movie_id` is negative
    /// - `DuplicateEntry` if the movie is already listed
    /// - `NotFound` if the repository has no such movie
    pub fn add_movie(&mut self, movie_id: impl Into<RawMovieId>) -> Result<Arc<Movie>> {
        let movie_id = movie_id.into();
        info!("Received request to add movie with ID {} to the watchlist", movie_id);

        let id = validate_movie_id(movie_id)?;

        if self.store.contains(id) {
            error!("Movie with ID {} already exists in the watchlist", id);
            return Err(WatchlistError::DuplicateEntry(id));
        }

        // The lookup both confirms existence and warms the cache for listing.
        let movie = self.cache.get(id).inspect_err(|e| {
            error!("Failed to add movie: {}", e);
        })?;

        self.store.append(id);
        info!("Successfully added to watchlist: {}", movie);
        Ok(movie)
    }

    // == Remove ==
    /// Removes a movie from the watchlist.
    ///
    /// The repository is not consulted, so ids whose catalog record has been
    /// deleted can still be removed.
    ///
    /// # Errors
    /// - `InvalidId` if `movie_id` is negative
    /// - `EmptyWatchlist` if nothing is listed
    /// - `NotInWatchlist` if the movie is not listed
    pub fn remove_movie(&mut self, movie_id: impl Into<RawMovieId>) -> Result<()> {
        let movie_id = movie_id.into();
        info!("Received request to remove movie with ID {}", movie_id);

        let id = validate_movie_id(movie_id)?;
        self.check_if_empty()?;

        if !self.store.remove(id) {
            warn!("Movie with ID {} not found in the watchlist", id);
            return Err(WatchlistError::NotInWatchlist(id));
        }

        info!("Successfully removed movie with ID {} from the watchlist", id);
        Ok(())
    }

    // == Clear ==
    /// Empties the watchlist. Clearing an empty watchlist is not an error.
    pub fn clear_watchlist(&mut self) {
        info!("Received request to clear the watchlist");

        if self.store.is_empty() {
            warn!("Clearing an empty watchlist");
        }

        self.store.clear();
        info!("Successfully cleared the watchlist");
    }

    // == List ==
    /// Resolves every listed movie, in watchlist order.
    ///
    /// Fails as a whole if any single movie cannot be resolved.
    pub fn list_movies(&mut self) -> Result<Vec<Arc<Movie>>> {
        self.check_if_empty()?;
        info!("Retrieving all movies in the watchlist");

        let cache = &mut self.cache;
        self.store
            .list()
            .iter()
            .map(|&id| cache.get(id))
            .collect()
    }

    // == Get ==
    /// Resolves a single listed movie.
    ///
    /// # Errors
    /// - `InvalidId` if `movie_id` is negative
    /// - `EmptyWatchlist` if nothing is listed
    /// - `NotInWatchlist` if the movie is not listed
    /// - `NotFound` if the movie is listed but the repository lost it
    pub fn get_movie(&mut self, movie_id: impl Into<RawMovieId>) -> Result<Arc<Movie>> {
        let movie_id = movie_id.into();
        let id = validate_movie_id(movie_id)?;
        self.check_if_empty()?;

        if !self.store.contains(id) {
            error!("Movie with ID {} not found in watchlist", id);
            return Err(WatchlistError::NotInWatchlist(id));
        }

        info!("Retrieving movie with ID {} from the watchlist", id);
        let movie = self.cache.get(id)?;
        info!("Successfully retrieved movie: {}", movie);
        Ok(movie)
    }

    // == Length ==
    /// Number of listed movies. Never fails.
    pub fn length(&self) -> usize {
        let length = self.store.len();
        info!("Retrieving watchlist length: {} movies", length);
        length
    }

    /// Listed ids in watchlist order.
    pub fn movie_ids(&self) -> &[MovieId] {
        self.store.list()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.cache.ttl_seconds()
    }

    fn check_if_empty(&self) -> Result<()> {
        if self.store.is_empty() {
            error!("Watchlist is empty");
            return Err(WatchlistError::EmptyWatchlist);
        }
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::testing::{sample_repository, CountingRepository};
    use crate::repository::InMemoryMovieRepository;

    type TestModel = WatchlistModel<Arc<CountingRepository<InMemoryMovieRepository>>>;

    fn model() -> (TestModel, Arc<CountingRepository<InMemoryMovieRepository>>) {
        let repo = Arc::new(CountingRepository::new(sample_repository()));
        (WatchlistModel::new(Arc::clone(&repo), 60), repo)
    }

    fn ids(movies: &[Arc<Movie>]) -> Vec<MovieId> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_parse_movie_id() {
        assert_eq!(parse_movie_id("5").unwrap(), 5);
        assert_eq!(parse_movie_id(" 7 ").unwrap(), 7);
        assert_eq!(parse_movie_id("-1").unwrap(), -1);
        assert!(matches!(parse_movie_id("abc"), Err(WatchlistError::InvalidId(_))));
        assert!(matches!(parse_movie_id("1.5"), Err(WatchlistError::InvalidId(_))));
        assert_eq!(
            parse_movie_id("18446744073709551615").unwrap(),
            u64::MAX as RawMovieId
        );
        assert!(matches!(parse_movie_id(""), Err(WatchlistError::InvalidId(_))));
    }

    #[test]
    fn test_validate_movie_id() {
        assert_eq!(validate_movie_id(0).unwrap(), 0);
        assert_eq!(validate_movie_id(12).unwrap(), 12);
        assert_eq!(
            validate_movie_id(-3),
            Err(WatchlistError::InvalidId("-3".to_string()))
        );
        assert_eq!(validate_movie_id(u64::MAX as RawMovieId).unwrap(), u64::MAX);
        assert!(matches!(
            validate_movie_id(u64::MAX as RawMovieId + 1),
            Err(WatchlistError::InvalidId(_))
        ));
    }

    #[test]
    fn test_ids_above_i64_range() {
        let big = i64::MAX as MovieId + 1;
        let repo = InMemoryMovieRepository::with_movies(vec![
            Movie::new(big, "Shrek", None),
            Movie::new(u64::MAX, "Tag", None),
        ]);
        let mut model = WatchlistModel::new(repo, 60);

        model.add_movie(parse_movie_id(&big.to_string()).unwrap()).unwrap();
        model.add_movie(u64::MAX).unwrap();
        assert_eq!(model.movie_ids(), &[big, u64::MAX]);

        assert_eq!(
            model.add_movie(big + 1),
            Err(WatchlistError::NotFound(big + 1))
        );
        assert_eq!(model.get_movie(u64::MAX).unwrap().title, "Tag");
        model.remove_movie(big).unwrap();
        assert_eq!(model.movie_ids(), &[u64::MAX]);
    }

    #[test]
    fn test_add_movie() {
        let (mut model, _) = model();

        let movie = model.add_movie(1).unwrap();
        assert_eq!(movie.title, "Shrek");
        assert_eq!(model.length(), 1);
        assert_eq!(model.movie_ids(), &[1]);
    }

    #[test]
    fn test_add_duplicate_movie() {
        let (mut model, _) = model();

        model.add_movie(1).unwrap();
        assert_eq!(model.add_movie(1), Err(WatchlistError::DuplicateEntry(1)));
        assert_eq!(model.length(), 1);
    }

    #[test]
    fn test_add_invalid_id() {
        let (mut model, repo) = model();

        assert!(matches!(model.add_movie(-1), Err(WatchlistError::InvalidId(_))));
        assert_eq!(repo.calls(), 0);
    }

    #[test]
    fn test_add_movie_not_in_repository() {
        let (mut model, _) = model();
        model.add_movie(2).unwrap();

        assert_eq!(model.add_movie(99), Err(WatchlistError::NotFound(99)));
        assert_eq!(model.length(), 1);
        assert_eq!(model.movie_ids(), &[2]);
    }

    #[test]
    fn test_add_lookup_warms_cache() {
        let (mut model, repo) = model();

        model.add_movie(1).unwrap();
        model.add_movie(2).unwrap();
        model.list_movies().unwrap();
        model.get_movie(1).unwrap();

        assert_eq!(repo.calls(), 2, "Movies resolved on add are served from cache");
    }

    #[test]
    fn test_remove_movie() {
        let (mut model, _) = model();
        model.add_movie(3).unwrap();
        model.add_movie(1).unwrap();

        model.remove_movie(3).unwrap();
        assert_eq!(model.movie_ids(), &[1]);
    }

    #[test]
    fn test_remove_from_empty_watchlist() {
        let (mut model, _) = model();
        assert_eq!(model.remove_movie(1), Err(WatchlistError::EmptyWatchlist));
    }

    #[test]
    fn test_remove_invalid_id_on_empty_watchlist() {
        let (mut model, _) = model();
        assert!(matches!(model.remove_movie(-1), Err(WatchlistError::InvalidId(_))));
    }

    #[test]
    fn test_remove_movie_not_in_watchlist() {
        let (mut model, _) = model();
        model.add_movie(1).unwrap();

        assert_eq!(model.remove_movie(2), Err(WatchlistError::NotInWatchlist(2)));
        assert_eq!(model.length(), 1);
    }

    #[test]
    fn test_remove_movie_deleted_from_repository() {
        let repo = Arc::new(sample_repository());
        let mut model = WatchlistModel::new(Arc::clone(&repo), 0);
        model.add_movie(1).unwrap();
        repo.delete(1).unwrap();

        model.remove_movie(1).unwrap();
        assert_eq!(model.length(), 0);
    }

    #[test]
    fn test_clear_watchlist() {
        let (mut model, _) = model();
        model.add_movie(1).unwrap();
        model.add_movie(2).unwrap();

        model.clear_watchlist();
        assert_eq!(model.length(), 0);
        assert_eq!(model.list_movies(), Err(WatchlistError::EmptyWatchlist));
    }

    #[test]
    fn test_clear_empty_watchlist() {
        let (mut model, _) = model();
        model.clear_watchlist();
        model.clear_watchlist();
        assert_eq!(model.length(), 0);
    }

    #[test]
    fn test_list_movies_keeps_order() {
        let (mut model, _) = model();
        model.add_movie(3).unwrap();
        model.add_movie(1).unwrap();
        model.add_movie(2).unwrap();

        let movies = model.list_movies().unwrap();
        assert_eq!(ids(&movies), vec![3, 1, 2]);
    }

    #[test]
    fn test_list_empty_watchlist() {
        let (mut model, _) = model();
        assert_eq!(model.list_movies(), Err(WatchlistError::EmptyWatchlist));
    }

    #[test]
    fn test_list_aborts_on_unresolved_movie() {
        let repo = Arc::new(sample_repository());
        let mut model = WatchlistModel::new(Arc::clone(&repo), 0);
        model.add_movie(1).unwrap();
        model.add_movie(2).unwrap();
        repo.delete(2).unwrap();

        assert_eq!(model.list_movies(), Err(WatchlistError::NotFound(2)));
        assert_eq!(model.length(), 2, "Listing never drops ids");
    }

    #[test]
    fn test_get_movie() {
        let (mut model, _) = model();
        model.add_movie(2).unwrap();

        let movie = model.get_movie(2).unwrap();
        assert_eq!(movie.title, "Finding Nemo");
    }

    #[test]
    fn test_get_movie_error_precedence() {
        let (mut model, _) = model();

        assert!(matches!(model.get_movie(-5), Err(WatchlistError::InvalidId(_))));
        assert_eq!(model.get_movie(1), Err(WatchlistError::EmptyWatchlist));

        model.add_movie(1).unwrap();
        assert_eq!(model.get_movie(3), Err(WatchlistError::NotInWatchlist(3)));
    }

    #[test]
    fn test_get_movie_lost_by_repository() {
        let repo = Arc::new(sample_repository());
        let mut model = WatchlistModel::new(Arc::clone(&repo), 0);
        model.add_movie(3).unwrap();
        repo.delete(3).unwrap();

        assert_eq!(model.get_movie(3), Err(WatchlistError::NotFound(3)));
    }

    #[test]
    fn test_length_of_empty_watchlist() {
        let (model, _) = model();
        assert_eq!(model.length(), 0);
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let (mut model, _) = model();
        model.add_movie(1).unwrap();
        let before = model.length();

        model.add_movie(2).unwrap();
        model.remove_movie(2).unwrap();

        assert_eq!(model.length(), before);
        let movies = model.list_movies().unwrap();
        assert!(!ids(&movies).contains(&2));
    }

    #[test]
    fn test_cache_stats_forwarded() {
        let (mut model, _) = model();
        model.add_movie(1).unwrap();
        model.get_movie(1).unwrap();

        let stats = model.cache_stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(model.ttl_seconds(), 60);
    }
}
