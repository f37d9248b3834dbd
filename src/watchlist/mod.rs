//! Watchlist Module
//!
//! The ordered list of movie ids a user tracks, and the validated operations
//! that resolve it through the movie cache.

mod model;
mod store;


pub use model::{parse_movie_id, validate_movie_id, RawMovieId, WatchlistModel};
pub use store::WatchlistStore;
