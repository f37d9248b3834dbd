//! Watchlist Cache - A movie watchlist service
//!
//! Keeps an ordered, duplicate-free watchlist of movie ids and resolves them
//! through a TTL cache sitting in front of the movie catalog.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod watchlist;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, WatchlistError};
pub use watchlist::WatchlistModel;
