//! Response DTOs for the watchlist service API
//!
//! Defines the structure of outgoing HTTP response bodies. Every success body
//! carries `"status": "success"`.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::Movie;

const SUCCESS: &str = "success";

/// Response body for operations that only report an outcome
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub status: String,
    /// Human-readable outcome
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: SUCCESS.to_string(),
            message: message.into(),
        }
    }
}

/// Response body carrying a single movie
#[derive(Debug, Clone, Serialize)]
pub struct MovieResponse {
    pub status: String,
    pub movie: Movie,
}

impl MovieResponse {
    /// Creates a new MovieResponse
    pub fn new(movie: Movie) -> Self {
        Self {
            status: SUCCESS.to_string(),
            movie,
        }
    }
}

/// Response body carrying an ordered list of movies
#[derive(Debug, Clone, Serialize)]
pub struct MovieListResponse {
    pub status: String,
    pub movies: Vec<Movie>,
}

impl MovieListResponse {
    /// Creates a new MovieListResponse
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            status: SUCCESS.to_string(),
            movies,
        }
    }
}

/// Response body for the watchlist length endpoint (GET /api/watchlist/length)
#[derive(Debug, Clone, Serialize)]
pub struct LengthResponse {
    pub status: String,
    /// Number of movies on the watchlist
    pub length: usize,
}

impl LengthResponse {
    /// Creates a new LengthResponse
    pub fn new(length: usize) -> Self {
        Self {
            status: SUCCESS.to_string(),
            length,
        }
    }
}

/// Response body for the cache stats endpoint (GET /api/watchlist/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses (absent or expired)
    pub misses: u64,
    /// Number of misses caused by an expired entry
    pub expirations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Configured freshness window
    pub ttl_seconds: u64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, ttl_seconds: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_seconds,
        }
    }
}

/// Response body for the health endpoint (GET /api/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status
    pub status: String,
    pub message: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: SUCCESS.to_string(),
            message: "Service is running".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
