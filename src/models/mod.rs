//! Domain record and request/response models for the watchlist service
//!
//! `Movie` is the catalog record; the request and response DTOs are used for
//! serializing/deserializing HTTP bodies.

pub mod movie;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use movie::{Movie, MovieId};
pub use requests::NewMovie;
pub use responses::{
    HealthResponse, LengthResponse, MessageResponse, MovieListResponse, MovieResponse,
    StatsResponse,
};
