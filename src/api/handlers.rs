//! API Handlers
//!
//! HTTP request handlers for the catalog and watchlist endpoints.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::models::{
    HealthResponse, LengthResponse, MessageResponse, Movie, MovieId, MovieListResponse,
    MovieResponse, NewMovie, StatsResponse,
};
use crate::repository::{InMemoryMovieRepository, MovieRepository};
use crate::watchlist::{parse_movie_id, validate_movie_id, WatchlistModel};

/// Catalog handle shared by the cache and the catalog endpoints
pub type SharedCatalog = Arc<InMemoryMovieRepository>;

/// Application state shared across all handlers.
///
/// The watchlist sits behind a single mutex held for the whole of each
/// operation, so membership checks and the mutation they guard are atomic.
#[derive(Clone)]
pub struct AppState {
    /// The watchlist and its movie cache
    pub watchlist: Arc<Mutex<WatchlistModel<SharedCatalog>>>,
    /// Movie catalog, written directly by the catalog endpoints
    pub catalog: SharedCatalog,
}

impl AppState {
    /// Creates a new AppState with an empty watchlist over `catalog`.
    pub fn new(catalog: SharedCatalog, ttl_seconds: u64) -> Self {
        let model = WatchlistModel::new(Arc::clone(&catalog), ttl_seconds);
        Self {
            watchlist: Arc::new(Mutex::new(model)),
            catalog,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Seeds the catalog from `movies_seed` when one is configured.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalog = match &config.movies_seed {
            Some(path) => InMemoryMovieRepository::from_json_file(path)?,
            None => InMemoryMovieRepository::new(),
        };
        Ok(Self::new(Arc::new(catalog), config.ttl_seconds))
    }
}

fn movie_id_from_path(raw: &str) -> Result<MovieId> {
    validate_movie_id(parse_movie_id(raw)?)
}

// == Health ==

/// Handler for GET /api/health
pub async fn health_handler() -> Json<HealthResponse> {
    info!("Health check endpoint hit");
    Json(HealthResponse::healthy())
}

// == Catalog ==

/// Handler for POST /api/movies
///
/// Writes straight to the catalog; cached copies are not updated.
pub async fn create_movie_handler(
    State(state): State<AppState>,
    Json(req): Json<NewMovie>,
) -> Result<(StatusCode, Json<MovieResponse>)> {
    let movie = state.catalog.insert(req)?;
    Ok((StatusCode::CREATED, Json(MovieResponse::new(movie))))
}

/// Handler for GET /api/movies
pub async fn list_catalog_handler(
    State(state): State<AppState>,
) -> Result<Json<MovieListResponse>> {
    let movies = state.catalog.list()?;
    Ok(Json(MovieListResponse::new(movies)))
}

/// Handler for GET /api/movies/:id
///
/// Reads the catalog directly, bypassing the watchlist cache.
pub async fn get_catalog_movie_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MovieResponse>> {
    let id = movie_id_from_path(&raw_id)?;
    let movie = state.catalog.get_by_id(id)?;
    Ok(Json(MovieResponse::new(movie)))
}

/// Handler for DELETE /api/movies/:id
pub async fn delete_catalog_movie_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = movie_id_from_path(&raw_id)?;
    let movie = state.catalog.delete(id)?;
    Ok(Json(MessageResponse::new(format!(
        "Movie '{}' deleted successfully",
        movie.title
    ))))
}

// == Watchlist ==

/// Handler for PUT /api/watchlist/:id
pub async fn add_to_watchlist_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<(StatusCode, Json<MovieResponse>)> {
    let id = parse_movie_id(&raw_id)?;
    let movie = state.watchlist.lock().await.add_movie(id)?;
    Ok((
        StatusCode::CREATED,
        Json(MovieResponse::new(Movie::clone(&movie))),
    ))
}

/// Handler for DELETE /api/watchlist/:id
pub async fn remove_from_watchlist_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_movie_id(&raw_id)?;
    state.watchlist.lock().await.remove_movie(id)?;
    Ok(Json(MessageResponse::new(format!(
        "Movie with ID {} removed from the watchlist",
        id
    ))))
}

/// Handler for DELETE /api/watchlist
pub async fn clear_watchlist_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.watchlist.lock().await.clear_watchlist();
    Json(MessageResponse::new("Watchlist cleared"))
}

/// Handler for GET /api/watchlist
pub async fn list_watchlist_handler(
    State(state): State<AppState>,
) -> Result<Json<MovieListResponse>> {
    let movies = state.watchlist.lock().await.list_movies()?;
    Ok(Json(MovieListResponse::new(
        movies.iter().map(|m| Movie::clone(m)).collect(),
    )))
}

/// Handler for GET /api/watchlist/:id
pub async fn get_watchlist_movie_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MovieResponse>> {
    let id = parse_movie_id(&raw_id)?;
    let movie = state.watchlist.lock().await.get_movie(id)?;
    Ok(Json(MovieResponse::new(Movie::clone(&movie))))
}

/// Handler for GET /api/watchlist/length
pub async fn watchlist_length_handler(State(state): State<AppState>) -> Json<LengthResponse> {
    let length = state.watchlist.lock().await.length();
    Json(LengthResponse::new(length))
}

/// Handler for GET /api/watchlist/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let watchlist = state.watchlist.lock().await;
    Json(StatsResponse::new(
        &watchlist.cache_stats(),
        watchlist.ttl_seconds(),
    ))
}
