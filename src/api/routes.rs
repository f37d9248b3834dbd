//! API Routes
//!
//! Configures the Axum router with all watchlist service endpoints.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_to_watchlist_handler, cache_stats_handler, clear_watchlist_handler,
    create_movie_handler, delete_catalog_movie_handler, get_catalog_movie_handler,
    get_watchlist_movie_handler, health_handler, list_catalog_handler, list_watchlist_handler,
    remove_from_watchlist_handler, watchlist_length_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/health` - Health check
/// - `POST /api/movies` - Add a movie to the catalog
/// - `GET /api/movies` - List the catalog
/// - `GET /api/movies/:id` - Fetch a catalog movie
/// - `DELETE /api/movies/:id` - Delete a catalog movie
/// - `GET /api/watchlist` - List watchlist movies in order
/// - `DELETE /api/watchlist` - Clear the watchlist
/// - `GET /api/watchlist/length` - Watchlist length
/// - `GET /api/watchlist/stats` - Movie cache statistics
/// - `PUT /api/watchlist/:id` - Add a movie to the watchlist
/// - `GET /api/watchlist/:id` - Fetch a watchlist movie
/// - `DELETE /api/watchlist/:id` - Remove a movie from the watchlist
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_handler))
        .route(
            "/api/movies",
            get(list_catalog_handler).post(create_movie_handler),
        )
        .route(
            "/api/movies/:id",
            get(get_catalog_movie_handler).delete(delete_catalog_movie_handler),
        )
        .route(
            "/api/watchlist",
            get(list_watchlist_handler).delete(clear_watchlist_handler),
        )
        .route("/api/watchlist/length", get(watchlist_length_handler))
        .route("/api/watchlist/stats", get(cache_stats_handler))
        .route(
            "/api/watchlist/:id",
            put(add_to_watchlist_handler)
                .get(get_watchlist_movie_handler)
                .delete(remove_from_watchlist_handler),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
