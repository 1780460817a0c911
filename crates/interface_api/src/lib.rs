//! HTTP API Layer
//!
//! This crate provides the REST API for the movie catalog using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One module per resource; each request runs in its own
//!   unit of work
//! - **Middleware**: Request logging keyed by request id
//! - **DTOs**: Public views of entities and query-string parameters
//! - **Error Handling**: Not-found maps to 404, store failures to 500
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    http::HeaderName,
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use infra_db::DatabasePool;

use crate::handlers::{actors, biographies, genres, health, movies};
use crate::middleware::{log_requests, REQUEST_ID_HEADER};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: DatabasePool,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(pool: DatabasePool) -> Router {
    let state = AppState { pool };
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let actor_routes = Router::new()
        .route("/", get(actors::list_actors).post(actors::create_actor))
        .route("/movies", get(actors::list_actors_with_movies))
        .route("/biography", get(actors::list_actors_with_biography))
        .route("/name", get(actors::find_actors_by_name))
        .route("/:id", get(actors::get_actor).put(actors::update_actor));

    let movie_routes = Router::new()
        .route("/", get(movies::list_movies))
        .route("/name", get(movies::find_movies_by_name))
        .route("/actor/:id", get(movies::list_movies_by_actor))
        .route("/:id", get(movies::get_movie));

    let genre_routes = Router::new()
        .route("/", get(genres::list_genres).post(genres::create_genre))
        .route("/movies", get(genres::list_genres_with_movies))
        .route("/name", get(genres::find_genres_by_name))
        .route("/:id", get(genres::get_genre));

    let biography_routes = Router::new()
        .route("/", get(biographies::list_biographies))
        .route("/:id", get(biographies::get_biography));

    let api_routes = Router::new()
        .nest("/actors", actor_routes)
        .nest("/movies", movie_routes)
        .nest("/genres", genre_routes)
        .nest("/biographies", biography_routes)
        .layer(axum_middleware::from_fn(log_requests));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
