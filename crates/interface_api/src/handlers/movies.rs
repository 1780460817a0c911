//! Movie handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use domain_catalog::Movie;
use infra_db::{Repository, UnitOfWork};

use crate::dto::NameQuery;
use crate::{error::ApiError, AppState};

/// Lists all movies
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let movies = uow.movies().get_all().await?;

    debug!("Got list of all movies");
    Ok(Json(movies))
}

/// Finds movies by exact name
pub async fn find_movies_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let name = query
        .name
        .ok_or_else(|| ApiError::NotFound("Movie name parameter missing".to_string()))?;

    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let movies = uow
        .movies()
        .find(|movie: &Movie| movie.name == name)
        .await?;

    if movies.is_empty() {
        return Err(ApiError::NotFound(format!("No movies named {}", name)));
    }

    debug!(%name, "Got movies by name");
    Ok(Json(movies))
}

/// Gets a movie by ID
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let movie = uow
        .movies()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Movie {}", id)))?;

    debug!(id, "Got movie");
    Ok(Json(movie))
}

/// Lists the movies of an actor; empty when there are none
pub async fn list_movies_by_actor(
    State(state): State<AppState>,
    Path(actor_id): Path<i64>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let movies = uow.movies().get_by_actor_id(actor_id).await?;

    debug!(actor_id, count = movies.len(), "Got movies by actor");
    Ok(Json(movies))
}
