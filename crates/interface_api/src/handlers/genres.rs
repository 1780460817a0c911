//! Genre handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use domain_catalog::Genre;
use infra_db::{Repository, UnitOfWork};

use crate::dto::NameQuery;
use crate::{error::ApiError, AppState};

/// Lists all genres
pub async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let genres = uow.genres().get_all().await?;

    debug!("Got list of all genres");
    Ok(Json(genres))
}

/// Lists all genres with their movies
pub async fn list_genres_with_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Genre>>, ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let genres = uow.genres().get_genres_with_movies().await?;

    debug!("Got list of all genres with their movies");
    Ok(Json(genres))
}

/// Finds genres by exact name, movies loaded
pub async fn find_genres_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<Genre>>, ApiError> {
    let name = query
        .name
        .ok_or_else(|| ApiError::NotFound("Genre name parameter missing".to_string()))?;

    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let genres = uow.genres().get_genre_by_name(&name).await?;

    if genres.is_empty() {
        return Err(ApiError::NotFound(format!("No genres named {}", name)));
    }

    debug!(%name, "Got genres by name");
    Ok(Json(genres))
}

/// Gets a genre by ID
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Genre>, ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let genre = uow
        .genres()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Genre {}", id)))?;

    debug!(id, "Got genre");
    Ok(Json(genre))
}

/// Creates a genre
pub async fn create_genre(
    State(state): State<AppState>,
    Json(genre): Json<Genre>,
) -> Result<(StatusCode, Json<Genre>), ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;

    let mut genre = Genre {
        movies: None,
        ..genre
    };
    uow.genres().add(genre.clone());
    uow.save().await?;
    if let Some(id) = uow.last_inserted_id::<Genre>() {
        genre.id = id;
    }
    uow.dispose();

    debug!(id = genre.id, name = %genre.name, "Posted new genre");
    Ok((StatusCode::CREATED, Json(genre)))
}
