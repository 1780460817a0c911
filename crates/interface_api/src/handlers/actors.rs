//! Actor handlers
//!
//! Reads are returned as `ActorDto`. Writes echo the stored actor.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use domain_catalog::Actor;
use infra_db::{Repository, UnitOfWork};

use crate::dto::actor::to_dtos;
use crate::dto::{ActorDto, FullNameQuery};
use crate::{error::ApiError, AppState};

/// Lists all actors
pub async fn list_actors(State(state): State<AppState>) -> Result<Json<Vec<ActorDto>>, ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let actors = uow.actors().get_all().await?;

    debug!("Got list of all actors");
    Ok(Json(to_dtos(actors)))
}

/// Lists all actors with their movies
pub async fn list_actors_with_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActorDto>>, ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let actors = uow.actors().get_actors_with_movies().await?;

    debug!("Got list of all actors with their movies");
    Ok(Json(to_dtos(actors)))
}

/// Lists all actors with their biography
pub async fn list_actors_with_biography(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActorDto>>, ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let actors = uow.actors().get_actors_with_biography().await?;

    debug!("Got list of all actors with their biography");
    Ok(Json(to_dtos(actors)))
}

/// Finds actors by exact first and last name
///
/// Both parameters are required; a missing one matches nothing.
pub async fn find_actors_by_name(
    State(state): State<AppState>,
    Query(query): Query<FullNameQuery>,
) -> Result<Json<Vec<ActorDto>>, ApiError> {
    let (first_name, last_name) = query
        .full_name()
        .ok_or_else(|| ApiError::NotFound("Actor name parameters missing".to_string()))?;

    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let actors = uow
        .actors()
        .get_actors_by_full_name(first_name, last_name)
        .await?;

    if actors.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No actors named {} {}",
            first_name, last_name
        )));
    }

    debug!(first_name, last_name, "Got actors by name");
    Ok(Json(to_dtos(actors)))
}

/// Gets an actor by ID
pub async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ActorDto>, ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let actor = uow
        .actors()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Actor {}", id)))?;

    debug!(id, "Got actor");
    Ok(Json(actor.into()))
}

/// Replaces the actor with the given ID
///
/// The route id wins over any id in the body.
pub async fn update_actor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(actor): Json<Actor>,
) -> Result<(StatusCode, Json<Actor>), ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;

    if uow.actors().get_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound(format!("Actor {}", id)));
    }

    let actor = actor.without_relations().with_id(id);
    uow.actors().update(actor.clone());
    uow.save().await?;
    uow.dispose();

    debug!(id, "Updated actor");
    Ok((StatusCode::CREATED, Json(actor)))
}

/// Creates an actor
pub async fn create_actor(
    State(state): State<AppState>,
    Json(actor): Json<Actor>,
) -> Result<(StatusCode, Json<Actor>), ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;

    let mut actor = actor.without_relations();
    uow.actors().add(actor.clone());
    uow.save().await?;
    if let Some(id) = uow.last_inserted_id::<Actor>() {
        actor.id = id;
    }
    uow.dispose();

    debug!(
        id = actor.id,
        first_name = %actor.first_name,
        last_name = %actor.last_name,
        "Posted new actor"
    );
    Ok((StatusCode::CREATED, Json(actor)))
}
