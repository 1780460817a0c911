//! Biography handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use domain_catalog::Biography;
use infra_db::{Repository, UnitOfWork};

use crate::{error::ApiError, AppState};

/// Lists all biographies
pub async fn list_biographies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Biography>>, ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let biographies = uow.biographies().get_all().await?;

    debug!("Got list of all biographies");
    Ok(Json(biographies))
}

/// Gets a biography by ID
pub async fn get_biography(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Biography>, ApiError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let biography = uow
        .biographies()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Biography {}", id)))?;

    debug!(id, "Got biography");
    Ok(Json(biography))
}
