//! Initial catalog content
//!
//! Loaded on startup when `seed_data` is enabled and the catalog is empty.

use tracing::info;

use domain_catalog::{Actor, Biography, Movie};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;
use crate::repositories::Repository;
use crate::unit_of_work::UnitOfWork;

/// The seed actors, ids 1 through 3
pub fn seed_actors() -> Vec<Actor> {
    vec![
        Actor::new(
            "Chuck",
            "Norris",
            "Did not actually walk on the moon without a spacesuit",
        )
        .with_id(1),
        Actor::new("Ryan", "Gosling", "Actually has a girlfriend").with_id(2),
        Actor::new("Ana", "DeArmas", "Is not answering my calls").with_id(3),
    ]
}

/// The seed movies, ids 1 through 4
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie::new("Black Panther", "Wakanda forever", 1).with_id(1),
        Movie::new("Blade Runner 2077", "tfw no gf", 2).with_id(2),
        Movie::new("The Matrix", "which pill?", 1).with_id(3),
        Movie::new("Barbie", "woke mind virus", 3).with_id(4),
    ]
}

pub fn seed_biographies() -> Vec<Biography> {
    vec![Biography::new("Early internet meme.", 1).with_id(1)]
}

/// Inserts the seed catalog unless actors already exist
///
/// Returns `true` when the seed was written.
pub async fn seed_catalog(pool: &DatabasePool) -> Result<bool, DatabaseError> {
    let mut uow = UnitOfWork::begin(pool).await?;

    if !uow.actors().get_all().await?.is_empty() {
        info!("Catalog already populated, skipping seed");
        uow.dispose();
        return Ok(false);
    }

    uow.actors().add_range(seed_actors());
    uow.movies().add_range(seed_movies());
    uow.biographies().add_range(seed_biographies());
    let written = uow.save().await?;
    uow.dispose();

    info!(rows = written, "Seeded catalog");
    Ok(true)
}
