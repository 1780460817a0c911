//! Actor repository

use tracing::{debug, instrument};

use domain_catalog::Actor;

use super::generic::{GenericRepository, Repository};
use super::relations::{all_biographies, movies_by_actor, ActorScope};
use crate::entity::Entity;
use crate::error::DatabaseError;
use crate::session::Session;

/// Actor queries on top of the generic repository
pub struct ActorRepository<'s> {
    inner: GenericRepository<'s, Actor>,
}

impl<'s> ActorRepository<'s> {
    pub(crate) fn new(session: &'s mut Session) -> Self {
        Self {
            inner: GenericRepository::new(session),
        }
    }

    /// Every actor with its movies loaded
    ///
    /// Actors without movies come back with an empty list.
    #[instrument(skip(self))]
    pub async fn get_actors_with_movies(&mut self) -> Result<Vec<Actor>, DatabaseError> {
        let actors = self.inner.get_all().await?;
        self.attach_movies(actors, ActorScope::All).await
    }

    /// Every actor with its biography loaded, when it has one
    #[instrument(skip(self))]
    pub async fn get_actors_with_biography(&mut self) -> Result<Vec<Actor>, DatabaseError> {
        let mut actors = self.inner.get_all().await?;

        let mut biographies = all_biographies(self.inner.session.connection()).await?;
        for actor in &mut actors {
            actor.biography = biographies.remove(&actor.id);
        }

        Ok(actors)
    }

    /// Actors whose first and last name match exactly, movies loaded
    #[instrument(skip(self))]
    pub async fn get_actors_by_full_name(
        &mut self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<Actor>, DatabaseError> {
        let sql = format!(
            "{} WHERE first_name = ? AND last_name = ? ORDER BY id",
            Actor::select_sql()
        );
        let actors = sqlx::query_as::<_, Actor>(&sql)
            .bind(first_name)
            .bind(last_name)
            .fetch_all(self.inner.session.connection())
            .await?;

        debug!(matches = actors.len(), "Looked up actors by full name");
        let scope = ActorScope::FullName {
            first_name,
            last_name,
        };
        self.attach_movies(actors, scope).await
    }

    async fn attach_movies(
        &mut self,
        mut actors: Vec<Actor>,
        scope: ActorScope<'_>,
    ) -> Result<Vec<Actor>, DatabaseError> {
        if actors.is_empty() {
            return Ok(actors);
        }

        let mut movies = movies_by_actor(self.inner.session.connection(), scope).await?;
        for actor in &mut actors {
            actor.movies = Some(movies.remove(&actor.id).unwrap_or_default());
        }

        Ok(actors)
    }
}

delegate_repository!(ActorRepository, Actor);
