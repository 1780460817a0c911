//! Movie repository

use domain_catalog::Movie;

use super::generic::GenericRepository;
use crate::entity::Entity;
use crate::error::DatabaseError;
use crate::session::Session;

/// Movie queries on top of the generic repository
pub struct MovieRepository<'s> {
    inner: GenericRepository<'s, Movie>,
}

impl<'s> MovieRepository<'s> {
    pub(crate) fn new(session: &'s mut Session) -> Self {
        Self {
            inner: GenericRepository::new(session),
        }
    }

    /// Movies whose actor is `actor_id`; empty when the actor has none or does not exist
    pub async fn get_by_actor_id(&mut self, actor_id: i64) -> Result<Vec<Movie>, DatabaseError> {
        let sql = format!("{} WHERE actor_id = ? ORDER BY id", Movie::select_sql());
        let movies = sqlx::query_as::<_, Movie>(&sql)
            .bind(actor_id)
            .fetch_all(self.inner.session.connection())
            .await?;

        Ok(movies)
    }
}

delegate_repository!(MovieRepository, Movie);
