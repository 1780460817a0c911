//! Genre repository
//!
//! Genres relate to movies many-to-many through the `genre_movies` table.
//! Associations are staged like any other change and written on save.

use tracing::instrument;

use domain_catalog::Genre;

use super::generic::{GenericRepository, Repository};
use super::relations::{movies_by_genre, GenreScope};
use crate::entity::Entity;
use crate::error::DatabaseError;
use crate::session::{GenreMovieLink, Session, StagedChange};

/// Genre queries on top of the generic repository
pub struct GenreRepository<'s> {
    inner: GenericRepository<'s, Genre>,
}

impl<'s> GenreRepository<'s> {
    pub(crate) fn new(session: &'s mut Session) -> Self {
        Self {
            inner: GenericRepository::new(session),
        }
    }

    /// Every genre with its movies loaded
    #[instrument(skip(self))]
    pub async fn get_genres_with_movies(&mut self) -> Result<Vec<Genre>, DatabaseError> {
        let genres = self.inner.get_all().await?;
        self.attach_movies(genres, GenreScope::All).await
    }

    /// Genres named exactly `name`, movies loaded
    ///
    /// Genre names are not unique, so several genres may match.
    #[instrument(skip(self))]
    pub async fn get_genre_by_name(&mut self, name: &str) -> Result<Vec<Genre>, DatabaseError> {
        let sql = format!("{} WHERE name = ? ORDER BY id", Genre::select_sql());
        let genres = sqlx::query_as::<_, Genre>(&sql)
            .bind(name)
            .fetch_all(self.inner.session.connection())
            .await?;

        self.attach_movies(genres, GenreScope::Named(name)).await
    }

    /// Stages an association between `genre_id` and `movie_id`
    pub fn attach_movie(&mut self, genre_id: i64, movie_id: i64) {
        self.inner
            .session
            .stage(StagedChange::Link(GenreMovieLink { genre_id, movie_id }));
    }

    /// Stages removal of the association between `genre_id` and `movie_id`
    pub fn detach_movie(&mut self, genre_id: i64, movie_id: i64) {
        self.inner
            .session
            .stage(StagedChange::Unlink(GenreMovieLink { genre_id, movie_id }));
    }

    async fn attach_movies(
        &mut self,
        mut genres: Vec<Genre>,
        scope: GenreScope<'_>,
    ) -> Result<Vec<Genre>, DatabaseError> {
        if genres.is_empty() {
            return Ok(genres);
        }

        let mut movies = movies_by_genre(self.inner.session.connection(), scope).await?;
        for genre in &mut genres {
            genre.movies = Some(movies.remove(&genre.id).unwrap_or_default());
        }

        Ok(genres)
    }
}

delegate_repository!(GenreRepository, Genre);
