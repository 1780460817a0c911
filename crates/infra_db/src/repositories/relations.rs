//! Eager loading of relationships
//!
//! Each loader fetches the related rows for every owner in scope with one
//! query and groups them by owner id. The owners are selected in SQL by the
//! same filter the caller used, never by a bound list of ids, so the loaders
//! work for any number of owners.

use std::collections::HashMap;

use sqlx::sqlite::SqliteConnection;
use sqlx::FromRow;

use domain_catalog::{Biography, Movie};

use crate::entity::Entity;
use crate::error::DatabaseError;
use crate::session::GENRE_MOVIES_TABLE;

/// Which actors a relation is loaded for
#[derive(Debug, Clone, Copy)]
pub(crate) enum ActorScope<'a> {
    All,
    FullName {
        first_name: &'a str,
        last_name: &'a str,
    },
}

/// Which genres a relation is loaded for
#[derive(Debug, Clone, Copy)]
pub(crate) enum GenreScope<'a> {
    All,
    Named(&'a str),
}

const MOVIE_COLUMNS: &str =
    "m.id AS id, m.name AS name, m.description AS description, m.actor_id AS actor_id";

/// Movies owned by the actors in `scope`
pub(crate) async fn movies_by_actor(
    conn: &mut SqliteConnection,
    scope: ActorScope<'_>,
) -> Result<HashMap<i64, Vec<Movie>>, DatabaseError> {
    let movies = match scope {
        ActorScope::All => {
            let sql = format!("{} ORDER BY id", Movie::select_sql());
            sqlx::query_as::<_, Movie>(&sql).fetch_all(conn).await?
        }
        ActorScope::FullName {
            first_name,
            last_name,
        } => {
            let sql = format!(
                "SELECT {} FROM movies m JOIN actors a ON a.id = m.actor_id \
                 WHERE a.first_name = ? AND a.last_name = ? ORDER BY m.id",
                MOVIE_COLUMNS
            );
            sqlx::query_as::<_, Movie>(&sql)
                .bind(first_name)
                .bind(last_name)
                .fetch_all(conn)
                .await?
        }
    };

    let mut grouped: HashMap<i64, Vec<Movie>> = HashMap::new();
    for movie in movies {
        grouped.entry(movie.actor_id).or_default().push(movie);
    }
    Ok(grouped)
}

/// Biography of every actor that has one
pub(crate) async fn all_biographies(
    conn: &mut SqliteConnection,
) -> Result<HashMap<i64, Biography>, DatabaseError> {
    let biographies = sqlx::query_as::<_, Biography>(&Biography::select_sql())
        .fetch_all(conn)
        .await?;

    Ok(biographies
        .into_iter()
        .map(|biography| (biography.actor_id, biography))
        .collect())
}

#[derive(FromRow)]
struct GenreMovieRow {
    genre_id: i64,
    #[sqlx(flatten)]
    movie: Movie,
}

/// Movies associated with the genres in `scope`
pub(crate) async fn movies_by_genre(
    conn: &mut SqliteConnection,
    scope: GenreScope<'_>,
) -> Result<HashMap<i64, Vec<Movie>>, DatabaseError> {
    let base = format!(
        "SELECT gm.genre_id AS genre_id, {} FROM {} gm JOIN movies m ON m.id = gm.movie_id",
        MOVIE_COLUMNS, GENRE_MOVIES_TABLE
    );

    let rows = match scope {
        GenreScope::All => {
            let sql = format!("{} ORDER BY m.id", base);
            sqlx::query_as::<_, GenreMovieRow>(&sql)
                .fetch_all(conn)
                .await?
        }
        GenreScope::Named(name) => {
            let sql = format!(
                "{} JOIN genres g ON g.id = gm.genre_id WHERE g.name = ? ORDER BY m.id",
                base
            );
            sqlx::query_as::<_, GenreMovieRow>(&sql)
                .bind(name)
                .fetch_all(conn)
                .await?
        }
    };

    let mut grouped: HashMap<i64, Vec<Movie>> = HashMap::new();
    for row in rows {
        grouped.entry(row.genre_id).or_default().push(row.movie);
    }
    Ok(grouped)
}
