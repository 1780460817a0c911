//! Persistence session and change tracking
//!
//! A `Session` owns one pooled connection and the list of changes staged
//! against it. Reads go straight to the connection; writes are recorded in
//! the `ChangeTracker` and only reach the store when the session is flushed,
//! all inside a single transaction.
//!
//! # Invariants
//!
//! - Staged changes are applied in staging order.
//! - Foreign key checks are deferred to commit, so a movie may be staged
//!   before the actor it references as long as both land in the same flush.
//! - An update or delete that matches no row aborts the whole flush.

use sqlx::pool::PoolConnection;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteConnection};
use sqlx::Connection;
use tracing::{debug, warn};

use crate::entity::{ColumnValue, Entity};
use crate::error::{classify, DatabaseError};
use crate::pool::DatabasePool;

/// Association table between genres and movies
pub(crate) const GENRE_MOVIES_TABLE: &str = "genre_movies";

/// A full row image staged for insert or update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedRow {
    pub entity: &'static str,
    pub table: &'static str,
    pub columns: &'static [&'static str],
    pub id: i64,
    pub values: Vec<ColumnValue>,
}

impl StagedRow {
    /// Captures the current column values of `entity`
    pub fn of<E: Entity>(entity: &E) -> Self {
        Self {
            entity: E::NAME,
            table: E::TABLE,
            columns: E::COLUMNS,
            id: entity.id(),
            values: entity.values(),
        }
    }

    /// `INSERT` statement; the id column is left to the store when `id` is 0
    pub(crate) fn insert_sql(&self) -> String {
        let mut columns: Vec<&str> = Vec::with_capacity(self.columns.len() + 1);
        if self.id != 0 {
            columns.push("id");
        }
        columns.extend_from_slice(self.columns);

        let placeholders = vec!["?"; columns.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            columns.join(", "),
            placeholders
        )
    }

    /// `UPDATE` statement overwriting every mapped column
    pub(crate) fn update_sql(&self) -> String {
        let assignments: Vec<String> = self
            .columns
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect();
        format!("UPDATE {} SET {} WHERE id = ?", self.table, assignments.join(", "))
    }
}

/// One genre-movie association
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreMovieLink {
    pub genre_id: i64,
    pub movie_id: i64,
}

/// A change waiting for the next save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedChange {
    Insert(StagedRow),
    Update(StagedRow),
    Delete {
        entity: &'static str,
        table: &'static str,
        id: i64,
    },
    Link(GenreMovieLink),
    Unlink(GenreMovieLink),
}

impl StagedChange {
    /// Stages deletion of `entity` by id
    pub fn delete<E: Entity>(entity: &E) -> Self {
        StagedChange::Delete {
            entity: E::NAME,
            table: E::TABLE,
            id: entity.id(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            StagedChange::Insert(_) => "insert",
            StagedChange::Update(_) => "update",
            StagedChange::Delete { .. } => "delete",
            StagedChange::Link(_) => "link",
            StagedChange::Unlink(_) => "unlink",
        }
    }
}

/// Ordered record of staged changes
#[derive(Debug, Default)]
pub struct ChangeTracker {
    staged: Vec<StagedChange>,
}

impl ChangeTracker {
    pub fn stage(&mut self, change: StagedChange) {
        debug!(kind = change.kind(), "Staged change");
        self.staged.push(change);
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    pub fn clear(&mut self) {
        self.staged.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &StagedChange> {
        self.staged.iter()
    }
}

/// Store-assigned key of a row inserted by the last flush
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertedKey {
    pub table: &'static str,
    pub id: i64,
}

/// One pooled connection plus the changes staged against it
pub struct Session {
    conn: PoolConnection<Sqlite>,
    tracker: ChangeTracker,
    inserted: Vec<InsertedKey>,
}

impl Session {
    /// Acquires a connection from the pool
    pub(crate) async fn open(pool: &DatabasePool) -> Result<Self, DatabaseError> {
        let conn = pool.acquire().await.map_err(classify)?;
        Ok(Self {
            conn,
            tracker: ChangeTracker::default(),
            inserted: Vec::new(),
        })
    }

    /// The session's connection, for reads
    pub(crate) fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    pub(crate) fn stage(&mut self, change: StagedChange) {
        self.tracker.stage(change);
    }

    pub(crate) fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    pub(crate) fn discard(&mut self) -> usize {
        let discarded = self.tracker.len();
        self.tracker.clear();
        discarded
    }

    pub(crate) fn inserted(&self) -> &[InsertedKey] {
        &self.inserted
    }

    /// Applies every staged change in one transaction
    ///
    /// Returns the number of rows written. On failure the transaction is
    /// rolled back and the staged changes are kept.
    pub(crate) async fn flush(&mut self) -> Result<u64, DatabaseError> {
        if self.tracker.is_empty() {
            return Ok(0);
        }

        let mut tx = Connection::begin(&mut *self.conn)
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        sqlx::query("PRAGMA defer_foreign_keys = ON")
            .execute(&mut *tx)
            .await
            .map_err(classify)?;

        let mut affected = 0u64;
        let mut inserted = Vec::new();
        for change in self.tracker.iter() {
            affected += apply(&mut *tx, change, &mut inserted).await?;
        }

        tx.commit().await.map_err(classify)?;

        debug!(
            changes = self.tracker.len(),
            rows_affected = affected,
            "Flushed staged changes"
        );
        self.tracker.clear();
        self.inserted = inserted;
        Ok(affected)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if !self.tracker.is_empty() {
            warn!(
                discarded = self.tracker.len(),
                "Session released with unsaved changes"
            );
        }
    }
}

async fn apply(
    conn: &mut SqliteConnection,
    change: &StagedChange,
    inserted: &mut Vec<InsertedKey>,
) -> Result<u64, DatabaseError> {
    match change {
        StagedChange::Insert(row) => {
            let sql = row.insert_sql();
            let mut query = sqlx::query(&sql);
            if row.id != 0 {
                query = query.bind(row.id);
            }
            let result = bind_values(query, &row.values)
                .execute(&mut *conn)
                .await
                .map_err(classify)?;

            inserted.push(InsertedKey {
                table: row.table,
                id: result.last_insert_rowid(),
            });
            Ok(result.rows_affected())
        }
        StagedChange::Update(row) => {
            let sql = row.update_sql();
            let result = bind_values(sqlx::query(&sql), &row.values)
                .bind(row.id)
                .execute(&mut *conn)
                .await
                .map_err(classify)?;

            if result.rows_affected() == 0 {
                return Err(DatabaseError::not_found(row.entity, row.id));
            }
            Ok(result.rows_affected())
        }
        StagedChange::Delete { entity, table, id } => {
            let sql = format!("DELETE FROM {} WHERE id = ?", table);
            let result = sqlx::query(&sql)
                .bind(*id)
                .execute(&mut *conn)
                .await
                .map_err(classify)?;

            if result.rows_affected() == 0 {
                return Err(DatabaseError::not_found(entity, id));
            }
            Ok(result.rows_affected())
        }
        StagedChange::Link(link) => {
            let sql = format!(
                "INSERT INTO {} (genre_id, movie_id) VALUES (?, ?)",
                GENRE_MOVIES_TABLE
            );
            let result = sqlx::query(&sql)
                .bind(link.genre_id)
                .bind(link.movie_id)
                .execute(&mut *conn)
                .await
                .map_err(classify)?;
            Ok(result.rows_affected())
        }
        StagedChange::Unlink(link) => {
            let sql = format!(
                "DELETE FROM {} WHERE genre_id = ? AND movie_id = ?",
                GENRE_MOVIES_TABLE
            );
            let result = sqlx::query(&sql)
                .bind(link.genre_id)
                .bind(link.movie_id)
                .execute(&mut *conn)
                .await
                .map_err(classify)?;

            if result.rows_affected() == 0 {
                return Err(DatabaseError::NotFound(format!(
                    "Genre {} is not linked to movie {}",
                    link.genre_id, link.movie_id
                )));
            }
            Ok(result.rows_affected())
        }
    }
}

fn bind_values<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    values: &'q [ColumnValue],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for value in values {
        query = match value {
            ColumnValue::Integer(v) => query.bind(*v),
            ColumnValue::Text(v) => query.bind(v.as_str()),
        };
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_catalog::{Actor, Movie};

    #[test]
    fn test_insert_sql_lets_store_assign_id() {
        let row = StagedRow::of(&Actor::new("Harrison", "Ford", "Dies to Kylo Ren"));

        assert_eq!(
            row.insert_sql(),
            "INSERT INTO actors (first_name, last_name, sensitive_information) VALUES (?, ?, ?)"
        );
    }

    #[test]
    fn test_insert_sql_with_explicit_id() {
        let row = StagedRow::of(&Movie::new("Barbie", "woke mind virus", 3).with_id(4));

        assert_eq!(
            row.insert_sql(),
            "INSERT INTO movies (id, name, description, actor_id) VALUES (?, ?, ?, ?)"
        );
    }

    #[test]
    fn test_update_sql_overwrites_every_column() {
        let row = StagedRow::of(&Actor::new("Charles", "Norris", "").with_id(1));

        assert_eq!(
            row.update_sql(),
            "UPDATE actors SET first_name = ?, last_name = ?, sensitive_information = ? WHERE id = ?"
        );
    }

    #[test]
    fn test_tracker_keeps_staging_order() {
        let mut tracker = ChangeTracker::default();
        let actor = Actor::new("Chuck", "Norris", "").with_id(1);

        tracker.stage(StagedChange::Update(StagedRow::of(&actor)));
        tracker.stage(StagedChange::delete(&actor));

        let kinds: Vec<&str> = tracker.iter().map(StagedChange::kind).collect();
        assert_eq!(kinds, vec!["update", "delete"]);
        assert_eq!(tracker.len(), 2);

        tracker.clear();
        assert!(tracker.is_empty());
    }
}
