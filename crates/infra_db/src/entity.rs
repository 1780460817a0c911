//! Table mapping for catalog entities
//!
//! The `Entity` trait gives the generic repository everything it needs to read
//! and write a row without knowing the concrete type: the table, the ordered
//! list of non-key columns, and the values for those columns.

use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

use domain_catalog::{Actor, Biography, Genre, Movie};

/// An owned column value staged for writing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Integer(i64),
    Text(String),
}

impl From<i64> for ColumnValue {
    fn from(value: i64) -> Self {
        ColumnValue::Integer(value)
    }
}

impl From<&str> for ColumnValue {
    fn from(value: &str) -> Self {
        ColumnValue::Text(value.to_string())
    }
}

impl From<&String> for ColumnValue {
    fn from(value: &String) -> Self {
        ColumnValue::Text(value.clone())
    }
}

/// A persistable entity with an integer identity stored in column `id`
///
/// Implementors list their remaining columns in `COLUMNS`; `values` must
/// return one value per column, in the same order.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Clone + Send + Sync + Unpin + 'static {
    /// Human-readable entity name used in logs and errors
    const NAME: &'static str;
    /// Backing table
    const TABLE: &'static str;
    /// Non-key columns, in write order
    const COLUMNS: &'static [&'static str];

    /// The entity's identity; `0` asks the store to assign one on insert
    fn id(&self) -> i64;

    /// Values for `COLUMNS`, in the same order
    fn values(&self) -> Vec<ColumnValue>;

    /// `SELECT` over every mapped column of the table
    fn select_sql() -> String {
        format!("SELECT id, {} FROM {}", Self::COLUMNS.join(", "), Self::TABLE)
    }
}

impl Entity for Actor {
    const NAME: &'static str = "Actor";
    const TABLE: &'static str = "actors";
    const COLUMNS: &'static [&'static str] = &["first_name", "last_name", "sensitive_information"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            (&self.first_name).into(),
            (&self.last_name).into(),
            (&self.sensitive_information).into(),
        ]
    }
}

impl Entity for Movie {
    const NAME: &'static str = "Movie";
    const TABLE: &'static str = "movies";
    const COLUMNS: &'static [&'static str] = &["name", "description", "actor_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            (&self.name).into(),
            (&self.description).into(),
            self.actor_id.into(),
        ]
    }
}

impl Entity for Genre {
    const NAME: &'static str = "Genre";
    const TABLE: &'static str = "genres";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![(&self.name).into()]
    }
}

impl Entity for Biography {
    const NAME: &'static str = "Biography";
    const TABLE: &'static str = "biographies";
    const COLUMNS: &'static [&'static str] = &["description", "actor_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![(&self.description).into(), self.actor_id.into()]
    }
}
